//! SOS game engine.
//!
//! `GameEngine` owns the board, enforces move legality, detects completed
//! SOS sequences, keeps the tallies and decides the outcome for both rule
//! variants. It performs no I/O; a presentation layer drives it one call at
//! a time and renders the structured outcomes it returns.

use crate::action::{Move, MoveError, MoveRecord};
use crate::config::{ConfigurationError, GameConfig};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::{EndOutcome, MoveOutcome, SosTally, Verdict};
use crate::rules;
use crate::types::{Board, Cell, GameMode, GameStatus, Letter, Player, Position};
use tracing::{debug, info, instrument, warn};

/// State machine for a single SOS game.
///
/// `Inactive --reset--> Active --(win or full board)--> Finished`, with
/// `end_game` forcing `Finished` at any time. Only `reset` leaves `Finished`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) tally: SosTally,
    pub(crate) history: Vec<MoveRecord>,
}

impl GameEngine {
    /// Creates an inactive engine holding an empty default-sized board.
    #[instrument]
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::new(*config.size()),
            config,
            current_player: Player::Blue,
            status: GameStatus::Inactive,
            tally: SosTally::default(),
            history: Vec::new(),
        }
    }

    /// Starts a fresh game of the given size and mode.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `size` is outside `3..=20`; the
    /// engine is left untouched in that case.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: usize, mode: GameMode) -> Result<(), ConfigurationError> {
        let config = GameConfig::new(size, mode)?;
        self.start(config);
        Ok(())
    }

    /// Starts a fresh game from an already validated configuration.
    #[instrument(skip(self))]
    pub fn start(&mut self, config: GameConfig) {
        self.config = config;
        self.board = Board::new(*config.size());
        self.current_player = Player::Blue;
        self.status = GameStatus::Active;
        self.tally = SosTally::default();
        self.history.clear();
        info!(size = %config.size(), mode = %config.mode(), "Game started");
    }

    /// Places `letter` at (`row`, `col`) for the current player.
    ///
    /// Outcomes are resolved in order: a Simple-mode SOS wins, a
    /// General-mode SOS scores and keeps the turn, a full board ends the
    /// game, otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Returns `MoveError` when the game is not active, the position is off
    /// the board or the cell is occupied. In debug builds a move that breaks
    /// an engine invariant is rolled back and reported as
    /// `MoveError::InvariantViolation`. A rejected move changes nothing.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn submit_move(
        &mut self,
        row: usize,
        col: usize,
        letter: Letter,
    ) -> Result<MoveOutcome, MoveError> {
        let action = Move::new(self.current_player, Position::new(row, col), letter);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Cell::Filled(letter))?;
        let completed = rules::count_sos(&self.board, action.position);
        self.history.push(MoveRecord::new(action, completed));
        debug!(%action, completed, "Move applied");

        let outcome = self.resolve(completed);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, move rolled back");
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Applies the outcome rules after a placement that completed `completed` lines.
    fn resolve(&mut self, completed: u32) -> MoveOutcome {
        let mover = self.current_player;

        match self.mode() {
            GameMode::Simple if completed > 0 => {
                self.status = GameStatus::Finished;
                info!(winner = %mover, "First SOS wins");
                return MoveOutcome::Win { winner: mover };
            }
            GameMode::General if completed > 0 => {
                let tally = self.tally.add(mover, completed);
                debug!(player = %mover, tally, "SOS scored");
                // A point on the last empty cell still ends the game.
                if !rules::is_full(&self.board) {
                    return MoveOutcome::ExtraTurn {
                        player: mover,
                        tally,
                    };
                }
            }
            _ => {}
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Finished;
            let verdict = match self.mode() {
                GameMode::Simple => Verdict::Draw,
                GameMode::General => rules::verdict(&self.tally),
            };
            info!(%verdict, "Board full");
            return MoveOutcome::End(EndOutcome::new(Some(verdict), self.tally));
        }

        self.current_player = mover.opponent();
        MoveOutcome::NextTurn {
            player: self.current_player,
        }
    }

    /// Forces the game to end.
    ///
    /// A verdict is only reported for a General game whose board is full;
    /// otherwise the outcome carries the tallies with no verdict.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> EndOutcome {
        self.status = GameStatus::Finished;
        let verdict = (self.mode() == GameMode::General && rules::is_full(&self.board))
            .then(|| rules::verdict(&self.tally));
        info!(?verdict, "Game ended");
        EndOutcome::new(verdict, self.tally)
    }

    /// Returns true when no empty cell remains.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Returns the player to move. Meaningless once the game is finished.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Returns the configuration of the current game.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the rule variant.
    pub fn mode(&self) -> GameMode {
        *self.config.mode()
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at (`row`, `col`), `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(Position::new(row, col))
    }

    /// Returns both players' SOS counts.
    pub fn tally(&self) -> &SosTally {
        &self.tally
    }

    /// Returns the moves of the current game, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_inactive() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::Inactive);
        assert_eq!(engine.board().size(), 3);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_reset_starts_game() {
        let mut engine = GameEngine::new();
        engine.reset(6, GameMode::General).unwrap();
        assert_eq!(engine.status(), GameStatus::Active);
        assert_eq!(engine.board().size(), 6);
        assert_eq!(engine.mode(), GameMode::General);
        assert_eq!(engine.current_player(), Player::Blue);
        assert_eq!(engine.tally().total(), 0);
    }

    #[test]
    fn test_bad_reset_leaves_engine_untouched() {
        let mut engine = GameEngine::new();
        engine.reset(4, GameMode::Simple).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();

        assert!(engine.reset(21, GameMode::General).is_err());
        assert!(engine.reset(2, GameMode::General).is_err());
        assert_eq!(engine.board().size(), 4);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.status(), GameStatus::Active);
    }

    #[test]
    fn test_reset_clears_finished_game() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::Simple).unwrap();
        engine.end_game();
        engine.reset(3, GameMode::Simple).unwrap();
        assert!(engine.is_active());
        assert!(engine.history().is_empty());
        assert_eq!(engine.cell(0, 0), Some(Cell::Empty));
    }

    #[test]
    fn test_turn_passes_without_sos() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::Simple).unwrap();
        let outcome = engine.submit_move(0, 0, Letter::S).unwrap();
        assert_eq!(outcome, MoveOutcome::NextTurn { player: Player::Red });
        assert_eq!(engine.current_player(), Player::Red);
        assert_eq!(engine.cell(0, 0), Some(Cell::Filled(Letter::S)));
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.submit_move(0, 0, Letter::S),
            Err(MoveError::NotActive(GameStatus::Inactive))
        );
        assert_eq!(engine.board().filled_count(), 0);
    }

    #[test]
    fn test_general_score_on_last_cell_ends_game() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        // Fill everything but (0,1) without forming any SOS.
        let moves = [
            (0, 0, Letter::S),
            (0, 2, Letter::S),
            (1, 0, Letter::S),
            (1, 1, Letter::S),
            (1, 2, Letter::S),
            (2, 0, Letter::S),
            (2, 1, Letter::S),
            (2, 2, Letter::S),
        ];
        for (row, col, letter) in moves {
            assert!(matches!(
                engine.submit_move(row, col, letter).unwrap(),
                MoveOutcome::NextTurn { .. }
            ));
        }
        // Eight moves: Blue is to move again.
        assert_eq!(engine.current_player(), Player::Blue);

        let outcome = engine.submit_move(0, 1, Letter::O).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::End(EndOutcome {
                verdict: Some(Verdict::Winner(Player::Blue)),
                blue_score: 1,
                red_score: 0,
            })
        );
        assert_eq!(engine.status(), GameStatus::Finished);
    }

    #[test]
    fn test_end_game_without_full_board_has_no_verdict() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();
        let end = engine.end_game();
        assert_eq!(end.verdict, None);
        assert_eq!(engine.status(), GameStatus::Finished);
        assert!(engine.submit_move(1, 1, Letter::O).is_err());
    }

    #[test]
    fn test_end_game_simple_never_has_verdict() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::Simple).unwrap();
        assert_eq!(engine.end_game().verdict, None);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_broken_invariant_rolls_back_move() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();
        engine.tally.add(Player::Blue, 5);
        let before = engine.clone();

        let result = engine.submit_move(1, 1, Letter::O);

        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.history(), before.history());
        assert_eq!(engine.tally(), before.tally());
        assert_eq!(engine.current_player(), before.current_player());
        assert_eq!(engine.status(), GameStatus::Active);
    }
}
