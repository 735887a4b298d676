//! Text rendering of the board and of engine outcomes.

use strictly_sos::{Board, Cell, EndOutcome, GameMode, MoveOutcome, Player, SosTally, Verdict};

/// Renders the board with row and column indices; empty cells show as `.`.
pub fn board(board: &Board) -> String {
    let width = board.size().saturating_sub(1).to_string().len();
    let mut out = format!("{:width$} ", "");

    for col in 0..board.size() {
        out.push_str(&format!(" {:>width$}", col));
    }

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("\n{:>width$} ", row));
        for cell in cells {
            let symbol = match cell {
                Cell::Empty => ".".to_string(),
                Cell::Filled(letter) => letter.to_string(),
            };
            out.push_str(&format!(" {:>width$}", symbol));
        }
    }

    out
}

/// Describes a successful move; `tally` is the engine's tally after it.
pub fn outcome(outcome: &MoveOutcome, mode: GameMode, tally: &SosTally) -> String {
    match outcome {
        MoveOutcome::Win { winner } => format!("{} wins by creating the first SOS!", winner),
        MoveOutcome::ExtraTurn { player, .. } => format!(
            "SOS! {} moves again. {}",
            player,
            scores(tally.get(Player::Blue), tally.get(Player::Red))
        ),
        MoveOutcome::End(end) => end_of_game(end, mode),
        MoveOutcome::NextTurn { player } => format!("Current turn: {}", player),
    }
}

/// Describes how a game ended.
pub fn end_of_game(end: &EndOutcome, mode: GameMode) -> String {
    let scores = scores(end.blue_score, end.red_score);
    match (end.verdict, mode) {
        (Some(Verdict::Draw), GameMode::Simple) => {
            "The game is a draw! No SOS was created.".to_string()
        }
        (Some(Verdict::Draw), GameMode::General) => format!("The game is a draw! {}", scores),
        (Some(Verdict::Winner(player)), _) => format!("{} wins! {}", player, scores),
        (None, GameMode::Simple) => "Game ended with no winner.".to_string(),
        (None, GameMode::General) => format!("Game ended with no winner. {}", scores),
    }
}

fn scores(blue: u32, red: u32) -> String {
    format!("(Blue: {}, Red: {})", blue, red)
}
