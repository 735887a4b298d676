//! Line-oriented game loop driving a [`GameEngine`].

use crate::render;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_sos::{GameConfig, GameEngine, Letter, MoveError};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands:
  <row> <col> <S|O>  place a letter (0-based row and column)
  board              show the board
  end                end the current game
  new                start a new game with the same settings
  help               show this help
  quit               leave";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a letter.
    Place {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Letter to place.
        letter: Letter,
    },
    /// Reprint the board.
    Board,
    /// Force the game to end.
    End,
    /// Restart with the same settings.
    New,
    /// Show the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Unknown keyword or wrong number of words.
    #[display("Unrecognized command {_0:?}")]
    Unrecognized(String),
    /// A coordinate that is not a non-negative number.
    #[display("{_0:?} is not a valid row or column")]
    BadCoordinate(String),
    /// A letter other than S or O.
    #[display("{_0:?} is not S or O")]
    BadLetter(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [word] => match word.to_ascii_lowercase().as_str() {
                "board" | "b" => Ok(Command::Board),
                "end" => Ok(Command::End),
                "new" | "n" => Ok(Command::New),
                "help" | "h" | "?" => Ok(Command::Help),
                "quit" | "q" | "exit" => Ok(Command::Quit),
                _ => Err(CommandError::Unrecognized(s.trim().to_string())),
            },
            [row, col, letter] => Ok(Command::Place {
                row: coordinate(row)?,
                col: coordinate(col)?,
                letter: Letter::from_str(letter)
                    .map_err(|_| CommandError::BadLetter(letter.to_string()))?,
            }),
            _ => Err(CommandError::Unrecognized(s.trim().to_string())),
        }
    }
}

fn coordinate(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadCoordinate(word.to_string()))
}

/// Reply to a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the players.
    pub text: String,
    /// Whether the loop should stop.
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// A terminal session: one engine, restarted with the same settings on `new`.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    config: GameConfig,
}

impl Session {
    /// Creates a session and starts the first game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new();
        engine.start(config);
        Self { engine, config }
    }

    /// Returns the engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn banner(&self) -> String {
        format!(
            "New {} game on a {} board.\n{}\nCurrent turn: {}",
            self.config.mode(),
            self.config.size(),
            render::board(self.engine.board()),
            self.engine.current_player()
        )
    }

    /// Executes one command against the engine.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Place { row, col, letter } => self.place(row, col, letter),
            Command::Board => Reply::text(render::board(self.engine.board())),
            Command::End => {
                if !self.engine.is_active() {
                    return Reply::text("The game is already over. Type 'new' to play again.");
                }
                let end = self.engine.end_game();
                Reply::text(render::end_of_game(&end, self.engine.mode()))
            }
            Command::New => {
                self.engine.start(self.config);
                Reply::text(self.banner())
            }
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply {
                text: "Goodbye.".to_string(),
                quit: true,
            },
        }
    }

    fn place(&mut self, row: usize, col: usize, letter: Letter) -> Reply {
        match self.engine.submit_move(row, col, letter) {
            Ok(outcome) => {
                debug!(?outcome, "Move accepted");
                Reply::text(format!(
                    "{}\n{}",
                    render::board(self.engine.board()),
                    render::outcome(&outcome, self.engine.mode(), self.engine.tally())
                ))
            }
            Err(MoveError::NotActive(_)) => {
                Reply::text("The game is over. Type 'new' to play again.")
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Reply::text(format!("Illegal move: {}. Try again.", e))
            }
        }
    }

    /// Reads commands until `quit` or end of input, writing each reply.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.banner())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => self.handle(command),
                Err(e) => Reply::text(format!("{}. Type 'help' for commands.", e)),
            };

            writeln!(output, "{}", reply.text)?;
            output.flush()?;
            if reply.quit {
                break;
            }
        }

        info!("Session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_sos::{GameMode, GameStatus, Player};

    fn transcript(config: GameConfig, input: &str) -> String {
        let mut session = Session::new(config);
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "1 2 s".parse::<Command>(),
            Ok(Command::Place {
                row: 1,
                col: 2,
                letter: Letter::S
            })
        );
        assert_eq!("Board".parse::<Command>(), Ok(Command::Board));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "1 x O".parse::<Command>(),
            Err(CommandError::BadCoordinate("x".to_string()))
        );
        assert_eq!(
            "0 0 Z".parse::<Command>(),
            Err(CommandError::BadLetter("Z".to_string()))
        );
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(CommandError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_simple_game_transcript() {
        let config = GameConfig::new(3, GameMode::Simple).unwrap();
        let out = transcript(config, "0 0 S\n0 1 O\n0 2 S\n1 1 O\nquit\n");
        assert!(out.starts_with("New Simple game on a 3x3 board."));
        assert!(out.contains("Current turn: Red"));
        assert!(out.contains("Blue wins by creating the first SOS!"));
        assert!(out.contains("The game is over. Type 'new' to play again."));
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_illegal_move_allows_retry() {
        let mut session = Session::new(GameConfig::new(3, GameMode::General).unwrap());
        session.handle(Command::Place {
            row: 0,
            col: 0,
            letter: Letter::S,
        });
        let reply = session.handle(Command::Place {
            row: 0,
            col: 0,
            letter: Letter::O,
        });
        assert!(reply.text.starts_with("Illegal move: Cell (0, 0) is already occupied"));
        assert_eq!(session.engine().current_player(), Player::Red);

        let reply = session.handle(Command::Place {
            row: 1,
            col: 1,
            letter: Letter::O,
        });
        assert!(reply.text.ends_with("Current turn: Blue"));
    }

    #[test]
    fn test_end_and_new() {
        let mut session = Session::new(GameConfig::new(4, GameMode::General).unwrap());
        let reply = session.handle(Command::End);
        assert_eq!(reply.text, "Game ended with no winner. (Blue: 0, Red: 0)");
        assert_eq!(session.engine().status(), GameStatus::Finished);

        let reply = session.handle(Command::End);
        assert!(reply.text.starts_with("The game is already over"));

        let reply = session.handle(Command::New);
        assert!(reply.text.starts_with("New General game on a 4x4 board."));
        assert!(session.engine().is_active());
    }

    #[test]
    fn test_bad_input_is_reported() {
        let config = GameConfig::default();
        let out = transcript(config, "hello\n\n9 9 S\n");
        assert!(out.contains("Unrecognized command \"hello\". Type 'help' for commands."));
        assert!(out.contains("Illegal move: Position (9, 9) is outside the 3x3 board"));
    }
}
