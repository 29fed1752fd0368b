//! Parsing of player input lines.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at 1-indexed `(line, column)`.
    Play {
        /// Row.
        line: i32,
        /// Column.
        column: i32,
    },
    /// Start over on the same board.
    Reset,
    /// Start a new game on a board of a different size.
    Resize(usize),
    /// Print the board again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{input}' (type 'help' for commands)")]
pub struct CommandError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  <line> <column>   place your mark, e.g. `2 3`
  reset | start     start over on the same board
  size <n>          start a new game on an n×n board
  show              print the board
  help              print this list
  quit              leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || CommandError {
            input: input.to_string(),
        };
        let words: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            ["reset" | "start"] => Ok(Command::Reset),
            ["show"] => Ok(Command::Show),
            ["help" | "?"] => Ok(Command::Help),
            ["quit" | "exit" | "q"] => Ok(Command::Quit),
            ["size", n] => n.parse().map(Command::Resize).map_err(|_| err()),
            [line, column] => {
                let line = line.parse().map_err(|_| err())?;
                let column = column.parse().map_err(|_| err())?;
                Ok(Command::Play { line, column })
            }
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play() {
        assert_eq!("2 3".parse(), Ok(Command::Play { line: 2, column: 3 }));
        assert_eq!(" 1,1 ".parse(), Ok(Command::Play { line: 1, column: 1 }));
        assert_eq!("0 -4".parse(), Ok(Command::Play { line: 0, column: -4 }));
    }

    #[test]
    fn test_keywords() {
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("start".parse(), Ok(Command::Reset));
        assert_eq!("size 5".parse(), Ok(Command::Resize(5)));
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_garbage() {
        let err = "a b c".parse::<Command>().unwrap_err();
        assert_eq!(err.input, "a b c");
        assert!("size -1".parse::<Command>().is_err());
        assert!("two three".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
