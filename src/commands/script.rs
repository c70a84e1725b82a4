//! Command script parsing
//!
//! One command per line, arguments separated by whitespace:
//!
//! ```text
//! # comment
//! setState 1b2 345 678
//! randomizeState 20
//! printState
//! move left
//! solve A-star h1
//! solve beam 10
//! maxNodes 5000
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use super::session::{Outcome, Session, SessionError};
use crate::core::{Direction, MoveError};
use crate::solver::{Algorithm, AlgorithmError};
use std::fmt;
use std::str::Lines;
use thiserror::Error;

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `setState <layout>`: the rest of the line is the layout
    SetState(String),
    /// `randomizeState <n>`
    Randomize(usize),
    /// `printState`
    Print,
    /// `move <direction>`
    Move(Direction),
    /// `solve <algorithm> <param>`
    Solve(Algorithm),
    /// `maxNodes <n>`
    MaxNodes(usize),
}

/// Error type for script lines that cannot be run
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Command '{0}' is missing an argument")]
    MissingArgument(&'static str),
    #[error("Command '{command}' expects a non-negative integer, got '{value}'")]
    InvalidNumber { command: &'static str, value: String },
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

fn parse_count(command: &'static str, value: Option<&str>) -> Result<usize, ScriptError> {
    let value = value.ok_or(ScriptError::MissingArgument(command))?;
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

impl Command {
    /// Parse one script line
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    /// Returns `ScriptError` for unknown commands, missing or malformed
    /// arguments, unknown directions and unknown algorithms.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::commands::Command;
    /// use eight_puzzle::core::Direction;
    ///
    /// assert_eq!(Command::parse("move up").unwrap(), Some(Command::Move(Direction::Up)));
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// assert!(Command::parse("fly away").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));
        let mut args = rest.split_whitespace();

        let command = match keyword {
            "setState" => {
                if rest.is_empty() {
                    return Err(ScriptError::MissingArgument("setState"));
                }
                Self::SetState(rest.to_string())
            }
            "randomizeState" => Self::Randomize(parse_count("randomizeState", args.next())?),
            "printState" => Self::Print,
            "move" => {
                let direction = args.next().ok_or(ScriptError::MissingArgument("move"))?;
                Self::Move(direction.parse()?)
            }
            "solve" => {
                let name = args.next().ok_or(ScriptError::MissingArgument("solve"))?;
                let param = args.next().ok_or(ScriptError::MissingArgument("solve"))?;
                Self::Solve(Algorithm::from_parts(name, param)?)
            }
            "maxNodes" => Self::MaxNodes(parse_count("maxNodes", args.next())?),
            other => return Err(ScriptError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Display name used in command headers
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SetState(_) => "Set State",
            Self::Randomize(_) => "Randomize State",
            Self::Print => "Print State",
            Self::Move(_) => "Move",
            Self::Solve(_) => "Solve",
            Self::MaxNodes(_) => "Max Nodes",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetState(layout) => write!(f, "setState {layout}"),
            Self::Randomize(n) => write!(f, "randomizeState {n}"),
            Self::Print => f.write_str("printState"),
            Self::Move(direction) => write!(f, "move {direction}"),
            Self::Solve(algorithm) => match algorithm {
                Algorithm::AStar(heuristic) => write!(f, "solve A-star {heuristic}"),
                Algorithm::Beam { width } => write!(f, "solve beam {width}"),
            },
            Self::MaxNodes(n) => write!(f, "maxNodes {n}"),
        }
    }
}

/// One executed (or rejected) script line
#[derive(Debug)]
pub struct ScriptStep {
    /// 1-based line number in the script
    pub line: usize,
    /// 1-based command counter, `None` when the line failed to parse
    pub number: Option<usize>,
    /// The command that ran, if the line parsed
    pub command: Option<Command>,
    pub result: Result<Outcome, ScriptError>,
}

/// Lazily runs a script against a session, one command per `next()`
///
/// Commands execute as the iterator is advanced, so output can be shown
/// before later (possibly slow) solves start. A failing line never stops the
/// script.
pub struct ScriptRunner<'s, 'a> {
    session: &'s mut Session,
    lines: std::iter::Enumerate<Lines<'a>>,
    executed: usize,
}

impl<'s, 'a> ScriptRunner<'s, 'a> {
    pub fn new(session: &'s mut Session, source: &'a str) -> Self {
        Self {
            session,
            lines: source.lines().enumerate(),
            executed: 0,
        }
    }
}

impl Iterator for ScriptRunner<'_, '_> {
    type Item = ScriptStep;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let line = index + 1;

            match Command::parse(raw) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    self.executed += 1;
                    let result = self
                        .session
                        .execute(command.clone())
                        .map_err(ScriptError::from);
                    return Some(ScriptStep {
                        line,
                        number: Some(self.executed),
                        command: Some(command),
                        result,
                    });
                }
                Err(error) => {
                    return Some(ScriptStep {
                        line,
                        number: None,
                        command: None,
                        result: Err(error),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SessionConfig;
    use crate::core::{Board, Heuristic};

    #[test]
    fn parses_every_command() {
        assert_eq!(
            Command::parse("setState 1b2 345 678").unwrap(),
            Some(Command::SetState("1b2 345 678".to_string()))
        );
        assert_eq!(
            Command::parse("randomizeState 12").unwrap(),
            Some(Command::Randomize(12))
        );
        assert_eq!(Command::parse("printState").unwrap(), Some(Command::Print));
        assert_eq!(
            Command::parse("move LEFT").unwrap(),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            Command::parse("solve A-star h2").unwrap(),
            Some(Command::Solve(Algorithm::AStar(Heuristic::Manhattan)))
        );
        assert_eq!(
            Command::parse("solve beam 5").unwrap(),
            Some(Command::Solve(Algorithm::Beam { width: 5 }))
        );
        assert_eq!(
            Command::parse("maxNodes 100").unwrap(),
            Some(Command::MaxNodes(100))
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
        assert_eq!(Command::parse("# solve beam 3").unwrap(), None);
    }

    #[test]
    fn reports_bad_lines() {
        assert!(matches!(
            Command::parse("jump 3"),
            Err(ScriptError::UnknownCommand(name)) if name == "jump"
        ));
        assert!(matches!(
            Command::parse("move"),
            Err(ScriptError::MissingArgument("move"))
        ));
        assert!(matches!(
            Command::parse("move diagonal"),
            Err(ScriptError::Move(MoveError::UnknownDirection(_)))
        ));
        assert!(matches!(
            Command::parse("randomizeState many"),
            Err(ScriptError::InvalidNumber { command: "randomizeState", .. })
        ));
        assert!(matches!(
            Command::parse("maxNodes -1"),
            Err(ScriptError::InvalidNumber { command: "maxNodes", .. })
        ));
        assert!(matches!(
            Command::parse("solve A-star"),
            Err(ScriptError::MissingArgument("solve"))
        ));
        assert!(matches!(
            Command::parse("solve bfs 3"),
            Err(ScriptError::Algorithm(AlgorithmError::UnknownAlgorithm(_)))
        ));
        assert!(matches!(
            Command::parse("setState"),
            Err(ScriptError::MissingArgument("setState"))
        ));
    }

    #[test]
    fn display_matches_script_syntax() {
        for line in [
            "setState 1b2 345 678",
            "randomizeState 7",
            "printState",
            "move up",
            "solve A-star h1",
            "solve beam 3",
            "maxNodes 10",
        ] {
            let command = Command::parse(line).unwrap().unwrap();
            assert_eq!(command.to_string(), line);
        }
    }

    #[test]
    fn runner_numbers_commands_and_keeps_going_after_errors() {
        let script = "\
# warm up
setState 1b2 345 678
teleport
move left
printState
";
        let mut session = Session::new(SessionConfig::default());
        let steps: Vec<ScriptStep> = ScriptRunner::new(&mut session, script).collect();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[0].number, Some(1));
        assert!(steps[0].result.is_ok());

        assert_eq!(steps[1].line, 3);
        assert_eq!(steps[1].number, None);
        assert!(steps[1].result.is_err());

        assert_eq!(steps[2].number, Some(2));
        assert_eq!(steps[3].number, Some(3));
        assert_eq!(session.current(), &Board::solved());
    }
}
