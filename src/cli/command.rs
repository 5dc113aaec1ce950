//! Parsing of one input line into a command

use thiserror::Error;

use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Name is every word after `add`, joined with single spaces; may be empty
    Add(String),
    List,
    Done(TaskId),
    Delete(TaskId),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid task ID")]
    InvalidId,

    #[error("Invalid command. Type 'help' for a list of commands.")]
    UnknownCommand(String),
}

impl Command {
    /// Parse a raw input line.
    ///
    /// Returns `Ok(None)` for a line with no words.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args = words.collect::<Vec<_>>().join(" ");

        let command = match name {
            "add" => Command::Add(args),
            "list" => Command::List,
            "done" => Command::Done(parse_id(&args)?),
            "delete" => Command::Delete(parse_id(&args)?),
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(args: &str) -> Result<TaskId, ParseError> {
    args.parse().map_err(|_| ParseError::InvalidId)
}
