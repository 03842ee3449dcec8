//! Parsing of console input lines.
//!
//! A line is split on whitespace; the first word is the command and is
//! matched case-insensitively. `add` joins the remaining words with single
//! spaces. `complete` and `delete` read the first argument as an id and
//! ignore anything after it.

use thiserror::Error;
use todo_core::parse_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    List,
    Complete(i64),
    Delete(i64),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please provide a task description!")]
    MissingTask,

    #[error("Please provide a todo ID!")]
    MissingId,

    #[error("Invalid ID! Please enter a number.")]
    InvalidId(String),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };

        let command = match first.to_lowercase().as_str() {
            "add" => {
                let task = words.collect::<Vec<_>>().join(" ");
                if task.is_empty() {
                    return Err(CommandError::MissingTask);
                }
                Command::Add(task)
            }
            "list" => Command::List,
            "complete" => Command::Complete(id_arg(words.next())?),
            "delete" => Command::Delete(id_arg(words.next())?),
            "help" => Command::Help,
            "quit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn id_arg(word: Option<&str>) -> Result<i64, CommandError> {
    let raw = word.ok_or(CommandError::MissingId)?;
    parse_id(raw).map_err(|_| CommandError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn add_joins_words() {
        assert_eq!(
            Command::parse("add  buy   oat milk "),
            Ok(Some(Command::Add("buy oat milk".to_string())))
        );
    }

    #[test]
    fn add_without_task() {
        assert_eq!(Command::parse("add"), Err(CommandError::MissingTask));
        assert_eq!(Command::parse("add    "), Err(CommandError::MissingTask));
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(Command::parse("LIST"), Ok(Some(Command::List)));
        assert_eq!(Command::parse("Complete 3"), Ok(Some(Command::Complete(3))));
        assert_eq!(Command::parse("QuIt"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn id_commands() {
        assert_eq!(Command::parse("delete 12"), Ok(Some(Command::Delete(12))));
        assert_eq!(Command::parse("complete 1 extra"), Ok(Some(Command::Complete(1))));
        assert_eq!(Command::parse("delete"), Err(CommandError::MissingId));
        assert_eq!(Command::parse("delete -4"), Ok(Some(Command::Delete(-4))));
        assert_eq!(
            Command::parse("complete one"),
            Err(CommandError::InvalidId("one".to_string()))
        );
    }

    #[test]
    fn unknown_command_is_lowercased() {
        assert_eq!(
            Command::parse("Frobnicate now"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
