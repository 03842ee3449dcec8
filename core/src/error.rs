//! Error types for the todo front ends.
//!
//! # Design
//! The store never fails; it reports absent ids through `Option` and
//! `CompleteOutcome::NotFound`. `TodoError` is what adapters build from
//! those outcomes and from bad input, so both front ends share one
//! vocabulary. `NotFound` gets a dedicated variant because callers map it
//! to its own status code; everything else is some form of invalid input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No live item has this id.
    #[error("Todo with ID {0} not found")]
    NotFound(i64),

    /// `complete` was requested for an item that is already complete.
    #[error("Todo {0} is already complete")]
    AlreadyComplete(i64),

    /// The id was not a decimal integer.
    #[error("Invalid ID '{0}': must be a number")]
    InvalidId(String),

    /// The task text was empty after trimming.
    #[error("Task description cannot be empty")]
    EmptyTask,

    /// The request body could not be parsed.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }
}
