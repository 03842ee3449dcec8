//! Domain types shared by the console and HTTP front ends.
//!
//! # Design
//! `TodoItem` is the only record the store holds. Adapters always receive
//! owned clones, so nothing outside the store keeps a reference into the
//! live collection.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub complete: bool,
}

impl TodoItem {
    /// Status marker used by the console listing.
    pub fn status_marker(&self) -> &'static str {
        if self.complete {
            "✅"
        } else {
            "❌"
        }
    }
}

/// Result of [`TodoStore::complete`](crate::TodoStore::complete).
///
/// "Already complete" and "not found" are reported separately because the
/// front ends render them differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The item was incomplete and is now complete.
    Completed(TodoItem),
    /// The item was already complete; nothing changed.
    AlreadyComplete(TodoItem),
    NotFound,
}

impl CompleteOutcome {
    pub fn item(&self) -> Option<&TodoItem> {
        match self {
            CompleteOutcome::Completed(item) | CompleteOutcome::AlreadyComplete(item) => Some(item),
            CompleteOutcome::NotFound => None,
        }
    }
}
