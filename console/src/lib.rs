//! Line-oriented console front end for the todo store.
//!
//! Commands are parsed by [`command`] and evaluated against a `TodoStore`
//! owned by [`repl::Console`], which writes human-readable results.

pub mod command;
pub mod config;
pub mod repl;

pub use command::{Command, CommandError};
pub use config::ConsoleArgs;
pub use repl::{Console, Flow};
