//! In-memory todo store shared by the console and HTTP front ends.
//!
//! # Overview
//! `TodoStore` holds an ordered list of `TodoItem`s with monotonically
//! increasing ids. It supports insert, list, lookup, complete, update and
//! delete, each as a single synchronous step.
//!
//! # Design
//! - The store never returns errors. Absent ids come back as `None` or
//!   `CompleteOutcome::NotFound`; adapters turn those into `TodoError`.
//! - `complete` is three-way (completed / already complete / not found)
//!   while `update` sets the flag unconditionally.
//! - The store is a plain value with no global state; callers construct it
//!   and pass it where it is needed.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::TodoError;
pub use store::TodoStore;
pub use types::{CompleteOutcome, TodoItem};
pub use validate::{parse_id, validate_task};
