//! The in-memory todo collection.
//!
//! # Design
//! Items live in a `Vec` so insertion order is the listing order and deletes
//! keep the relative order of what remains. Lookups are linear scans; the
//! list is expected to stay small. `next_id` only ever grows, so an id is
//! never handed out twice even after its item is deleted.
//!
//! The store has no interior locking. Front ends that share it across
//! threads wrap it in a lock of their own.

use crate::types::{CompleteOutcome, TodoItem};

#[derive(Debug, Clone)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    next_id: i64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store pre-populated with `tasks`, in order.
    pub fn with_tasks<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for task in tasks {
            store.insert(task);
        }
        store
    }

    /// Append a new, incomplete item and return a copy of it.
    ///
    /// The task text is stored as given; callers validate it first.
    pub fn insert(&mut self, task: impl Into<String>) -> TodoItem {
        let item = TodoItem {
            id: self.next_id,
            task: task.into(),
            complete: false,
        };
        self.items.push(item.clone());
        self.next_id += 1;
        item
    }

    /// Every live item in insertion order.
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn find_by_id(&self, id: i64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mark `id` complete, reporting whether it already was.
    pub fn complete(&mut self, id: i64) -> CompleteOutcome {
        match self.position(id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                if item.complete {
                    CompleteOutcome::AlreadyComplete(item.clone())
                } else {
                    item.complete = true;
                    CompleteOutcome::Completed(item.clone())
                }
            }
            None => CompleteOutcome::NotFound,
        }
    }

    /// Set the completion flag unconditionally.
    pub fn update(&mut self, id: i64, complete: bool) -> Option<TodoItem> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.complete = complete;
        Some(item.clone())
    }

    /// Remove `id` and return what was removed.
    pub fn delete(&mut self, id: i64) -> Option<TodoItem> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `insert` will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
