//! Command-line and environment configuration for the server binary.

use clap::Parser;
use todo_core::TodoStore;

use crate::SAMPLE_TASKS;

/// In-memory todo list served as a JSON HTTP API.
#[derive(Debug, Parser)]
#[command(name = "todo-server")]
#[command(version)]
pub struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Start with an empty list instead of the sample todos
    #[arg(long)]
    pub no_seed: bool,
}

impl ServerArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The store the server starts with: the sample todos unless `--no-seed`.
    pub fn initial_store(&self) -> TodoStore {
        if self.no_seed {
            TodoStore::new()
        } else {
            TodoStore::with_tasks(SAMPLE_TASKS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags() {
        let args =
            ServerArgs::try_parse_from(["todo-server", "--host", "0.0.0.0", "-p", "8080", "--no-seed"])
                .unwrap();
        assert_eq!(args.addr(), "0.0.0.0:8080");
        assert!(args.no_seed);
    }

    #[test]
    fn seeds_sample_todos_by_default() {
        let args = ServerArgs::try_parse_from(["todo-server", "-p", "3000"]).unwrap();
        let store = args.initial_store();
        let tasks: Vec<&str> = store.list().iter().map(|t| t.task.as_str()).collect();
        assert_eq!(tasks, SAMPLE_TASKS);
        assert!(store.list().iter().all(|t| !t.complete));
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn no_seed_starts_empty() {
        let args = ServerArgs::try_parse_from(["todo-server", "-p", "3000", "--no-seed"]).unwrap();
        let store = args.initial_store();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(ServerArgs::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
