//! The interactive read-eval loop.
//!
//! # Design
//! `Console` owns its `TodoStore` outright; the loop is single-threaded and
//! blocking, so no lock is involved. Input and output are generic so the
//! loop can be driven from in-memory buffers.

use std::io::{self, BufRead, Write};

use todo_core::{CompleteOutcome, TodoStore};
use tracing::{debug, warn};

use crate::command::{Command, CommandError};

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    store: TodoStore,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(store: TodoStore, out: W) -> Self {
        Self { store, out }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn into_parts(self) -> (TodoStore, W) {
        (self.store, self.out)
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "🚀 Welcome to Todo App!")?;
        writeln!(self.out, "An in-memory todo list for the terminal")?;
        self.menu()
    }

    pub fn menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "🎯 Todo App - Available Commands:")?;
        writeln!(self.out, "1. add <task>     - Add a new todo")?;
        writeln!(self.out, "2. list           - Show all todos")?;
        writeln!(self.out, "3. complete <id>  - Mark a todo as complete")?;
        writeln!(self.out, "4. delete <id>    - Delete a todo")?;
        writeln!(self.out, "5. help           - Show this menu")?;
        writeln!(self.out, "6. quit           - Exit the application")?;
        writeln!(self.out)
    }

    /// Prompt and evaluate lines until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.out, "📝 Enter command: ")?;
            self.out.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(self.out)?;
                    debug!("end of input");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("unreadable input line: {e}");
                    writeln!(self.out, "❌ Error reading input: {e}")?;
                    continue;
                }
                Err(e) => return Err(e),
            }

            if self.handle_line(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Parse and execute a single line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                debug!(%err, "rejected input");
                writeln!(self.out, "❌ {err}")?;
                if matches!(err, CommandError::Unknown(_)) {
                    writeln!(self.out, "Type 'help' to see available commands.")?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::Add(task) => {
                let todo = self.store.insert(task);
                writeln!(self.out, "✅ Added todo: {} (ID: {})", todo.task, todo.id)?;
            }
            Command::List => self.list()?,
            Command::Complete(id) => match self.store.complete(id) {
                CompleteOutcome::Completed(todo) => {
                    writeln!(self.out, "✅ Marked todo {id} as complete: {}", todo.task)?;
                }
                CompleteOutcome::AlreadyComplete(_) => {
                    writeln!(self.out, "❌ Todo {id} is already complete!")?;
                }
                CompleteOutcome::NotFound => self.not_found(id)?,
            },
            Command::Delete(id) => match self.store.delete(id) {
                Some(todo) => writeln!(self.out, "🗑️  Deleted todo {id}: {}", todo.task)?,
                None => self.not_found(id)?,
            },
            Command::Help => self.menu()?,
            Command::Quit => {
                writeln!(self.out, "👋 Thanks for using Todo App! Goodbye!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.out, "📝 No todos found. Add some todos first!");
        }

        writeln!(self.out)?;
        writeln!(self.out, "📋 Your Todo List:")?;
        writeln!(self.out, "==================")?;
        for todo in self.store.list() {
            writeln!(self.out, "{} [{}] {}", todo.status_marker(), todo.id, todo.task)?;
        }
        writeln!(self.out)
    }

    fn not_found(&mut self, id: i64) -> io::Result<()> {
        writeln!(self.out, "❌ Todo with ID {id} not found!")
    }
}
