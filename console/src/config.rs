use clap::Parser;

/// Manage an in-memory todo list from the terminal.
#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(version)]
pub struct ConsoleArgs {
    /// Skip the welcome banner and command menu
    #[arg(short, long, env = "TODO_QUIET")]
    pub quiet: bool,
}
