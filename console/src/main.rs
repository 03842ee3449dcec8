use anyhow::Result;
use clap::Parser;
use todo_console::{Console, ConsoleArgs};
use todo_core::TodoStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompt.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = ConsoleArgs::parse();

    let stdout = std::io::stdout();
    let mut console = Console::new(TodoStore::new(), stdout.lock());
    if !args.quiet {
        console.banner()?;
    }
    console.run(std::io::stdin().lock())?;
    Ok(())
}
