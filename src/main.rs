use std::io;

use clap::Parser;
use tracing::Level;

use project_tracker::shell::Shell;

#[derive(Parser)]
#[command(name = "project-tracker")]
#[command(about = "Track projects on an active and a finished list")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the board as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Open the desktop window instead of the terminal shell
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    #[cfg(feature = "gui")]
    if args.gui {
        project_tracker::gui::run()
            .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))?;
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock())
        .with_json(args.json)
        .run()
}
