//! Main entry point for the cfgtree CLI.
//!
//! This is the command-line interface over the cfgtree library. A tree is
//! built from repeated `--set PATH=VALUE` options, then one command runs
//! against it:
//! - `get`: Read a value
//! - `count`: Count the children of a node
//! - `keys`: List the paths of all leaves
//! - `dump`: Print the tree

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    let logger = cfgtree::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        sep: cli.sep,
        assignments: cli.assignments,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Count(cmd) => cmd.execute(&global),
        cli::Command::Fields(cmd) => cmd.execute(&global),
        cli::Command::Keys(cmd) => cmd.execute(&global),
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::Dump(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
