//! Main entry point for the pathtree CLI.
//!
//! This is the command-line interface for the pathtree library.
//! It provides commands for working with path trees:
//! - `tree`: Render the tree built from a list of paths
//! - `list`: List nodes with their levels and roles
//! - `select`: Resolve an absolute or relative query
//! - `breadcrumbs`: Print the pathway to a node
//! - `rows`: Group `id`/`parentId` rows into nested JSON

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

    // Route library diagnostics to stderr based on verbosity
    let logger = pathtree::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Tree(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Select(cmd) => cmd.execute(&global),
        cli::Command::Breadcrumbs(cmd) => cmd.execute(&global),
        cli::Command::Rows(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
