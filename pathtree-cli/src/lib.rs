//! Library target of the pathtree CLI.
//!
//! Exposes the clap definitions and command implementations so that
//! documentation tooling can render the command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
