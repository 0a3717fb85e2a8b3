//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BreadcrumbsCommand, CompletionsCommand, ListCommand, RowsCommand, SelectCommand, TreeCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for building and navigating path trees.
#[derive(Parser)]
#[command(name = "pathtree")]
#[command(version, about = "Build and navigate trees of delimited paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PATHTREE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the tree built from a list of paths
    Tree(TreeCommand),

    /// List tree nodes
    List(ListCommand),

    /// Resolve a query to a node
    Select(SelectCommand),

    /// Print the breadcrumb pathway to a node
    Breadcrumbs(BreadcrumbsCommand),

    /// Group id/parentId rows into a nested tree
    Rows(RowsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
