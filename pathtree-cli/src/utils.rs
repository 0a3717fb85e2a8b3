//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path input parsing, and tree assembly.

use crate::error::CliError;
use clap::Args;
use pathtree::tree::PathTreeBuilder;
use pathtree::{human_friendly_phrase, walk_paths, Config, ConfigBuilder, PathTree};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Tree shape every command works on: terminals carry the input path,
/// intermediaries a human-friendly label.
pub type CliTree = PathTree<String, String>;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Where the list of paths comes from.
///
/// With neither option set, paths are read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read paths from FILE, one per line
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "walk")]
    pub input: Option<PathBuf>,

    /// Use the files below DIR as the paths
    #[arg(long, value_name = "DIR")]
    pub walk: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);
    if let Some(ref config_dir) = global.config_dir {
        builder = builder.with_config_dir(config_dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Splits path-list text into paths.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn parse_path_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read input text from a file, or from stdin when no file is given.
pub fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Collect the paths named by `input`.
pub fn read_paths(input: &InputArgs, config: &Config) -> Result<Vec<String>, CliError> {
    if let Some(ref dir) = input.walk {
        if !dir.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }
        return Ok(walk_paths(dir, &config.walk_options())?);
    }

    let text = read_input(input.input.as_ref())?;
    Ok(parse_path_lines(&text))
}

/// Splits an input path into units.
fn path_units(path: &String) -> Vec<String> {
    path.split('/').map(String::from).collect()
}

/// Build the tree for `paths`, joining qualified paths with the configured
/// separator.
pub fn build_tree(paths: Vec<String>, config: &Config) -> CliTree {
    let mut builder = PathTreeBuilder::new().with_separator(config.separator());
    builder.extend(paths, path_units, |node, _| human_friendly_phrase(node.unit()));
    builder.finish()
}

/// Read the configured input and build its tree.
pub fn load_tree(input: &InputArgs, config: &Config) -> Result<CliTree, CliError> {
    let paths = read_paths(input, config)?;
    log::debug!("building tree from {} paths", paths.len());
    Ok(build_tree(paths, config))
}
