//! Select command implementation.
//!
//! This module implements the `select` command, which resolves a query to a
//! node and prints its qualified path. Queries may contain `.` and `..`
//! segments; with `--from` they are resolved relative to another node.

use crate::error::CliError;
use crate::utils::{load_configuration, load_tree, GlobalOptions, InputArgs};
use clap::Args;
use pathtree::{Config, Error};

/// Resolve a query to a node.
#[derive(Args)]
pub struct SelectCommand {
    /// Query, split on the configured separator
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Resolve the query relative to this node instead of the roots
    #[arg(long, value_name = "PATH")]
    pub from: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

impl SelectCommand {
    /// Execute the select command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;
        let tree = load_tree(&self.input, &config)?;

        let selected = match self.from {
            Some(ref from) => {
                let start = tree.select_path(from).ok_or_else(|| Error::NotFound {
                    resource: format!("node {from}"),
                })?;
                tree.select_node(start, &self.query)
            }
            None => tree.select_path(&self.query),
        };

        match selected {
            Some(id) => {
                println!("{}", tree[id].qualified_path());
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No node matches '{}'",
                self.query
            ))),
        }
    }
}
