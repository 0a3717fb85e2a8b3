//! Rows command implementation.
//!
//! This module implements the `rows` command, which reads a JSON array of
//! flat records linked by `id`/`parentId` and prints them as a nested tree
//! where every record gains a `children` array.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use pathtree::{tree_of, FlatRow};
use std::io::Write;
use std::path::PathBuf;

/// Group id/parentId rows into a nested tree.
#[derive(Args)]
pub struct RowsCommand {
    /// Read the JSON array from FILE instead of stdin
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl RowsCommand {
    /// Execute the rows command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let text = read_input(self.input.as_ref())?;
        let rows: Vec<FlatRow> = serde_json::from_str(&text).map_err(|e| {
            CliError::InvalidArguments(format!("expected a JSON array of rows: {e}"))
        })?;

        let forest = tree_of(&rows);
        log::debug!("grouped {} rows under {} roots", rows.len(), forest.len());

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if self.compact {
            serde_json::to_writer(&mut handle, &forest)?;
        } else {
            serde_json::to_writer_pretty(&mut handle, &forest)?;
        }
        writeln!(handle)?;

        Ok(())
    }
}
