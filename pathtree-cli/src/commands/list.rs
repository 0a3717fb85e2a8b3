//! List command implementation.
//!
//! This module implements the `list` command, which displays the nodes of a
//! path tree in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, load_tree, CliTree, GlobalOptions, InputArgs};
use clap::{Args, ValueEnum};
use pathtree::tree::ListOrder;
use pathtree::{Config, PathTreeNode};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["level", "path", "unit", "terminal", "label"];

/// List tree nodes.
#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "PATHTREE_LIST_FORMAT",
        ignore_case = true
    )]
    pub format: ListFormat,

    /// Deepest level to list (roots are level 0)
    #[arg(long, value_name = "LEVEL")]
    pub max_depth: Option<usize>,

    /// Only list nodes where an input path ends
    #[arg(long)]
    pub terminals_only: bool,

    /// List each level of siblings before descending
    #[arg(long)]
    pub siblings_first: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

type Node = PathTreeNode<String, String>;

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let overrides = Config {
            max_depth: self.max_depth,
            ..Config::default()
        };
        let config = load_configuration(global, overrides)?;

        // 2. Build the tree
        let tree = load_tree(&self.input, &config)?;

        // 3. Collect nodes; terminal filtering must not prune intermediaries
        let order = if self.siblings_first {
            ListOrder::SiblingsFirst
        } else {
            ListOrder::PreOrder
        };
        let mut nodes = tree.list_nodes_ordered(order, |_| true, config.max_depth);
        if self.terminals_only {
            nodes.retain(|node| node.is_terminal());
        }

        // 4. Format and output to stdout
        match self.format {
            ListFormat::Table => format_as_table(&tree, &nodes)?,
            ListFormat::Json => format_as_json(&nodes)?,
            ListFormat::Csv => format_as_delimited(&nodes, b',')?,
            ListFormat::Tsv => format_as_delimited(&nodes, b'\t')?,
        }

        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format nodes as a human-readable table, indenting units by level.
fn format_as_table(tree: &CliTree, nodes: &[&Node]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for node in nodes {
        writeln!(
            handle,
            "{}\t{}\t{}{}\t{}\t{}",
            node.level(),
            node.qualified_path(),
            "  ".repeat(node.level()),
            node.unit(),
            yes_no(node.is_terminal()),
            node.intermediary().map_or("-", String::as_str),
        )?;
    }

    log::debug!("listed {} of {} nodes", nodes.len(), tree.len());
    Ok(())
}

/// Format nodes as JSON.
fn format_as_json(nodes: &[&Node]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = nodes
        .iter()
        .map(|node| {
            serde_json::json!({
                "level": node.level(),
                "path": node.qualified_path(),
                "unit": node.unit(),
                "terminal": node.is_terminal(),
                "label": node.intermediary(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format nodes as delimited output (CSV or TSV).
fn format_as_delimited(nodes: &[&Node], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for node in nodes {
        writer
            .write_record([
                node.level().to_string(),
                node.qualified_path().to_string(),
                node.unit().to_string(),
                node.is_terminal().to_string(),
                node.intermediary().cloned().unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
