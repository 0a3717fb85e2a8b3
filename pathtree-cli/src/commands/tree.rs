//! Tree command implementation.
//!
//! This module implements the `tree` command, which renders the tree built
//! from a list of paths as a text outline, JSON, or YAML.

use crate::error::CliError;
use crate::utils::{load_configuration, load_tree, GlobalOptions, InputArgs};
use clap::Args;
use pathtree::{Config, OutputFormat};

/// Render the tree built from a list of paths.
#[derive(Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Deepest level to render (roots are level 0)
    #[arg(long, value_name = "LEVEL")]
    pub max_depth: Option<usize>,
}

impl TreeCommand {
    /// Execute the tree command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration, with flags taking precedence
        let overrides = Config {
            max_depth: self.max_depth,
            output_format: self.format,
            ..Config::default()
        };
        let config = load_configuration(global, overrides)?;

        // 2. Build the tree
        let tree = load_tree(&self.input, &config)?;

        // 3. Render to stdout
        let formatter = config.output_format().create_formatter::<String, String>();
        let rendered = formatter.format(&tree, config.max_depth)?;
        if rendered.is_empty() || rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }

        Ok(())
    }
}
