//! Breadcrumbs command implementation.
//!
//! This module implements the `breadcrumbs` command, which prints the
//! pathway from the root to a node, optionally ending with the node itself
//! and framed by configured prefix and suffix crumbs.

use crate::error::CliError;
use crate::utils::{load_configuration, load_tree, GlobalOptions, InputArgs};
use clap::{Args, ValueEnum};
use pathtree::config::BreadcrumbConfig;
use pathtree::{Breadcrumb, Config, PathTreeNode, PathwayOptions, PathwaysPreparer};

/// Separator between crumbs in text output.
const TEXT_SEPARATOR: &str = " > ";

/// Print the breadcrumb pathway to a node.
#[derive(Args)]
pub struct BreadcrumbsCommand {
    /// Qualified path of the node
    #[arg(value_name = "KEY")]
    pub key: String,

    /// End the pathway with the node itself
    #[arg(long)]
    pub include_terminal: bool,

    /// Stop at the nearest ancestor even when configuration includes the node
    #[arg(long, conflicts_with = "include_terminal")]
    pub no_include_terminal: bool,

    /// Label of a crumb placed before the first ancestor
    #[arg(long, value_name = "LABEL")]
    pub prefix: Option<String>,

    /// Label of a crumb placed after the last crumb
    #[arg(long, value_name = "LABEL")]
    pub suffix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: CrumbFormat,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Output format for breadcrumbs command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CrumbFormat {
    /// Labels joined by " > "
    Text,
    /// JSON array of label/slug objects
    Json,
}

/// Ancestor crumbs use the intermediary label when there is one.
fn labeled_crumb(node: &PathTreeNode<String, String>) -> Breadcrumb {
    let label = node
        .intermediary()
        .cloned()
        .unwrap_or_else(|| node.unit().to_string());
    Breadcrumb::new(label, node.qualified_path())
}

fn pathway_options(config: &Config) -> PathwayOptions<String, String, Breadcrumb> {
    let mut options: PathwayOptions<String, String, Breadcrumb> = PathwayOptions::new();
    if config.include_terminal() {
        options = options.with_include_terminal(Breadcrumb::from_node);
    }

    let framing = config.breadcrumbs.clone().unwrap_or_default();
    if framing.prefix.is_some() || framing.suffix.is_some() {
        options = options.with_refine(move |mut crumbs| {
            if let Some(ref prefix) = framing.prefix {
                crumbs.insert(0, Breadcrumb::new(prefix.clone(), ""));
            }
            if let Some(ref suffix) = framing.suffix {
                crumbs.push(Breadcrumb::new(suffix.clone(), ""));
            }
            crumbs
        });
    }
    options
}

impl BreadcrumbsCommand {
    /// Execute the breadcrumbs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration, with flags taking precedence
        let breadcrumbs = (self.prefix.is_some() || self.suffix.is_some()).then(|| {
            BreadcrumbConfig {
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            }
        });
        let overrides = Config {
            include_terminal: if self.include_terminal {
                Some(true)
            } else if self.no_include_terminal {
                Some(false)
            } else {
                None
            },
            breadcrumbs,
            ..Config::default()
        };
        let config = load_configuration(global, overrides)?;

        // 2. Build the tree and derive the pathway
        let tree = load_tree(&self.input, &config)?;
        let pathways = PathwaysPreparer::new(
            &tree,
            labeled_crumb,
            Breadcrumb::from_node,
            pathway_options(&config),
        );
        let crumbs = pathways.by_node_key(&self.key).ok_or_else(|| {
            CliError::SemanticFailure(format!("No node at '{}'", self.key))
        })?;

        // 3. Output to stdout
        match self.format {
            CrumbFormat::Text => {
                let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
                println!("{}", labels.join(TEXT_SEPARATOR));
            }
            CrumbFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&*crumbs)?);
            }
        }

        Ok(())
    }
}
