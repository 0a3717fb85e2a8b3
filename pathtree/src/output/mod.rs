//! Output formatting for path trees.
//!
//! Trees render as an indented text outline, or as nested JSON or YAML
//! documents built from [`TreeView`] records.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::PathTree;
use crate::Result;

pub use formatters::{tree_view, JsonFormatter, TextFormatter, TreeView, YamlFormatter};

/// Trait for rendering a path tree into a string.
pub trait TreeFormatter<T, I> {
    /// Render `tree`, stopping below `max_depth` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if serializing a payload fails.
    fn format(&self, tree: &PathTree<T, I>, max_depth: Option<usize>) -> Result<String>;
}

/// Available output formats for rendered trees.
///
/// # Examples
///
/// ```
/// use pathtree::output::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline.
    #[default]
    Text,
    /// Nested JSON documents.
    Json,
    /// Nested YAML documents.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter<T, I>(&self) -> Box<dyn TreeFormatter<T, I>>
    where
        T: Serialize,
        I: Serialize,
    {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
