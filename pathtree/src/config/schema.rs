//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; accessors on [`Config`] fill in the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::tree::DEFAULT_SEPARATOR;
use crate::walk::WalkOptions;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathtree::config::Config;
///
/// let config: Config = serde_yaml::from_str("separator: \"::\"\nmax_depth: 2\n").unwrap();
/// assert_eq!(config.separator(), "::");
/// assert_eq!(config.max_depth, Some(2));
/// assert!(!config.include_terminal());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator joining units into qualified paths.
    pub separator: Option<String>,

    /// Deepest level shown when listing or rendering trees.
    pub max_depth: Option<usize>,

    /// Whether pathways end with the node itself.
    pub include_terminal: Option<bool>,

    /// Output format for rendered trees.
    pub output_format: Option<OutputFormat>,

    /// Directory walk settings.
    pub walk: Option<WalkConfig>,

    /// Breadcrumb decoration settings.
    pub breadcrumbs: Option<BreadcrumbConfig>,
}

impl Config {
    /// The configured separator, or `/`.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Whether pathways include the node itself; off unless configured.
    #[must_use]
    pub fn include_terminal(&self) -> bool {
        self.include_terminal.unwrap_or(false)
    }

    /// The configured output format, or text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Walk options with unset fields defaulted.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        self.walk
            .as_ref()
            .map(WalkConfig::to_options)
            .unwrap_or_default()
    }
}

/// Directory walk settings.
///
/// # Examples
///
/// ```
/// use pathtree::config::WalkConfig;
///
/// let walk = WalkConfig { hidden: Some(true), ..Default::default() };
/// assert!(walk.to_options().include_hidden);
/// assert!(!walk.to_options().follow_links);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Include dot files and directories.
    pub hidden: Option<bool>,

    /// Follow symbolic links.
    pub follow_links: Option<bool>,

    /// Deepest level visited below the walk root.
    pub max_depth: Option<usize>,
}

impl WalkConfig {
    /// Converts to walk options, defaulting unset fields.
    #[must_use]
    pub fn to_options(&self) -> WalkOptions {
        WalkOptions {
            include_hidden: self.hidden.unwrap_or(false),
            follow_links: self.follow_links.unwrap_or(false),
            max_depth: self.max_depth,
        }
    }
}

/// Synthetic crumbs added around every pathway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BreadcrumbConfig {
    /// Label of a crumb placed before the first ancestor.
    pub prefix: Option<String>,

    /// Label of a crumb placed after the last element.
    pub suffix: Option<String>,
}
