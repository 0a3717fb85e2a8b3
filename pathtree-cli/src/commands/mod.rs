//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `tree`: Render the tree built from a list of paths
//! - `list`: List tree nodes in various formats
//! - `select`: Resolve an absolute or relative query
//! - `breadcrumbs`: Print the breadcrumb pathway to a node
//! - `rows`: Group `id`/`parentId` rows into a nested tree
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod breadcrumbs;
pub mod completions;
pub mod list;
pub mod rows;
pub mod select;
pub mod tree;
pub mod validate;

pub use breadcrumbs::BreadcrumbsCommand;
pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use rows::RowsCommand;
pub use select::SelectCommand;
pub use tree::TreeCommand;
pub use validate::ValidateCommand;
