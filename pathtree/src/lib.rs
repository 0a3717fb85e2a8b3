#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathtree
//!
//! A library for turning flat lists of delimited paths into navigable trees.
//!
//! Paths such as `home/module2/component1` are split into units and merged
//! into a forest where shared prefixes become shared nodes. The resulting
//! tree can be queried with relative paths (`../module1`), listed, indexed,
//! and projected into breadcrumb pathways.
//!
//! ## Core Types
//!
//! - [`PathTree`] and [`PathTreeNode`]: the arena-backed forest and its nodes
//! - [`PathTreeBuilder`] and [`path_tree`]: tree construction
//! - [`PathwaysPreparer`] and [`Breadcrumb`]: memoized pathway derivation
//! - [`tree_of`]: grouping of `id`/`parentId` rows into nested trees
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathtree::{path_tree, Breadcrumb, PathwayOptions, PathwaysPreparer};
//!
//! let tree = path_tree(
//!     vec!["home/module1", "home/module2/component1"],
//!     |path: &&str| path.split('/').map(String::from).collect(),
//!     |_, _| (),
//! );
//!
//! let component = tree.select_path("home/module2/component1").unwrap();
//! let sibling = tree.select_node(component, "../../module1").unwrap();
//! assert_eq!(tree[sibling].qualified_path(), "home/module1");
//!
//! let pathways = PathwaysPreparer::breadcrumbs(&tree, PathwayOptions::new());
//! let crumbs = pathways.by_node(&tree[component]);
//! assert_eq!(crumbs.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod human;
pub mod logging;
pub mod output;
pub mod pathway;
pub mod rows;
pub mod tree;
pub mod walk;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use human::{human_friendly_phrase, human_path};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, TreeFormatter};
pub use pathway::{Breadcrumb, PathwayOptions, PathwaysPreparer};
pub use rows::{tree_of, FlatRow, RelationalRow, RowNode};
pub use tree::{path_tree, NodeId, PathTree, PathTreeBuilder, PathTreeNode};
pub use walk::{walk_paths, WalkOptions};
