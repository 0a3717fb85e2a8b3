//! Path trees built from flat collections of delimited paths.
//!
//! A [`PathTree`] owns every node in a single arena. Nodes refer to each
//! other through [`NodeId`] handles: `children` is the ownership direction,
//! while `parent` and `ancestors` are plain back-references. This keeps the
//! structure free of reference cycles and makes ancestor walks O(1).
//!
//! Each node carries two optional payloads:
//!
//! - a **terminal** value, present when some input path ends exactly at the
//!   node (think "file"), and
//! - an **intermediary** value, computed by the caller the first time the
//!   node acts as a prefix of a longer path (think "directory").
//!
//! # Examples
//!
//! ```
//! use pathtree::tree::path_tree;
//!
//! let tree = path_tree(
//!     vec!["home/module1", "home/module2"],
//!     |path: &&str| path.split('/').map(String::from).collect(),
//!     |node, _units| node.unit().to_uppercase(),
//! );
//!
//! assert_eq!(tree.roots().len(), 1);
//! let home = tree.select_path("home").unwrap();
//! assert_eq!(tree[home].intermediary().map(String::as_str), Some("HOME"));
//! assert_eq!(tree[home].children().len(), 2);
//! ```

pub mod builder;
pub mod navigate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::ops::Index;

use serde::Serialize;

pub use builder::{
    path_tree, ConstructedRefiner, Entries, PathTreeBuilder, QualifiedPathPreparer, UnitMatcher,
};
pub use navigate::{absolute_path, ListOrder, NoMatch, NoMatchReason, Query, SelectOptions};

/// Default separator used to join units into qualified paths.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Handle to a node stored in a [`PathTree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single unit of a path tree's route.
#[derive(Debug, Clone)]
pub struct PathTreeNode<T, I> {
    pub(crate) id: NodeId,
    pub(crate) unit: String,
    pub(crate) qualified_path: String,
    pub(crate) level: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) ancestors: Vec<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) terminal: Option<T>,
    pub(crate) intermediary: Option<I>,
}

impl<T, I> PathTreeNode<T, I> {
    /// This node's handle.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The path segment this node represents.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Units from the root level down to this node, joined by the tree separator.
    #[must_use]
    pub fn qualified_path(&self) -> &str {
        &self.qualified_path
    }

    /// Depth of the node; root-level nodes are level 0.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// The immediate parent, or `None` for root-level nodes.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ancestors ordered nearest first: `ancestors()[0]` is the parent and the
    /// last element is the root-level node. Its length always equals `level()`.
    #[must_use]
    pub fn ancestors(&self) -> &[NodeId] {
        &self.ancestors
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The caller record whose path ends at this node, if any.
    #[must_use]
    pub const fn terminal(&self) -> Option<&T> {
        self.terminal.as_ref()
    }

    /// Caller metadata attached while this node acted as a prefix, if any.
    #[must_use]
    pub const fn intermediary(&self) -> Option<&I> {
        self.intermediary.as_ref()
    }

    /// Replaces the intermediary metadata, returning the previous value.
    pub fn set_intermediary(&mut self, intermediary: I) -> Option<I> {
        self.intermediary.replace(intermediary)
    }

    /// Whether some input path ends exactly at this node.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A forest of [`PathTreeNode`]s sharing one arena.
///
/// The tree has no single root node: `roots()` holds the level-0 nodes, one
/// per distinct first unit in the input.
#[derive(Debug, Clone)]
pub struct PathTree<T, I> {
    pub(crate) nodes: Vec<PathTreeNode<T, I>>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) separator: String,
}

impl<T, I> Default for PathTree<T, I> {
    fn default() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }
}

impl<T, I> PathTree<T, I> {
    /// Creates an empty tree that joins qualified paths with `separator`.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            separator: separator.into(),
        }
    }

    /// The separator used for qualified paths and default query splitting.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Level-0 nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&PathTreeNode<T, I>> {
        self.nodes.get(id.0)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &PathTreeNode<T, I>> {
        self.nodes.iter()
    }

    /// The children of `parent`, or the root-level nodes when `parent` is `None`.
    #[must_use]
    pub fn children_of(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(id) => &self[id].children,
            None => &self.roots,
        }
    }

    /// Iterates over the descendants of `start` in depth-first pre-order.
    ///
    /// With `None` the whole tree is visited. The start node itself is not
    /// yielded.
    pub fn descendants(&self, start: Option<NodeId>) -> Descendants<'_, T, I> {
        let mut stack: Vec<NodeId> = self.children_of(start).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Units from the root level down to `id`, inclusive.
    #[must_use]
    pub fn units_of(&self, id: NodeId) -> Vec<&str> {
        let node = &self[id];
        node.ancestors
            .iter()
            .rev()
            .map(|ancestor| self[*ancestor].unit())
            .chain(std::iter::once(node.unit()))
            .collect()
    }
}

impl<T, I> Index<NodeId> for PathTree<T, I> {
    type Output = PathTreeNode<T, I>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Pre-order iterator returned by [`PathTree::descendants`].
pub struct Descendants<'t, T, I> {
    tree: &'t PathTree<T, I>,
    stack: Vec<NodeId>,
}

impl<'t, T, I> Iterator for Descendants<'t, T, I> {
    type Item = &'t PathTreeNode<T, I>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree[id];
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}
