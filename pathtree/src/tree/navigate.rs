//! Navigation over a built [`PathTree`]: relative and absolute node selection,
//! filtered listing and keyed indexes.

use std::collections::HashMap;
use std::hash::Hash;

use super::{NodeId, PathTree, PathTreeNode};

/// A navigation query: a delimited path string or pre-split segments.
///
/// # Examples
///
/// ```
/// use pathtree::tree::Query;
///
/// let query = Query::from("a/./b/../c");
/// assert_eq!(query.segments("/"), vec!["a", ".", "b", "..", "c"]);
///
/// let query = Query::from(&["a", "b"][..]);
/// assert_eq!(query.segments("/"), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'q> {
    /// A path string, split by the active delimiter.
    Path(&'q str),
    /// Segments that are already split.
    Segments(Vec<&'q str>),
}

impl<'q> Query<'q> {
    /// The query's segments, splitting path strings on `delimiter`.
    #[must_use]
    pub fn segments(&self, delimiter: &str) -> Vec<&'q str> {
        match self {
            Self::Path(path) => path.split(delimiter).collect(),
            Self::Segments(segments) => segments.clone(),
        }
    }
}

impl<'q> From<&'q str> for Query<'q> {
    fn from(path: &'q str) -> Self {
        Self::Path(path)
    }
}

impl<'q> From<&'q String> for Query<'q> {
    fn from(path: &'q String) -> Self {
        Self::Path(path)
    }
}

impl<'q> From<&'q [&'q str]> for Query<'q> {
    fn from(segments: &'q [&'q str]) -> Self {
        Self::Segments(segments.to_vec())
    }
}

impl<'q> From<&'q [String]> for Query<'q> {
    fn from(segments: &'q [String]) -> Self {
        Self::Segments(segments.iter().map(String::as_str).collect())
    }
}

impl<'q> From<Vec<&'q str>> for Query<'q> {
    fn from(segments: Vec<&'q str>) -> Self {
        Self::Segments(segments)
    }
}

/// Why a query failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoMatchReason {
    /// No child carries the requested unit.
    MissingChild {
        /// The unit that was looked up.
        unit: String,
    },
    /// A `..` segment tried to leave the root level.
    AboveRoot,
}

/// Details handed to a [`SelectOptions::no_match`] handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatch {
    /// Index of the segment that failed.
    pub segment_index: usize,
    /// The node resolution had reached, or `None` at the tree's top.
    pub at: Option<NodeId>,
    /// What went wrong.
    pub reason: NoMatchReason,
}

/// Handler deciding the result of a failed query.
pub type NoMatchHandler<'o> = &'o dyn Fn(&NoMatch) -> Option<NodeId>;

/// Options for [`PathTree::select_node_with`] and [`PathTree::select_path_with`].
#[derive(Clone, Copy, Default)]
pub struct SelectOptions<'o> {
    /// Delimiter for path-string queries; defaults to the tree separator.
    pub delimiter: Option<&'o str>,
    /// Result to produce when the query fails; defaults to `None`.
    pub no_match: Option<NoMatchHandler<'o>>,
}

impl SelectOptions<'_> {
    fn fail(&self, failure: NoMatch) -> Option<NodeId> {
        log::debug!("query failed: {failure:?}");
        self.no_match.and_then(|handler| handler(&failure))
    }
}

/// Traversal order for [`PathTree::list_nodes_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Depth-first pre-order: each node precedes its descendants.
    #[default]
    PreOrder,
    /// All accepted siblings first, then the subtree of each in turn.
    SiblingsFirst,
}

impl<T, I> PathTree<T, I> {
    /// Resolves `query` relative to `start`.
    ///
    /// `.` and empty segments are ignored, `..` moves to the parent and any
    /// other segment selects the child with that unit. An empty query yields
    /// `start` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree::tree::path_tree;
    ///
    /// let tree = path_tree(
    ///     vec!["home/module1", "home/module2/component1"],
    ///     |path: &&str| path.split('/').map(String::from).collect(),
    ///     |_, _| (),
    /// );
    /// let component = tree.select_path("home/module2/component1").unwrap();
    /// let module1 = tree.select_node(component, "../../module1").unwrap();
    /// assert_eq!(tree[module1].qualified_path(), "home/module1");
    /// assert!(tree.select_node(component, "../../module-missing").is_none());
    /// ```
    pub fn select_node<'q>(&self, start: NodeId, query: impl Into<Query<'q>>) -> Option<NodeId> {
        self.select_node_with(start, query, &SelectOptions::default())
    }

    /// Resolves `query` relative to `start` with explicit options.
    pub fn select_node_with<'q>(
        &self,
        start: NodeId,
        query: impl Into<Query<'q>>,
        options: &SelectOptions<'_>,
    ) -> Option<NodeId> {
        let delimiter = options.delimiter.unwrap_or(&self.separator);
        let segments = query.into().segments(delimiter);
        self.resolve(start, &segments, 0, options)
    }

    /// Resolves an absolute `query` from the root level.
    ///
    /// The first segment must name a root-level node; the remainder is
    /// resolved relative to it.
    pub fn select_path<'q>(&self, query: impl Into<Query<'q>>) -> Option<NodeId> {
        self.select_path_with(query, &SelectOptions::default())
    }

    /// Resolves an absolute `query` with explicit options.
    pub fn select_path_with<'q>(
        &self,
        query: impl Into<Query<'q>>,
        options: &SelectOptions<'_>,
    ) -> Option<NodeId> {
        let delimiter = options.delimiter.unwrap_or(&self.separator);
        let segments = query.into().segments(delimiter);
        let Some((first, rest)) = segments.split_first() else {
            return options.fail(NoMatch {
                segment_index: 0,
                at: None,
                reason: NoMatchReason::MissingChild {
                    unit: String::new(),
                },
            });
        };

        match self.roots.iter().copied().find(|id| self[*id].unit == *first) {
            Some(root) => self.resolve(root, rest, 1, options),
            None => options.fail(NoMatch {
                segment_index: 0,
                at: None,
                reason: NoMatchReason::MissingChild {
                    unit: (*first).to_string(),
                },
            }),
        }
    }

    fn resolve(
        &self,
        start: NodeId,
        segments: &[&str],
        offset: usize,
        options: &SelectOptions<'_>,
    ) -> Option<NodeId> {
        let mut current = start;
        for (index, segment) in segments.iter().enumerate() {
            match *segment {
                "" | "." => {}
                ".." => match self[current].parent {
                    Some(parent) => current = parent,
                    None => {
                        return options.fail(NoMatch {
                            segment_index: offset + index,
                            at: None,
                            reason: NoMatchReason::AboveRoot,
                        })
                    }
                },
                unit => {
                    let child = self[current]
                        .children
                        .iter()
                        .copied()
                        .find(|id| self[*id].unit == unit);
                    match child {
                        Some(child) => current = child,
                        None => {
                            return options.fail(NoMatch {
                                segment_index: offset + index,
                                at: Some(current),
                                reason: NoMatchReason::MissingChild {
                                    unit: unit.to_string(),
                                },
                            })
                        }
                    }
                }
            }
        }
        Some(current)
    }

    /// Lists nodes accepted by `predicate` in depth-first pre-order.
    ///
    /// A rejected node prunes its whole subtree. Nodes deeper than
    /// `max_depth` are excluded.
    pub fn list_nodes<P>(&self, predicate: P, max_depth: Option<usize>) -> Vec<&PathTreeNode<T, I>>
    where
        P: Fn(&PathTreeNode<T, I>) -> bool,
    {
        self.list_nodes_ordered(ListOrder::PreOrder, predicate, max_depth)
    }

    /// Lists nodes accepted by `predicate` in the given order.
    pub fn list_nodes_ordered<P>(
        &self,
        order: ListOrder,
        predicate: P,
        max_depth: Option<usize>,
    ) -> Vec<&PathTreeNode<T, I>>
    where
        P: Fn(&PathTreeNode<T, I>) -> bool,
    {
        let mut result = Vec::new();
        match order {
            ListOrder::PreOrder => {
                self.collect_pre_order(&self.roots, &predicate, max_depth, &mut result);
            }
            ListOrder::SiblingsFirst => {
                self.collect_siblings_first(&self.roots, &predicate, max_depth, &mut result);
            }
        }
        result
    }

    /// Every node, in depth-first pre-order.
    #[must_use]
    pub fn all_nodes(&self) -> Vec<&PathTreeNode<T, I>> {
        self.list_nodes(|_| true, None)
    }

    /// Indexes the listed nodes by `key_of`.
    ///
    /// When two nodes produce the same key the one visited last wins.
    pub fn index_nodes<K, F, P>(
        &self,
        key_of: F,
        predicate: P,
        max_depth: Option<usize>,
    ) -> HashMap<K, &PathTreeNode<T, I>>
    where
        K: Eq + Hash,
        F: Fn(&PathTreeNode<T, I>) -> K,
        P: Fn(&PathTreeNode<T, I>) -> bool,
    {
        self.list_nodes(predicate, max_depth)
            .into_iter()
            .map(|node| (key_of(node), node))
            .collect()
    }

    /// Indexes every node by its qualified path.
    #[must_use]
    pub fn index_by_path(&self) -> HashMap<String, &PathTreeNode<T, I>> {
        self.index_nodes(|node| node.qualified_path.clone(), |_| true, None)
    }

    fn collect_pre_order<'t, P>(
        &'t self,
        ids: &[NodeId],
        predicate: &P,
        max_depth: Option<usize>,
        out: &mut Vec<&'t PathTreeNode<T, I>>,
    ) where
        P: Fn(&PathTreeNode<T, I>) -> bool,
    {
        for id in ids {
            let node = &self[*id];
            if exceeds(node.level, max_depth) || !predicate(node) {
                continue;
            }
            out.push(node);
            self.collect_pre_order(&node.children, predicate, max_depth, out);
        }
    }

    fn collect_siblings_first<'t, P>(
        &'t self,
        ids: &[NodeId],
        predicate: &P,
        max_depth: Option<usize>,
        out: &mut Vec<&'t PathTreeNode<T, I>>,
    ) where
        P: Fn(&PathTreeNode<T, I>) -> bool,
    {
        let accepted: Vec<&PathTreeNode<T, I>> = ids
            .iter()
            .map(|id| &self[*id])
            .filter(|node| !exceeds(node.level, max_depth) && predicate(node))
            .collect();
        out.extend(accepted.iter().copied());
        for node in accepted {
            self.collect_siblings_first(&node.children, predicate, max_depth, out);
        }
    }
}

fn exceeds(level: usize, max_depth: Option<usize>) -> bool {
    max_depth.is_some_and(|max| level > max)
}

/// Resolves `relative` against the directory of `base`.
///
/// The last unit of `base` is dropped first (it names the current entry),
/// then `.` units are skipped and `..` units pop one unit each.
///
/// # Examples
///
/// ```
/// use pathtree::tree::absolute_path;
///
/// assert_eq!(absolute_path("docs/guide/install", "../api/index", "/"), "docs/api/index");
/// assert_eq!(absolute_path("docs/guide/install", "./setup", "/"), "docs/guide/setup");
/// ```
#[must_use]
pub fn absolute_path(base: &str, relative: &str, separator: &str) -> String {
    let mut stack: Vec<&str> = base.split(separator).collect();
    stack.pop();
    for part in relative.split(separator) {
        match part {
            "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    stack.join(separator)
}
