//! Incremental construction of path trees.
//!
//! Entries are processed in the order supplied. For each entry the units of
//! its path are walked from the root level to the leaf; existing nodes are
//! reused and missing ones are created on demand, so shared prefixes always
//! resolve to a single node.

use std::iter;

use super::{NodeId, PathTree, PathTreeNode};

/// Predicate deciding whether an existing sibling matches a prospective unit.
///
/// Arguments are the prospective unit, the sibling being inspected and the
/// terminal record currently being inserted.
pub type UnitMatcher<T, I> = Box<dyn Fn(&str, &PathTreeNode<T, I>, &T) -> bool>;

/// Computes the qualified path of a new node from its unit and its parent.
pub type QualifiedPathPreparer<T, I> = Box<dyn Fn(&str, Option<&PathTreeNode<T, I>>) -> String>;

/// Hook run once on every node the builder creates, with the record being
/// inserted.
pub type ConstructedRefiner<T, I> = Box<dyn Fn(&mut PathTreeNode<T, I>, &T)>;

/// Input for [`path_tree`]: either a finite collection or a sequence factory.
///
/// A factory is a zero-argument closure producing a fresh iterator each time
/// it is invoked, so the same `Entries` description can be replayed.
///
/// # Examples
///
/// ```
/// use pathtree::tree::Entries;
///
/// let collection: Entries<'_, &str> = vec!["a/b", "a/c"].into();
/// assert_eq!(collection.into_entries().count(), 2);
///
/// let factory = Entries::factory(|| ["a/b", "a/c", "d"]);
/// assert_eq!(factory.into_entries().count(), 3);
/// ```
pub enum Entries<'a, T> {
    /// A finite in-memory collection.
    Collection(Vec<T>),
    /// A factory yielding a fresh lazy sequence per call.
    Factory(Box<dyn Fn() -> Box<dyn Iterator<Item = T> + 'a> + 'a>),
}

impl<'a, T: 'a> Entries<'a, T> {
    /// Wraps a closure that produces a new sequence of entries per call.
    pub fn factory<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + 'a,
        S: IntoIterator<Item = T>,
        S::IntoIter: 'a,
    {
        Self::Factory(Box::new(move || Box::new(factory().into_iter())))
    }

    /// Consumes the description and yields its entries.
    #[must_use]
    pub fn into_entries(self) -> Box<dyn Iterator<Item = T> + 'a> {
        match self {
            Self::Collection(entries) => Box::new(entries.into_iter()),
            Self::Factory(factory) => factory(),
        }
    }
}

impl<'a, T> From<Vec<T>> for Entries<'a, T> {
    fn from(entries: Vec<T>) -> Self {
        Self::Collection(entries)
    }
}

/// Builds a [`PathTree`] from flat terminal entries.
///
/// * `units_of` splits an entry into its path units.
/// * `decorate` computes the intermediary metadata of a node the first time
///   the node acts as a prefix of some entry. It runs at most once per node.
///
/// # Examples
///
/// ```
/// use pathtree::tree::{path_tree, Entries};
///
/// let tree = path_tree(
///     Entries::factory(|| vec!["home/module1", "home/module2"]),
///     |path: &&str| path.split('/').map(String::from).collect(),
///     |node, _| node.qualified_path().len(),
/// );
/// assert_eq!(tree.len(), 3);
/// ```
pub fn path_tree<'a, T, I, E, U, D>(entries: E, units_of: U, decorate: D) -> PathTree<T, I>
where
    T: 'a,
    E: Into<Entries<'a, T>>,
    U: FnMut(&T) -> Vec<String>,
    D: FnMut(&PathTreeNode<T, I>, &[String]) -> I,
{
    let mut builder = PathTreeBuilder::new();
    builder.extend(entries, units_of, decorate);
    builder.finish()
}

/// Configurable, incremental path tree construction.
///
/// # Examples
///
/// ```
/// use pathtree::tree::PathTreeBuilder;
///
/// let mut builder = PathTreeBuilder::<&str, ()>::new()
///     .with_separator("::")
///     .with_unit_matcher(|prospect, node, _| node.unit().eq_ignore_ascii_case(prospect));
///
/// let split = |path: &&str| -> Vec<String> { path.split('/').map(String::from).collect() };
/// builder.populate("Crate/Module", split, |_, _| ());
/// builder.populate("crate/other", split, |_, _| ());
///
/// let tree = builder.finish();
/// assert_eq!(tree.roots().len(), 1);
/// assert!(tree.select_path("Crate::other").is_some());
/// ```
pub struct PathTreeBuilder<T, I> {
    tree: PathTree<T, I>,
    matcher: Option<UnitMatcher<T, I>>,
    qualified_path: Option<QualifiedPathPreparer<T, I>>,
    refine_constructed: Option<ConstructedRefiner<T, I>>,
}

impl<T, I> Default for PathTreeBuilder<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> PathTreeBuilder<T, I> {
    /// Creates a builder for an empty tree using the default separator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: PathTree::default(),
            matcher: None,
            qualified_path: None,
            refine_constructed: None,
        }
    }

    /// Continues populating an existing tree.
    #[must_use]
    pub fn from_tree(tree: PathTree<T, I>) -> Self {
        Self {
            tree,
            matcher: None,
            qualified_path: None,
            refine_constructed: None,
        }
    }

    /// Sets the separator used to join qualified paths.
    ///
    /// Only nodes created after this call use the new separator, so set it
    /// before populating.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.tree.separator = separator.into();
        self
    }

    /// Overrides how existing siblings are matched against a prospective unit.
    ///
    /// The default matcher compares units for exact string equality.
    #[must_use]
    pub fn with_unit_matcher<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&str, &PathTreeNode<T, I>, &T) -> bool + 'static,
    {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Overrides how the qualified path of a new node is computed.
    ///
    /// The preparer receives the unit and the parent node (`None` at the root
    /// level). By default the parent's qualified path and the unit are joined
    /// with the tree separator.
    #[must_use]
    pub fn with_qualified_path<F>(mut self, preparer: F) -> Self
    where
        F: Fn(&str, Option<&PathTreeNode<T, I>>) -> String + 'static,
    {
        self.qualified_path = Some(Box::new(preparer));
        self
    }

    /// Registers a hook run on each newly created node.
    ///
    /// The hook runs right after the node is created and, for prefix nodes,
    /// decorated. Reused nodes are never refined again. The terminal record
    /// is passed separately since it is attached to the leaf afterwards.
    #[must_use]
    pub fn with_refine_constructed<F>(mut self, refine: F) -> Self
    where
        F: Fn(&mut PathTreeNode<T, I>, &T) + 'static,
    {
        self.refine_constructed = Some(Box::new(refine));
        self
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &PathTree<T, I> {
        &self.tree
    }

    /// Inserts every entry, in order. Returns how many entries produced a node.
    pub fn extend<'a, E, U, D>(&mut self, entries: E, mut units_of: U, mut decorate: D) -> usize
    where
        T: 'a,
        E: Into<Entries<'a, T>>,
        U: FnMut(&T) -> Vec<String>,
        D: FnMut(&PathTreeNode<T, I>, &[String]) -> I,
    {
        let mut inserted = 0;
        for entry in entries.into().into_entries() {
            if self.populate(entry, &mut units_of, &mut decorate).is_some() {
                inserted += 1;
            }
        }
        log::debug!(
            "populated {inserted} entries, tree now has {} nodes",
            self.tree.len()
        );
        inserted
    }

    /// Inserts a single terminal record and returns the node its path ends at.
    ///
    /// Empty units are dropped; an entry with no units left is ignored and
    /// `None` is returned. When the path ends at an existing node, the new
    /// record replaces any terminal already stored there (last wins).
    pub fn populate<U, D>(&mut self, terminal: T, units_of: U, mut decorate: D) -> Option<NodeId>
    where
        U: FnOnce(&T) -> Vec<String>,
        D: FnMut(&PathTreeNode<T, I>, &[String]) -> I,
    {
        let units: Vec<String> = units_of(&terminal)
            .into_iter()
            .filter(|unit| !unit.is_empty())
            .collect();
        let Some(terminal_index) = units.len().checked_sub(1) else {
            log::debug!("ignoring entry without path units");
            return None;
        };

        let mut parent: Option<NodeId> = None;
        for (level, unit) in units.iter().enumerate() {
            let (id, created) = match self.find_sibling(parent, unit, &terminal) {
                Some(existing) => (existing, false),
                None => (self.create_node(parent, level, unit), true),
            };

            if level < terminal_index && self.tree[id].intermediary.is_none() {
                let intermediary = decorate(&self.tree[id], &units);
                self.tree.nodes[id.index()].intermediary = Some(intermediary);
            }
            if created {
                if let Some(refine) = &self.refine_constructed {
                    refine(&mut self.tree.nodes[id.index()], &terminal);
                }
            }
            parent = Some(id);
        }

        let id = parent?;
        let node = &mut self.tree.nodes[id.index()];
        if node.terminal.replace(terminal).is_some() {
            log::debug!("replaced terminal at {}", node.qualified_path);
        }
        Some(id)
    }

    /// Consumes the builder and returns the finished tree.
    #[must_use]
    pub fn finish(self) -> PathTree<T, I> {
        self.tree
    }

    fn find_sibling(&self, parent: Option<NodeId>, unit: &str, terminal: &T) -> Option<NodeId> {
        self.tree
            .children_of(parent)
            .iter()
            .copied()
            .find(|id| {
                let node = &self.tree[*id];
                match &self.matcher {
                    Some(matcher) => matcher(unit, node, terminal),
                    None => node.unit == unit,
                }
            })
    }

    fn create_node(&mut self, parent: Option<NodeId>, level: usize, unit: &str) -> NodeId {
        let id = NodeId(self.tree.nodes.len());
        let parent_node = parent.map(|parent_id| &self.tree[parent_id]);
        let qualified_path = match (&self.qualified_path, parent_node) {
            (Some(preparer), _) => preparer(unit, parent_node),
            (None, Some(parent_node)) => format!(
                "{}{}{unit}",
                parent_node.qualified_path, self.tree.separator
            ),
            (None, None) => unit.to_string(),
        };
        let ancestors = match parent_node {
            Some(parent_node) => iter::once(parent_node.id)
                .chain(parent_node.ancestors.iter().copied())
                .collect(),
            None => Vec::new(),
        };

        self.tree.nodes.push(PathTreeNode {
            id,
            unit: unit.to_string(),
            qualified_path,
            level,
            parent,
            ancestors,
            children: Vec::new(),
            terminal: None,
            intermediary: None,
        });
        match parent {
            Some(parent_id) => self.tree.nodes[parent_id.index()].children.push(id),
            None => self.tree.roots.push(id),
        }
        id
    }
}
