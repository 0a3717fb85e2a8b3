//! Pathway (breadcrumb) derivation for path tree nodes.
//!
//! A pathway is a node's ancestor chain, ordered from the root level down,
//! with every node projected into a caller-defined unit. The node itself can
//! be appended, and the assembled list can be refined (for example to add a
//! synthetic "home" crumb) before it is returned.
//!
//! Results are memoized per index key and per qualified path. The tree is
//! read-only once built, so cached pathways are never invalidated. The first
//! computation for a given key fixes its cached value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::tree::{PathTree, PathTreeNode};

/// Projection of a node into a pathway unit.
pub type UnitFn<T, I, U> = Rc<dyn Fn(&PathTreeNode<T, I>) -> U>;

/// Final transform applied to an assembled pathway.
pub type RefineFn<U> = Rc<dyn Fn(Vec<U>) -> Vec<U>>;

/// A ready-made pathway unit: a display label plus the node's path.
///
/// # Examples
///
/// ```
/// use pathtree::pathway::Breadcrumb;
///
/// let crumb = Breadcrumb::new("Guide", "docs/guide");
/// assert_eq!(crumb.label, "Guide");
/// assert_eq!(crumb.slug, "docs/guide");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Text shown to the reader.
    pub label: String,
    /// Location the crumb links to.
    pub slug: String,
}

impl Breadcrumb {
    /// Creates a breadcrumb.
    #[must_use]
    pub fn new(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }

    /// Labels a node by its unit and links it by its qualified path.
    #[must_use]
    pub fn from_node<T, I>(node: &PathTreeNode<T, I>) -> Self {
        Self::new(node.unit(), node.qualified_path())
    }
}

/// Per-call or default options for pathway derivation.
pub struct PathwayOptions<T, I, U> {
    /// Transform applied after assembly.
    pub refine: Option<RefineFn<U>>,
    /// When set, the node itself is appended through this projection.
    pub include_terminal: Option<UnitFn<T, I, U>>,
}

impl<T, I, U> Clone for PathwayOptions<T, I, U> {
    fn clone(&self) -> Self {
        Self {
            refine: self.refine.clone(),
            include_terminal: self.include_terminal.clone(),
        }
    }
}

impl<T, I, U> Default for PathwayOptions<T, I, U> {
    fn default() -> Self {
        Self {
            refine: None,
            include_terminal: None,
        }
    }
}

impl<T, I, U> PathwayOptions<T, I, U> {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the refinement step.
    #[must_use]
    pub fn with_refine<F>(mut self, refine: F) -> Self
    where
        F: Fn(Vec<U>) -> Vec<U> + 'static,
    {
        self.refine = Some(Rc::new(refine));
        self
    }

    /// Appends the node itself, projected through `unit`.
    #[must_use]
    pub fn with_include_terminal<F>(mut self, unit: F) -> Self
    where
        F: Fn(&PathTreeNode<T, I>) -> U + 'static,
    {
        self.include_terminal = Some(Rc::new(unit));
        self
    }

    /// Field-by-field: values set here win over `defaults`.
    fn or(&self, defaults: &Self) -> Self {
        Self {
            refine: self.refine.clone().or_else(|| defaults.refine.clone()),
            include_terminal: self
                .include_terminal
                .clone()
                .or_else(|| defaults.include_terminal.clone()),
        }
    }
}

/// Computes and caches pathways for the nodes of one tree.
///
/// # Examples
///
/// ```
/// use pathtree::pathway::{Breadcrumb, PathwayOptions, PathwaysPreparer};
/// use pathtree::tree::path_tree;
///
/// let tree = path_tree(
///     vec!["home", "home/module2", "home/module2/component1"],
///     |path: &&str| path.split('/').map(String::from).collect(),
///     |_, _| (),
/// );
/// let pathways = PathwaysPreparer::breadcrumbs(
///     &tree,
///     PathwayOptions::new().with_include_terminal(Breadcrumb::from_node),
/// );
///
/// let crumbs = pathways.by_node_key("home/module2/component1").unwrap();
/// let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, vec!["home", "module2", "component1"]);
/// assert!(pathways.by_node_key("home/missing").is_none());
/// ```
pub struct PathwaysPreparer<'t, T, I, U> {
    tree: &'t PathTree<T, I>,
    index: HashMap<String, &'t PathTreeNode<T, I>>,
    intermediary_unit: UnitFn<T, I, U>,
    terminal_unit: UnitFn<T, I, U>,
    defaults: PathwayOptions<T, I, U>,
    by_key: RefCell<HashMap<String, Rc<Vec<U>>>>,
    by_path: RefCell<HashMap<String, Rc<Vec<U>>>>,
}

impl<'t, T, I, U> PathwaysPreparer<'t, T, I, U> {
    /// Creates a preparer indexing `tree` by qualified path.
    ///
    /// `intermediary_unit` projects ancestors; `terminal_unit` is the
    /// projection handed out by [`Self::terminal_options`].
    pub fn new<IU, TU>(
        tree: &'t PathTree<T, I>,
        intermediary_unit: IU,
        terminal_unit: TU,
        defaults: PathwayOptions<T, I, U>,
    ) -> Self
    where
        IU: Fn(&PathTreeNode<T, I>) -> U + 'static,
        TU: Fn(&PathTreeNode<T, I>) -> U + 'static,
    {
        Self {
            tree,
            index: tree.index_by_path(),
            intermediary_unit: Rc::new(intermediary_unit),
            terminal_unit: Rc::new(terminal_unit),
            defaults,
            by_key: RefCell::new(HashMap::new()),
            by_path: RefCell::new(HashMap::new()),
        }
    }

    /// Replaces the lookup index used by [`Self::by_node_key`].
    #[must_use]
    pub fn with_index(mut self, index: HashMap<String, &'t PathTreeNode<T, I>>) -> Self {
        self.index = index;
        self.by_key.get_mut().clear();
        self
    }

    /// The projection applied to ancestors.
    #[must_use]
    pub fn intermediary_unit(&self) -> &UnitFn<T, I, U> {
        &self.intermediary_unit
    }

    /// The projection configured for terminal nodes.
    #[must_use]
    pub fn terminal_unit(&self) -> &UnitFn<T, I, U> {
        &self.terminal_unit
    }

    /// Options that append the node through the configured terminal unit.
    #[must_use]
    pub fn terminal_options(&self) -> PathwayOptions<T, I, U> {
        PathwayOptions {
            refine: None,
            include_terminal: Some(Rc::clone(&self.terminal_unit)),
        }
    }

    /// The pathway of the node indexed under `key`, using default options.
    pub fn by_node_key(&self, key: &str) -> Option<Rc<Vec<U>>> {
        self.by_node_key_with(key, &PathwayOptions::default())
    }

    /// The pathway of the node indexed under `key`.
    ///
    /// Returns `None` when the key is not in the index. A cached pathway is
    /// returned as-is regardless of `options`.
    pub fn by_node_key_with(&self, key: &str, options: &PathwayOptions<T, I, U>) -> Option<Rc<Vec<U>>> {
        if let Some(cached) = self.by_key.borrow().get(key) {
            return Some(Rc::clone(cached));
        }
        let node = *self.index.get(key)?;
        let pathway = Rc::new(self.assemble(node, &options.or(&self.defaults)));
        self.by_key
            .borrow_mut()
            .insert(key.to_string(), Rc::clone(&pathway));
        Some(pathway)
    }

    /// The pathway of `node`, using default options.
    pub fn by_node(&self, node: &PathTreeNode<T, I>) -> Rc<Vec<U>> {
        self.by_node_with(node, &PathwayOptions::default())
    }

    /// The pathway of `node`, cached by its qualified path.
    pub fn by_node_with(&self, node: &PathTreeNode<T, I>, options: &PathwayOptions<T, I, U>) -> Rc<Vec<U>> {
        if let Some(cached) = self.by_path.borrow().get(node.qualified_path()) {
            return Rc::clone(cached);
        }
        let pathway = Rc::new(self.assemble(node, &options.or(&self.defaults)));
        self.by_path
            .borrow_mut()
            .insert(node.qualified_path().to_string(), Rc::clone(&pathway));
        pathway
    }

    fn assemble(&self, node: &PathTreeNode<T, I>, options: &PathwayOptions<T, I, U>) -> Vec<U> {
        let mut pathway: Vec<U> = node
            .ancestors()
            .iter()
            .rev()
            .map(|id| (self.intermediary_unit)(&self.tree[*id]))
            .collect();
        if let Some(include_terminal) = &options.include_terminal {
            pathway.push(include_terminal(node));
        }
        match &options.refine {
            Some(refine) => refine(pathway),
            None => pathway,
        }
    }
}

impl<'t, T: 'static, I: 'static> PathwaysPreparer<'t, T, I, Breadcrumb> {
    /// A preparer producing [`Breadcrumb`]s for every node.
    pub fn breadcrumbs(tree: &'t PathTree<T, I>, defaults: PathwayOptions<T, I, Breadcrumb>) -> Self {
        Self::new(tree, Breadcrumb::from_node, Breadcrumb::from_node, defaults)
    }
}
