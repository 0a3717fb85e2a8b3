//! Common test utilities for integration tests.
//!
//! Fixtures model a small documentation site: pages are terminals and the
//! folders implied by their paths are intermediaries.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pathtree::tree::{path_tree, PathTree, PathTreeNode};
use pathtree::human_friendly_phrase;

/// A content page, the terminal record of the fixture trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
}

impl Page {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

/// Folder metadata computed while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub friendly_name: String,
}

/// Paths of the full fixture. The `-i` units only exist as prefixes.
pub const SITE_PATHS: &[&str] = &[
    "home",
    "root2",
    "home/module1",
    "home/module1/component1",
    "home/module2",
    "home/module2/component1",
    "home/module2/component1/service1",
    "home/module3-i/component1-i/service1-t",
    "home/module3-i/component1-i/service2-t",
];

/// Splits a page path on `/`.
pub fn page_units(page: &Page) -> Vec<String> {
    page.path.split('/').map(String::from).collect()
}

/// Names a folder after its qualified path.
pub fn folder_of(node: &PathTreeNode<Page, Folder>, _units: &[String]) -> Folder {
    Folder {
        friendly_name: human_friendly_phrase(node.qualified_path()),
    }
}

/// Pages for `paths`, in order.
pub fn pages(paths: &[&str]) -> Vec<Page> {
    paths.iter().map(|path| Page::new(path)).collect()
}

/// Builds the fixture tree from `paths`.
pub fn site_tree(paths: &[&str]) -> PathTree<Page, Folder> {
    path_tree(pages(paths), page_units, folder_of)
}

/// Qualified path of every node in pre-order.
pub fn qualified_paths<T, I>(tree: &PathTree<T, I>) -> Vec<String> {
    tree.all_nodes()
        .iter()
        .map(|node| node.qualified_path().to_string())
        .collect()
}

/// Creates empty files for each `/`-joined path below `root`.
pub fn create_files(root: &Path, paths: &[&str]) {
    for path in paths {
        let file = root.join(path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file, "").unwrap();
    }
}
