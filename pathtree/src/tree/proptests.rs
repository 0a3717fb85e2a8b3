//! Property-based tests for path tree construction and navigation.

use super::{path_tree, PathTree};
use proptest::prelude::*;
use std::collections::HashSet;

fn unit_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(unit_strategy(), 1..5)
}

fn build(paths: &[Vec<String>]) -> PathTree<Vec<String>, usize> {
    path_tree(paths.to_vec(), Vec::clone, |node, _| node.level())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every inserted path resolves back to a terminal with the same units
    #[test]
    fn inserted_paths_round_trip(paths in prop::collection::vec(path_strategy(), 1..30)) {
        let tree = build(&paths);
        for units in &paths {
            let joined = units.join("/");
            let id = tree.select_path(joined.as_str());
            prop_assert!(id.is_some());
            let node = &tree[id.unwrap()];
            prop_assert_eq!(node.qualified_path(), joined.as_str());
            prop_assert_eq!(node.terminal(), Some(units));
        }
    }

    // One node per distinct prefix, never more
    #[test]
    fn node_count_equals_distinct_prefixes(paths in prop::collection::vec(path_strategy(), 0..30)) {
        let tree = build(&paths);
        let prefixes: HashSet<String> = paths
            .iter()
            .flat_map(|units| (1..=units.len()).map(move |n| units[..n].join("/")))
            .collect();
        prop_assert_eq!(tree.len(), prefixes.len());
    }

    // level == ancestors.len(), ancestors[0] == parent, last ancestor is a root
    #[test]
    fn ancestor_bookkeeping_consistent(paths in prop::collection::vec(path_strategy(), 1..30)) {
        let tree = build(&paths);
        for node in tree.nodes() {
            prop_assert_eq!(node.ancestors().len(), node.level());
            prop_assert_eq!(node.ancestors().first().copied(), node.parent());
            if let Some(last) = node.ancestors().last() {
                prop_assert_eq!(tree[*last].level(), 0);
                prop_assert!(tree.roots().contains(last));
            }
        }
    }

    // Sibling units are unique
    #[test]
    fn sibling_units_unique(paths in prop::collection::vec(path_strategy(), 1..30)) {
        let tree = build(&paths);
        let mut groups: Vec<&[super::NodeId]> = vec![tree.roots()];
        groups.extend(tree.nodes().map(|n| n.children()));
        for siblings in groups {
            let units: HashSet<&str> = siblings.iter().map(|id| tree[*id].unit()).collect();
            prop_assert_eq!(units.len(), siblings.len());
        }
    }

    // Walking to a child and back with ".." returns the start node
    #[test]
    fn parent_segment_inverts_child(paths in prop::collection::vec(path_strategy(), 1..20)) {
        let tree = build(&paths);
        for node in tree.nodes() {
            for child in node.children() {
                let query = format!("{}/..", tree[*child].unit());
                prop_assert_eq!(tree.select_node(node.id(), query.as_str()), Some(node.id()));
            }
        }
    }

    // Pre-order listing visits every node exactly once
    #[test]
    fn listing_covers_all_nodes(paths in prop::collection::vec(path_strategy(), 0..30)) {
        let tree = build(&paths);
        let listed = tree.all_nodes();
        prop_assert_eq!(listed.len(), tree.len());
        let unique: HashSet<_> = listed.iter().map(|n| n.id()).collect();
        prop_assert_eq!(unique.len(), tree.len());
    }
}
