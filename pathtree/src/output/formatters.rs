//! Output formatter implementations.

use serde::Serialize;

use crate::tree::{NodeId, PathTree, PathTreeNode};
use crate::Result;

use super::TreeFormatter;

/// Serializable snapshot of a node and its descendants.
#[derive(Debug, Serialize)]
pub struct TreeView<'t, T, I> {
    /// The node's unit.
    pub unit: &'t str,
    /// The node's qualified path.
    pub path: &'t str,
    /// The node's depth.
    pub level: usize,
    /// Terminal payload, when the node ends an input path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<&'t T>,
    /// Intermediary payload, when the node prefixes other paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary: Option<&'t I>,
    /// Child views in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeView<'t, T, I>>,
}

/// Builds views of the whole forest down to `max_depth`.
#[must_use]
pub fn tree_view<T, I>(tree: &PathTree<T, I>, max_depth: Option<usize>) -> Vec<TreeView<'_, T, I>> {
    view_of(tree, tree.roots(), max_depth)
}

fn view_of<'t, T, I>(
    tree: &'t PathTree<T, I>,
    ids: &[NodeId],
    max_depth: Option<usize>,
) -> Vec<TreeView<'t, T, I>> {
    ids.iter()
        .map(|id| &tree[*id])
        .filter(|node| max_depth.map_or(true, |max| node.level() <= max))
        .map(|node| TreeView {
            unit: node.unit(),
            path: node.qualified_path(),
            level: node.level(),
            terminal: node.terminal(),
            intermediary: node.intermediary(),
            children: view_of(tree, node.children(), max_depth),
        })
        .collect()
}

/// Formatter for an indented outline using box-drawing connectors.
pub struct TextFormatter;

impl TextFormatter {
    fn write_children<T, I>(
        tree: &PathTree<T, I>,
        node: &PathTreeNode<T, I>,
        indent: &str,
        max_depth: Option<usize>,
        lines: &mut Vec<String>,
    ) {
        if max_depth.is_some_and(|max| node.level() >= max) {
            return;
        }
        let count = node.children().len();
        for (i, child) in node.children().iter().enumerate() {
            let child = &tree[*child];
            let last = i + 1 == count;
            let (connector, continuation) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            lines.push(format!("{indent}{connector}{}", child.unit()));
            let nested = format!("{indent}{continuation}");
            Self::write_children(tree, child, &nested, max_depth, lines);
        }
    }
}

impl<T, I> TreeFormatter<T, I> for TextFormatter {
    fn format(&self, tree: &PathTree<T, I>, max_depth: Option<usize>) -> Result<String> {
        let mut lines = Vec::new();
        for root in tree.roots() {
            let root = &tree[*root];
            lines.push(root.unit().to_string());
            Self::write_children(tree, root, "", max_depth, &mut lines);
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl<T: Serialize, I: Serialize> TreeFormatter<T, I> for JsonFormatter {
    fn format(&self, tree: &PathTree<T, I>, max_depth: Option<usize>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&tree_view(tree, max_depth))?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl<T: Serialize, I: Serialize> TreeFormatter<T, I> for YamlFormatter {
    fn format(&self, tree: &PathTree<T, I>, max_depth: Option<usize>) -> Result<String> {
        Ok(serde_yaml::to_string(&tree_view(tree, max_depth))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::tree::path_tree;

    fn sample() -> PathTree<String, String> {
        path_tree(
            vec![
                "home/module1/component1".to_string(),
                "home/module2".to_string(),
                "root2".to_string(),
            ],
            |path: &String| path.split('/').map(String::from).collect(),
            |node, _| node.unit().to_uppercase(),
        )
    }

    #[test]
    fn test_text_outline() {
        let text = TextFormatter.format(&sample(), None).unwrap();
        assert_eq!(
            text,
            "home\n├── module1\n│   └── component1\n└── module2\nroot2"
        );
    }

    #[test]
    fn test_text_outline_depth_limited() {
        let text = TextFormatter.format(&sample(), Some(1)).unwrap();
        assert_eq!(text, "home\n├── module1\n└── module2\nroot2");
    }

    #[test]
    fn test_text_outline_of_empty_tree() {
        let tree: PathTree<String, String> = PathTree::default();
        assert_eq!(TextFormatter.format(&tree, None).unwrap(), "");
    }

    #[test]
    fn test_json_view() {
        let json = JsonFormatter.format(&sample(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["unit"], "home");
        assert_eq!(value[0]["intermediary"], "HOME");
        assert!(value[0].get("terminal").is_none());
        assert_eq!(value[0]["children"][1]["terminal"], "home/module2");
        assert!(value[0]["children"][1].get("children").is_none());
        assert_eq!(value[1]["path"], "root2");
    }

    #[test]
    fn test_yaml_view_depth_zero() {
        let yaml = YamlFormatter.format(&sample(), Some(0)).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let roots = value.as_sequence().unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots[0].get("children").is_none());
    }

    #[test]
    fn test_create_formatter() {
        let tree = sample();
        let formatter = OutputFormat::Text.create_formatter::<String, String>();
        assert!(formatter.format(&tree, None).unwrap().starts_with("home"));
        let formatter = OutputFormat::Json.create_formatter::<String, String>();
        assert!(formatter.format(&tree, None).unwrap().starts_with('['));
    }
}
