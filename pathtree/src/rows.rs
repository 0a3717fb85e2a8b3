//! Grouping of flat relational rows into nested trees.
//!
//! Rows reference their parent by id. [`tree_of`] nests every row under its
//! parent, keeping the input's relative order among siblings. Rows without a
//! parent id become roots; rows whose parent never appears as a root
//! descendant are left out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A row that names its own id and, optionally, its parent's id.
pub trait RelationalRow {
    /// This row's identifier.
    fn id(&self) -> &str;

    /// The parent's identifier, or `None` for a root row.
    fn parent_id(&self) -> Option<&str>;
}

/// A row together with its grouped children.
///
/// Serializes as the row's own fields plus a `children` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowNode<R> {
    /// The grouped row.
    #[serde(flatten)]
    pub row: R,
    /// Child rows, in input order.
    pub children: Vec<RowNode<R>>,
}

/// Schema-less row: an id, an optional `parentId` and any other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    /// Row identifier.
    pub id: String,
    /// Parent row identifier.
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// All remaining fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FlatRow {
    /// Creates a row without extra fields.
    #[must_use]
    pub fn new(id: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(String::from),
            extra: serde_json::Map::new(),
        }
    }
}

impl RelationalRow for FlatRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

/// Groups `rows` into a forest by parent id.
///
/// Rows are bucketed by parent id in one pass, so construction is linear in
/// the number of rows. A row whose id already appears on its own ancestor
/// chain is skipped, which keeps self-referencing or duplicated ids from
/// recursing forever.
///
/// # Examples
///
/// ```
/// use pathtree::rows::{tree_of, FlatRow};
///
/// let rows = vec![FlatRow::new("1", None), FlatRow::new("1_1", Some("1"))];
/// let forest = tree_of(&rows);
///
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].row.id, "1");
/// assert_eq!(forest[0].children[0].row.id, "1_1");
/// assert!(forest[0].children[0].children.is_empty());
/// ```
pub fn tree_of<R>(rows: &[R]) -> Vec<RowNode<R>>
where
    R: RelationalRow + Clone,
{
    let mut by_parent: HashMap<Option<&str>, Vec<&R>> = HashMap::new();
    for row in rows {
        by_parent.entry(row.parent_id()).or_default().push(row);
    }
    let mut ancestry = Vec::new();
    group(&by_parent, None, &mut ancestry)
}

fn group<'r, R>(
    by_parent: &HashMap<Option<&'r str>, Vec<&'r R>>,
    parent: Option<&'r str>,
    ancestry: &mut Vec<&'r str>,
) -> Vec<RowNode<R>>
where
    R: RelationalRow + Clone,
{
    let Some(rows) = by_parent.get(&parent) else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(rows.len());
    for &row in rows {
        let id = row.id();
        if ancestry.contains(&id) {
            log::debug!("skipping row {id}: already on its own ancestor chain");
            continue;
        }
        ancestry.push(id);
        let children = group(by_parent, Some(id), ancestry);
        ancestry.pop();
        nodes.push(RowNode {
            row: row.clone(),
            children,
        });
    }
    nodes
}
