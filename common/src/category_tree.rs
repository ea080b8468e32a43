//! Expand/collapse state for the category taxonomy sidebar.
//!
//! Open state is stored per path, outside the taxonomy itself. Collapsing a
//! node leaves the state of its descendants untouched, so re-expanding it
//! shows them the way they were.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::CategoryTree;

/// Labels from the taxonomy root down to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn child(&self, label: &str) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.to_string());
        Self(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn label(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl std::fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTreeState {
    open: BTreeSet<CategoryPath>,
}

impl CategoryTreeState {
    pub fn is_open(&self, path: &CategoryPath) -> bool {
        self.open.contains(path)
    }

    /// Flips one node. Leaves and paths missing from `taxonomy` are left alone.
    /// Returns the node's open state afterwards.
    pub fn toggle(&mut self, taxonomy: &CategoryTree, path: &CategoryPath) -> bool {
        let Some(node) = taxonomy.node_at(path) else { return false };
        if node.is_leaf() || path.depth() == 0 {
            return false;
        }
        if self.open.remove(path) {
            false
        } else {
            self.open.insert(path.clone());
            true
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// One rendered line of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub path: CategoryPath,
    pub label: String,
    /// Zero for top-level categories.
    pub depth: usize,
    pub has_children: bool,
    pub is_open: bool,
}

/// Depth-first rows in the taxonomy's own key order, descending only into open nodes.
pub fn visible_rows(taxonomy: &CategoryTree, state: &CategoryTreeState) -> Vec<CategoryRow> {
    let mut rows = Vec::new();
    push_rows(taxonomy, &CategoryPath::root(), state, &mut rows);
    rows
}

fn push_rows(node: &CategoryTree, parent: &CategoryPath, state: &CategoryTreeState, rows: &mut Vec<CategoryRow>) {
    for (label, child) in node.children() {
        let path = parent.child(label);
        let has_children = !child.is_leaf();
        let is_open = has_children && state.is_open(&path);
        rows.push(CategoryRow { path: path.clone(), label: label.clone(), depth: parent.depth(), has_children, is_open });
        if is_open {
            push_rows(child, &path, state, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn taxonomy() -> CategoryTree {
        CategoryTree::new()
            .with_child(
                "India",
                CategoryTree::new()
                    .with_child("States", CategoryTree::new().with_child("Kerala", CategoryTree::new()).with_child("Goa", CategoryTree::new()))
                    .with_child("Union", CategoryTree::new()),
            )
            .with_child("World", CategoryTree::new())
    }

    fn labels(rows: &[CategoryRow]) -> Vec<(usize, &str)> {
        rows.iter().map(|row| (row.depth, row.label.as_str())).collect()
    }

    #[test]
    fn everything_starts_closed() {
        let rows = visible_rows(&taxonomy(), &CategoryTreeState::default());
        assert_eq!(labels(&rows), vec![(0, "India"), (0, "World")]);
        assert!(rows[0].has_children);
        assert!(!rows[0].is_open);
        assert!(!rows[1].has_children);
    }

    #[test]
    fn collapsed_parent_remembers_open_child() {
        let tree = taxonomy();
        let mut state = CategoryTreeState::default();
        let india = CategoryPath::from_labels(["India"]);
        let states = CategoryPath::from_labels(["India", "States"]);

        assert!(state.toggle(&tree, &india));
        assert!(state.toggle(&tree, &states));
        assert!(!state.toggle(&tree, &india));
        assert_eq!(labels(&visible_rows(&tree, &state)), vec![(0, "India"), (0, "World")]);

        assert!(state.toggle(&tree, &india));
        assert!(state.is_open(&states));
        assert_eq!(
            labels(&visible_rows(&tree, &state)),
            vec![(0, "India"), (1, "States"), (2, "Kerala"), (2, "Goa"), (1, "Union"), (0, "World")]
        );
    }

    #[test]
    fn leaves_and_unknown_paths_do_not_toggle() {
        let tree = taxonomy();
        let mut state = CategoryTreeState::default();
        assert!(!state.toggle(&tree, &CategoryPath::from_labels(["World"])));
        assert!(!state.toggle(&tree, &CategoryPath::from_labels(["Mars"])));
        assert!(!state.toggle(&tree, &CategoryPath::root()));
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn siblings_are_independent() {
        let tree = CategoryTree::new()
            .with_child("A", CategoryTree::new().with_child("a1", CategoryTree::new()))
            .with_child("B", CategoryTree::new().with_child("b1", CategoryTree::new()));
        let mut state = CategoryTreeState::default();
        state.toggle(&tree, &CategoryPath::from_labels(["B"]));
        assert_eq!(labels(&visible_rows(&tree, &state)), vec![(0, "A"), (0, "B"), (1, "b1")]);
    }
}
