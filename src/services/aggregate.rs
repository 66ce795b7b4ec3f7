//! Size rollup and ordering for finished trees

use crate::models::Entry;
use crate::services::tree::Node;
use std::cmp::Ordering;

/// Direction of the size ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    #[must_use]
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    #[must_use]
    pub fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            SortOrder::Descending => b.size.cmp(&a.size),
            SortOrder::Ascending => a.size.cmp(&b.size),
        }
    }
}

/// Post-order rollup: every directory's size becomes the sum of its
/// children's sizes. Returns the size of `node`.
///
/// Must run after traversal has joined; files keep the size they were
/// discovered with.
pub fn rollup(node: &mut Node) -> u64 {
    if node.is_dir() {
        node.entry.size = node.children.iter_mut().map(rollup).sum();
    }
    node.entry.size
}

/// Sort every directory's children by size, recursively.
///
/// The sort is stable, so equal sizes keep discovery order.
pub fn sort_tree(node: &mut Node, order: SortOrder) {
    node.children.sort_by(|a, b| order.compare(&a.entry, &b.entry));
    for child in &mut node.children {
        sort_tree(child, order);
    }
}

/// Flatten the tree and rank the entries by size.
///
/// Files always take part; directories (the root included) only when
/// `include_dirs` is set. Equal sizes keep discovery order.
#[must_use]
pub fn rank(tree: &Node, include_dirs: bool, order: SortOrder) -> Vec<&Entry> {
    let mut entries = tree.flatten(include_dirs);
    entries.sort_by(|a, b| order.compare(a, b));
    entries
}

/// The first `top` ranked entries, or all of them when `top` is 0.
#[must_use]
pub fn limit<'a, 'b>(ranked: &'b [&'a Entry], top: usize) -> &'b [&'a Entry] {
    if top == 0 {
        ranked
    } else {
        &ranked[..top.min(ranked.len())]
    }
}
