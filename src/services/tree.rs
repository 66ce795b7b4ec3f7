//! Ownership tree of scanned entries.
//!
//! Traversal tasks write into [`ScanNode`]s: each node owns its entry and a
//! mutex-guarded list of children, so the task assigned to a directory can
//! append to that directory while other tasks fill in their own subtrees.
//! Once every task has joined, [`ScanNode::freeze`] turns the shared tree into
//! a plain [`Node`] tree with exclusive ownership for the rollup, sort and
//! render phases.

use crate::models::Entry;
use std::sync::{Arc, Mutex, PoisonError};

/// Tree node while the scan is running.
#[derive(Debug)]
pub struct ScanNode {
    entry: Entry,
    children: Mutex<Vec<Arc<ScanNode>>>,
}

impl ScanNode {
    #[must_use]
    pub fn new(entry: Entry) -> Arc<Self> {
        Arc::new(Self {
            entry,
            children: Mutex::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Append a child. The lock is held only for the push.
    pub fn push_child(&self, child: Arc<ScanNode>) {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(child);
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Convert the shared tree into an exclusively owned one.
    ///
    /// Must only be called after traversal has joined. Nodes that are still
    /// shared (which the walker never leaves behind) are copied instead of
    /// moved.
    #[must_use]
    pub fn freeze(node: Arc<ScanNode>) -> Node {
        let (entry, children) = match Arc::try_unwrap(node) {
            Ok(owned) => (
                owned.entry,
                owned
                    .children
                    .into_inner()
                    .unwrap_or_else(PoisonError::into_inner),
            ),
            Err(shared) => {
                log::warn!(
                    "node {} still shared after traversal; copying",
                    shared.entry.full_path()
                );
                let children = shared
                    .children
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone();
                (shared.entry.clone(), children)
            }
        };

        Node {
            entry,
            children: children.into_iter().map(ScanNode::freeze).collect(),
        }
    }
}

/// Tree node after traversal. Files never have children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub entry: Entry,
    pub children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(entry: Entry, children: Vec<Node>) -> Self {
        Self { entry, children }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.entry.is_dir
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.entry.size
    }

    /// Number of nodes in this subtree, this one included. Directories are
    /// only counted when `include_dirs` is set.
    #[must_use]
    pub fn count(&self, include_dirs: bool) -> usize {
        let own = usize::from(!self.is_dir() || include_dirs);
        own + self
            .children
            .iter()
            .map(|child| child.count(include_dirs))
            .sum::<usize>()
    }

    /// Pre-order walk collecting entries; directories only when `include_dirs`.
    #[must_use]
    pub fn flatten(&self, include_dirs: bool) -> Vec<&Entry> {
        let mut out = Vec::with_capacity(self.count(include_dirs));
        self.collect_into(include_dirs, &mut out);
        out
    }

    fn collect_into<'a>(&'a self, include_dirs: bool, out: &mut Vec<&'a Entry>) {
        if !self.is_dir() || include_dirs {
            out.push(&self.entry);
        }
        for child in &self.children {
            child.collect_into(include_dirs, out);
        }
    }

    /// Find a descendant (or this node) by full path.
    #[must_use]
    pub fn find(&self, full_path: &str) -> Option<&Node> {
        if self.entry.full_path() == full_path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(full_path))
    }
}
