//! Data models for scanned filesystem entries

use serde::{Deserialize, Serialize};
use std::path::{MAIN_SEPARATOR, Path};

/// One file or directory observed during a scan.
///
/// For directories `size` is cumulative: it starts at zero and is filled in by
/// the rollup once traversal has finished. It is never taken from the
/// directory's own metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub parent: String,
    pub size: u64,
    pub is_dir: bool,
}

impl Entry {
    #[must_use]
    pub fn file(name: impl Into<String>, parent: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            size,
            is_dir: false,
        }
    }

    #[must_use]
    pub fn dir(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            size: 0,
            is_dir: true,
        }
    }

    /// Entry for the scan root: named after the root path as given, no parent.
    #[must_use]
    pub fn root(root: &Path) -> Self {
        Self::dir(root.to_string_lossy(), String::new())
    }

    /// Containing path joined with the name. Directories get a trailing separator.
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut path = if self.parent.is_empty() {
            self.name.clone()
        } else {
            Path::new(&self.parent)
                .join(&self.name)
                .to_string_lossy()
                .into_owned()
        };

        if self.is_dir && !path.ends_with(MAIN_SEPARATOR) && !path.ends_with('/') {
            path.push(MAIN_SEPARATOR);
        }
        path
    }

    /// Size rendered either as raw bytes or with binary unit prefixes.
    #[must_use]
    pub fn display_size(&self, human_readable: bool) -> String {
        crate::services::size::format_size(self.size, human_readable)
    }
}

/// Serializable view of a ranked entry, used by the JSON renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub path: String,
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
}

impl From<&Entry> for RankedEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            path: entry.full_path(),
            name: entry.name.clone(),
            size: entry.size,
            is_dir: entry.is_dir,
        }
    }
}

/// Counters gathered by the traversal tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files recorded in the tree.
    pub files: u64,
    /// Directories recorded in the tree, the root included.
    pub dirs: u64,
    /// Entries dropped because their type or size could not be read.
    pub skipped: u64,
    /// Traversal tasks run, one per listed directory.
    pub tasks: u64,
}
