//! Output formatting for CLI

use crate::models::{Entry, RankedEntry, ScanStats};
use crate::services::tree::Node;
use crate::{Report, Timings};
use serde::Serialize;
use std::fmt::Write as _;

/// Width of the size column in flat output.
pub const SIZE_COLUMN_WIDTH: usize = 12;

const TREE_INDENT: &str = "│   ";
const TREE_BRANCH: &str = "├── ";

/// Ranked listing, one `<size> <full path>` line per entry.
#[must_use]
pub fn format_flat(entries: &[&Entry], human_readable: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<width$} {}",
            entry.display_size(human_readable),
            entry.full_path(),
            width = SIZE_COLUMN_WIDTH
        );
    }
    out
}

/// Indented tree, one `├── <name> (<size>)` line per node.
#[must_use]
pub fn format_tree(root: &Node, human_readable: bool) -> String {
    let mut out = String::new();
    write_tree(&mut out, root, 0, human_readable);
    out
}

fn write_tree(out: &mut String, node: &Node, depth: usize, human_readable: bool) {
    let _ = writeln!(
        out,
        "{}{TREE_BRANCH}{} ({})",
        TREE_INDENT.repeat(depth),
        node.entry.name,
        node.entry.display_size(human_readable)
    );
    for child in &node.children {
        write_tree(out, child, depth + 1, human_readable);
    }
}

#[derive(Serialize)]
struct FlatDocument<'a> {
    root: &'a str,
    entries: Vec<RankedEntry>,
}

#[derive(Serialize)]
struct TreeDocument {
    name: String,
    path: String,
    size: u64,
    is_dir: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeDocument>,
}

impl From<&Node> for TreeDocument {
    fn from(node: &Node) -> Self {
        Self {
            name: node.entry.name.clone(),
            path: node.entry.full_path(),
            size: node.entry.size,
            is_dir: node.entry.is_dir,
            children: node.children.iter().map(TreeDocument::from).collect(),
        }
    }
}

/// Ranked entries as JSON
#[must_use]
pub fn format_json_flat(root: &str, entries: &[&Entry]) -> String {
    let document = FlatDocument {
        root,
        entries: entries.iter().map(|entry| RankedEntry::from(*entry)).collect(),
    };
    let mut json = serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Whole tree as nested JSON
#[must_use]
pub fn format_json_tree(root: &Node) -> String {
    let mut json = serde_json::to_string_pretty(&TreeDocument::from(root))
        .unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Verbose diagnostics printed after the output.
#[must_use]
pub fn format_diagnostics(report: &Report) -> String {
    let ScanStats {
        files,
        dirs,
        skipped,
        tasks,
    } = report.stats;
    let Timings {
        discovery,
        sort,
        render,
        total,
    } = report.timings;

    let mut out = String::new();
    let _ = writeln!(out, "## File Count {}", report.listed);
    let _ = writeln!(out, "## Files {files}, Directories {dirs}, Skipped {skipped}");
    let _ = writeln!(out, "## Tasks {tasks}");
    let _ = writeln!(out, "## Sorting Time {sort:?}");
    let _ = writeln!(out, "## Printing Time {render:?}");
    let _ = writeln!(out, "## Index Time {discovery:?}");
    let _ = writeln!(out, "## Total Times {total:?}");
    out
}
