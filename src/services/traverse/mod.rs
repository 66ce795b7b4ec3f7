//! Concurrent directory walker.
//!
//! Every directory is listed by its own task. A task reads its directory
//! synchronously, appends the children it admits to its node, and spawns one
//! new task per admitted subdirectory. All tasks run inside a single
//! `rayon::scope`, whose pending-job count is the join: the scope returns only
//! after every recursively spawned task has finished.
//!
//! - Listing levels start at 1 for the root. A subdirectory is recorded only
//!   when its own listing level is within `max_depth` (0 = unlimited).
//! - Hidden entries are dropped together with their subtree.
//! - Unreadable entry metadata skips that entry; an unreadable directory
//!   aborts the whole scan.

pub mod context;

pub use context::TraversalContext;

use crate::Error;
use crate::models::Entry;
use crate::services::tree::ScanNode;
use rayon::Scope;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Level of the root directory's own listing.
pub const ROOT_LEVEL: u32 = 1;

/// Traverse `root` and return the populated shared tree.
///
/// The returned node is the only remaining handle to the tree once this
/// returns, so it can be frozen without copying. Read failures are kept in
/// `context`; callers check them with [`TraversalContext::finish`].
///
/// # Errors
/// `Error::System` if a dedicated worker pool was requested and could not be
/// built.
pub fn traverse_directory(root: &Path, context: &TraversalContext) -> crate::Result<Arc<ScanNode>> {
    let root_node = ScanNode::new(Entry::root(root));
    let task_node = Arc::clone(&root_node);
    let root_dir = root.to_path_buf();

    let run = move || {
        rayon::scope(|scope| {
            context.register_task();
            walk(scope, context, task_node, root_dir, ROOT_LEVEL);
        });
    };

    match context.options.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("dusk-walk-{i}"))
                .build()
                .map_err(|e| Error::System(format!("cannot build worker pool: {e}")))?;
            log::debug!("Walking {} on {threads} dedicated threads", root.display());
            pool.install(run);
        }
        None => run(),
    }

    Ok(root_node)
}

/// List one directory and fan out over its subdirectories.
fn walk<'scope>(
    scope: &Scope<'scope>,
    context: &'scope TraversalContext,
    node: Arc<ScanNode>,
    dir: PathBuf,
    level: u32,
) {
    if context.is_aborted() {
        return;
    }

    let entries = match read_sorted(&dir) {
        Ok(entries) => entries,
        Err(err) => {
            context.record_failure(&dir, err);
            return;
        }
    };

    log::debug!("Listing {} (level {level}, {} entries)", dir.display(), entries.len());

    let parent = node.entry().full_path();
    let child_level = level + 1;

    for dir_entry in entries {
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if context.is_hidden(&name) {
            continue;
        }

        let file_type = match dir_entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                context.record_skip(&dir_entry.path(), &err);
                continue;
            }
        };

        if file_type.is_dir() {
            if !context.admits_level(child_level) {
                log::trace!("Depth limit excludes {}", dir_entry.path().display());
                continue;
            }

            let child = ScanNode::new(Entry::dir(name, parent.as_str()));
            node.push_child(Arc::clone(&child));
            context.register_directory();

            let child_dir = dir_entry.path();
            context.register_task();
            scope.spawn(move |scope| walk(scope, context, child, child_dir, child_level));
        } else {
            let size = match dir_entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    context.record_skip(&dir_entry.path(), &err);
                    continue;
                }
            };

            log::trace!("File entry: {}/{name} (size: {size})", dir.display());
            node.push_child(ScanNode::new(Entry::file(name, parent.as_str(), size)));
            context.register_file();
        }
    }
}

/// Read a directory fully, ordered by file name.
fn read_sorted(dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
