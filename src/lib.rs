//! Disk Usage Scanner Library
//!
//! Walks a directory tree with one concurrent task per subdirectory, rolls
//! file sizes up into their ancestors, and renders the result as a ranked
//! list of the largest entries or as an indented tree.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{Entry, ScanStats};
pub use services::tree::Node;

use services::aggregate::{self, SortOrder};
use std::path::Path;
use std::result;
use std::time::{Duration, Instant};

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },
    System(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::DirectoryRead { path, source } => {
                write!(f, "Failed to read directory '{path}': {source}")
            }
            Error::System(msg) => write!(f, "System error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::DirectoryRead { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options controlling traversal
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Deepest listing level to visit; 0 means unlimited. The root's own
    /// listing is level 1, so `1` keeps only the root's direct files.
    pub max_depth: u32,
    /// Keep entries whose name starts with `.`.
    pub include_hidden: bool,
    /// Size of a dedicated worker pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Flat,
    Tree,
}

/// Options controlling the sort and render phases
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub mode: OutputMode,
    /// Ascending instead of descending by size.
    pub invert: bool,
    /// Flat mode only: number of entries to print, 0 for all.
    pub top: usize,
    /// Flat mode only: rank directories alongside files.
    pub include_dirs: bool,
    pub human_readable: bool,
    pub json: bool,
}

/// A finished scan: the aggregated tree plus traversal counters.
#[derive(Debug)]
pub struct Scan {
    pub root: String,
    pub tree: Node,
    pub stats: ScanStats,
    /// Traversal plus rollup.
    pub discovery: Duration,
}

/// Phase durations measured by [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Timings {
    pub discovery: Duration,
    pub sort: Duration,
    pub render: Duration,
    pub total: Duration,
}

/// Rendered output and the diagnostics gathered while producing it.
#[derive(Debug)]
pub struct Report {
    pub output: String,
    /// Entries eligible for output: ranked entries in flat mode, every node
    /// in tree mode.
    pub listed: usize,
    pub stats: ScanStats,
    pub timings: Timings,
}

/// Scan a directory and return the aggregated tree
///
/// # Errors
/// `Error::InvalidInput` if `root` does not exist or is not a directory,
/// `Error::DirectoryRead` if any directory cannot be read during traversal.
pub fn scan<P: AsRef<Path>>(root: P, opts: &ScanOptions) -> Result<Scan> {
    let root = root.as_ref();
    let root_path = root.to_string_lossy().to_string();

    let is_dir = std::fs::metadata(root).is_ok_and(|meta| meta.is_dir());
    if !is_dir {
        return Err(Error::InvalidInput(format!(
            "Folder path specified '{root_path}' does not exist or is not a directory"
        )));
    }

    let started = Instant::now();
    let context = services::traverse::TraversalContext::new(opts.clone());
    let shared = services::traverse::traverse_directory(root, &context)?;
    let stats = context.finish()?;

    let mut tree = services::tree::ScanNode::freeze(shared);
    let total = aggregate::rollup(&mut tree);
    let discovery = started.elapsed();

    log::debug!(
        "Scanned {root_path}: {} files, {} dirs, {total} bytes in {discovery:?}",
        stats.files,
        stats.dirs
    );

    Ok(Scan {
        root: root_path,
        tree,
        stats,
        discovery,
    })
}

/// Sort and render a finished scan
#[must_use]
pub fn render(mut scan: Scan, opts: &RenderOptions) -> Report {
    let order = SortOrder::from_inverted(opts.invert);
    let mut timings = Timings {
        discovery: scan.discovery,
        ..Timings::default()
    };

    let (output, listed) = match opts.mode {
        OutputMode::Tree => {
            let sort_start = Instant::now();
            aggregate::sort_tree(&mut scan.tree, order);
            timings.sort = sort_start.elapsed();

            let render_start = Instant::now();
            let output = if opts.json {
                cli::output::format_json_tree(&scan.tree)
            } else {
                cli::output::format_tree(&scan.tree, opts.human_readable)
            };
            timings.render = render_start.elapsed();

            (output, scan.tree.count(true))
        }
        OutputMode::Flat => {
            let sort_start = Instant::now();
            let ranked = aggregate::rank(&scan.tree, opts.include_dirs, order);
            timings.sort = sort_start.elapsed();

            let render_start = Instant::now();
            let shown = aggregate::limit(&ranked, opts.top);
            let output = if opts.json {
                cli::output::format_json_flat(&scan.root, shown)
            } else {
                cli::output::format_flat(shown, opts.human_readable)
            };
            timings.render = render_start.elapsed();

            (output, ranked.len())
        }
    };

    timings.total = timings.discovery + timings.sort + timings.render;

    Report {
        output,
        listed,
        stats: scan.stats,
        timings,
    }
}

/// Scan `root` and render it in one call
///
/// # Errors
/// Propagates the errors of [`scan`].
pub fn run<P: AsRef<Path>>(
    root: P,
    scan_opts: &ScanOptions,
    render_opts: &RenderOptions,
) -> Result<Report> {
    let started = Instant::now();
    let scanned = scan(root, scan_opts)?;
    let mut report = render(scanned, render_opts);
    report.timings.total = started.elapsed();
    Ok(report)
}
