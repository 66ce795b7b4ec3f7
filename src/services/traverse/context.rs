//! Shared state borrowed by every traversal task.

use crate::models::ScanStats;
use crate::{Error, ScanOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Traversal context: options, counters, and the first fatal failure.
pub struct TraversalContext {
    pub options: ScanOptions,
    failure: Mutex<Option<Error>>,
    aborted: AtomicBool,
    files: AtomicU64,
    dirs: AtomicU64,
    skipped: AtomicU64,
    tasks: AtomicU64,
}

impl TraversalContext {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            failure: Mutex::new(None),
            aborted: AtomicBool::new(false),
            files: AtomicU64::new(0),
            // the root
            dirs: AtomicU64::new(1),
            skipped: AtomicU64::new(0),
            tasks: AtomicU64::new(0),
        }
    }

    /// Whether a directory listed at `level` may be visited.
    #[must_use]
    pub fn admits_level(&self, level: u32) -> bool {
        self.options.max_depth == 0 || level <= self.options.max_depth
    }

    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.options.include_hidden && name.starts_with('.')
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    /// Keep the first directory read failure and stop scheduling new work.
    pub(crate) fn record_failure(&self, path: &Path, error: io::Error) {
        self.aborted.store(true, Ordering::Release);

        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if failure.is_some() {
            log::debug!("Further read failure on {}: {error}", path.display());
            return;
        }

        log::warn!("Aborting scan, cannot read {}: {error}", path.display());
        *failure = Some(Error::DirectoryRead {
            path: path.to_string_lossy().to_string(),
            source: error,
        });
    }

    /// Count an entry dropped because its type or metadata was unreadable.
    pub(crate) fn record_skip(&self, path: &Path, error: &io::Error) {
        log::debug!("Skipping {}: {error}", path.display());
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn register_file(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn register_directory(&self) {
        self.dirs.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn register_task(&self) {
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    /// Counters gathered so far.
    #[must_use]
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            files: self.files.load(Ordering::Relaxed),
            dirs: self.dirs.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            tasks: self.tasks.load(Ordering::Relaxed),
        }
    }

    /// Consume the context once traversal has joined.
    ///
    /// # Errors
    /// Returns the first directory read failure, if any task hit one.
    pub fn finish(self) -> crate::Result<ScanStats> {
        let stats = self.stats();
        match self
            .failure
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
        {
            Some(err) => Err(err),
            None => Ok(stats),
        }
    }
}
