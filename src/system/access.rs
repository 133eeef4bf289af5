//! Input read tracking.
//!
//! Records which virtual files were read so a build can tell which inputs a
//! document depended on. Shared by every worker reading through the same
//! [`FileSystem`](super::FileSystem); nothing is persisted between runs.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::path::Path;

/// Set of virtual file paths read since the last reset.
#[derive(Debug, Default)]
pub struct AccessLog {
    files: Mutex<FxHashSet<Path>>,
}

impl AccessLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a read of `path`.
    pub fn record(&self, path: &Path) {
        let mut files = self.files.lock();
        if !files.contains(path) {
            files.insert(path.clone());
        }
    }

    /// All recorded paths, sorted.
    pub fn snapshot(&self) -> Vec<Path> {
        let mut paths: Vec<Path> = self.files.lock().iter().cloned().collect();
        paths.sort();
        paths
    }

    /// Whether `path` was read.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.lock().contains(path)
    }

    /// Forget every recorded read.
    pub fn clear(&self) {
        self.files.lock().clear();
    }
}
