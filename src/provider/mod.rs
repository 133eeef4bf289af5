//! Backing-store contract.
//!
//! A [`FileProvider`] answers existence and enumeration queries for absolute
//! paths in its own namespace. The merged input view never touches a physical
//! store directly; it only calls the five methods below.
//!
//! ```text
//! ┌──────────────────────┐
//! │   VirtualDirectory   │  relative virtual path
//! └──────────┬───────────┘
//!            │ for each root (scheme, prefix)
//!            ▼
//! ┌──────────────────────┐
//! │ FileProvider[scheme] │  prefix + virtual path
//! └──────────────────────┘
//! ```

mod map;

use std::io;

pub use map::MapProvider;

use crate::path::Path;

/// How deep an enumeration goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Direct children only.
    #[default]
    TopOnly,
    /// All descendants.
    Recursive,
}

/// A backing store that can be merged into the input tree.
///
/// All paths are absolute within the provider's namespace. Implementations
/// must be shareable across worker threads; the file system holds them as
/// `Arc<dyn FileProvider>` for the whole build.
///
/// # Example
///
/// ```ignore
/// use input_vfs::{FileProvider, Path, Scope};
///
/// struct Empty;
///
/// impl FileProvider for Empty {
///     fn directory_exists(&self, _path: &Path) -> bool { false }
///     fn list_directories(&self, _path: &Path, _scope: Scope) -> Vec<Path> { Vec::new() }
///     fn file_exists(&self, _path: &Path) -> bool { false }
///     fn list_files(&self, _path: &Path, _scope: Scope) -> Vec<Path> { Vec::new() }
///     fn open_file(&self, _path: &Path) -> std::io::Result<Option<Vec<u8>>> { Ok(None) }
/// }
/// ```
pub trait FileProvider: Send + Sync {
    /// Whether a directory exists at `path`.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Absolute paths of the sub-directories of `path`.
    ///
    /// Returns an empty list when `path` is not an existing directory.
    fn list_directories(&self, path: &Path, scope: Scope) -> Vec<Path>;

    /// Whether a file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Absolute paths of the files below `path`.
    ///
    /// Returns an empty list when `path` is not an existing directory.
    fn list_files(&self, path: &Path, scope: Scope) -> Vec<Path>;

    /// Read the content of the file at `path`.
    ///
    /// Return `Ok(None)` when there is no such file.
    fn open_file(&self, path: &Path) -> io::Result<Option<Vec<u8>>>;
}
