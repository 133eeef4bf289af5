//! Directory and file contract consumed by pipeline code.
//!
//! Not every implementation supports every operation. The merged input view
//! rejects [`Directory::create`] and [`Directory::delete`] with
//! [`FsError::NotSupported`](crate::FsError::NotSupported).

use crate::error::FsResult;
use crate::path::Path;
use crate::provider::Scope;

/// Common surface of files and directories.
pub trait Entry {
    /// The entry's path.
    fn path(&self) -> &Path;

    /// Whether the entry currently exists.
    fn exists(&self) -> bool;
}

/// A directory.
pub trait Directory: Entry + Sized {
    /// File handle type produced by this directory.
    type File: File;

    /// The parent directory, or `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;

    /// Create the directory.
    fn create(&self) -> FsResult<()>;

    /// Delete the directory, recursively if `recursive` is set.
    fn delete(&self, recursive: bool) -> FsResult<()>;

    /// Sub-directories within `scope`.
    fn directories(&self, scope: Scope) -> Vec<Self>;

    /// Files within `scope`.
    fn files(&self, scope: Scope) -> Vec<Self::File>;

    /// A file by path relative to this directory.
    fn file(&self, path: &Path) -> FsResult<Self::File>;

    /// A sub-directory by path relative to this directory.
    fn directory(&self, path: &Path) -> FsResult<Self>;
}

/// A file.
pub trait File: Entry {
    /// Directory handle type containing this file.
    type Directory: Directory;

    /// The directory containing this file.
    fn directory(&self) -> Self::Directory;

    /// Read the whole file.
    fn read_bytes(&self) -> FsResult<Vec<u8>>;

    /// Read the whole file as UTF-8 text, dropping a leading byte order mark.
    fn read_to_string(&self) -> FsResult<String>;
}
