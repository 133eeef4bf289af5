//! Merged view of a single input file.

use std::io;

use super::contract::{Entry, File};
use super::directory::VirtualDirectory;
use crate::error::{FsError, FsResult};
use crate::path::Path;
use crate::system::FileSystem;

/// Where a virtual file's content comes from.
#[derive(Debug, Clone)]
pub(crate) enum Backing {
    /// Found in the root at index `root`.
    Resolved { root: usize, location: Path },
    /// Found nowhere; where the highest-precedence root would hold it.
    Anchored { root: usize, location: Path },
    /// No roots are configured.
    Unrooted,
}

/// A file in the merged input tree.
///
/// [`path`](Entry::path) is always the virtual path; which root satisfied
/// the lookup is not observable except through the content itself. A file
/// that was not found in any root still has a handle: `exists()` is false and
/// reads fail with [`FsError::NotFound`].
#[derive(Debug, Clone)]
pub struct VirtualFile {
    fs: FileSystem,
    path: Path,
    backing: Backing,
}

impl VirtualFile {
    pub(crate) fn new(fs: &FileSystem, path: Path, backing: Backing) -> Self {
        Self {
            fs: fs.clone(),
            path,
            backing,
        }
    }

    /// The file name (last segment of the virtual path).
    pub fn name(&self) -> Option<&str> {
        self.path.name()
    }

    fn not_found(&self) -> FsError {
        let anchor = match &self.backing {
            Backing::Resolved { root, location } | Backing::Anchored { root, location } => self
                .fs
                .roots()
                .get(*root)
                .map(|root| root.qualify(location.clone()).to_string()),
            Backing::Unrooted => None,
        };
        FsError::NotFound {
            path: self.path.to_string(),
            anchor,
        }
    }
}

impl Entry for VirtualFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        match &self.backing {
            Backing::Resolved { root, location } => self
                .fs
                .roots()
                .get(*root)
                .is_some_and(|root| root.provider().file_exists(location)),
            Backing::Anchored { .. } | Backing::Unrooted => false,
        }
    }
}

impl File for VirtualFile {
    type Directory = VirtualDirectory;

    fn directory(&self) -> VirtualDirectory {
        let parent = self.path.parent().unwrap_or_else(Path::current);
        VirtualDirectory::unchecked(&self.fs, parent)
    }

    fn read_bytes(&self) -> FsResult<Vec<u8>> {
        let Backing::Resolved { root, location } = &self.backing else {
            return Err(self.not_found());
        };
        let Some(root) = self.fs.roots().get(*root) else {
            return Err(self.not_found());
        };
        match root.provider().open_file(location)? {
            Some(content) => {
                self.fs.access().record(&self.path);
                Ok(content)
            }
            None => Err(self.not_found()),
        }
    }

    fn read_to_string(&self) -> FsResult<String> {
        let bytes = self.read_bytes()?;
        decode_utf8(bytes).map_err(|_| {
            FsError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("input file {} is not valid UTF-8", self.path),
            ))
        })
    }
}

/// Decode UTF-8, dropping a leading byte order mark.
fn decode_utf8(mut bytes: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
    if bytes.starts_with(b"\xef\xbb\xbf") {
        bytes.drain(..3);
    }
    String::from_utf8(bytes)
}
