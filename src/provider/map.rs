//! Map-based in-memory provider.

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use super::{FileProvider, Scope};
use crate::path::{Path, PathError};

/// A simple map-based provider.
///
/// Useful for injecting generated inputs (or test fixtures) without touching
/// a physical store. Paths are rooted at `/`; a relative string such as
/// `"posts/a.md"` is stored as `/posts/a.md`. Every ancestor of an inserted
/// file or directory is an implied directory, and `/` always exists.
///
/// Listings come back sorted, so enumeration order is stable.
///
/// # Example
///
/// ```
/// use input_vfs::{FileProvider, MapProvider, Path};
///
/// let mut provider = MapProvider::new();
/// provider.insert("/site/input/index.md", "# Home").unwrap();
///
/// assert!(provider.directory_exists(&Path::new("/site/input").unwrap()));
/// assert!(provider.file_exists(&Path::new("/site/input/index.md").unwrap()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapProvider {
    files: BTreeMap<Path, Vec<u8>>,
    directories: BTreeSet<Path>,
}

impl MapProvider {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file with string content.
    pub fn insert(&mut self, path: &str, content: impl AsRef<str>) -> Result<(), PathError> {
        self.insert_bytes(path, content.as_ref().as_bytes().to_vec())
    }

    /// Insert a file with binary content.
    pub fn insert_bytes(
        &mut self,
        path: &str,
        content: impl Into<Vec<u8>>,
    ) -> Result<(), PathError> {
        let path = rooted(path)?;
        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }
        self.files.insert(path, content.into());
        Ok(())
    }

    /// Insert an (empty) directory.
    pub fn insert_dir(&mut self, path: &str) -> Result<(), PathError> {
        self.add_directory(rooted(path)?);
        Ok(())
    }

    /// Remove a file, returning its content.
    ///
    /// Implied directories stay in place.
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(&rooted(path).ok()?)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the provider holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over all file paths.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys()
    }

    fn add_directory(&mut self, mut dir: Path) {
        loop {
            let parent = dir.parent();
            if !self.directories.insert(dir) {
                return;
            }
            match parent {
                Some(parent) => dir = parent,
                None => return,
            }
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        (path.is_absolute() && path.is_empty()) || self.directories.contains(path)
    }
}

/// Whether `candidate` sits below `base` within `scope`.
fn in_scope(candidate: &Path, base: &Path, scope: Scope) -> bool {
    if !candidate.starts_with(base) || candidate.depth() == base.depth() {
        return false;
    }
    match scope {
        Scope::TopOnly => candidate.depth() == base.depth() + 1,
        Scope::Recursive => true,
    }
}

fn rooted(raw: &str) -> Result<Path, PathError> {
    Ok(Path::root().concat(&Path::new(raw)?))
}

impl FileProvider for MapProvider {
    fn directory_exists(&self, path: &Path) -> bool {
        self.is_directory(path)
    }

    fn list_directories(&self, path: &Path, scope: Scope) -> Vec<Path> {
        if !self.is_directory(path) {
            return Vec::new();
        }
        self.directories
            .iter()
            .filter(|dir| in_scope(dir, path, scope))
            .cloned()
            .collect()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn list_files(&self, path: &Path, scope: Scope) -> Vec<Path> {
        if !self.is_directory(path) {
            return Vec::new();
        }
        self.files
            .keys()
            .filter(|file| in_scope(file, path, scope))
            .cloned()
            .collect()
    }

    fn open_file(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }
}
