//! Merged view of a directory across every input root.

use super::contract::{Directory, Entry};
use super::file::{Backing, VirtualFile};
use super::gather::{gather, Kind};
use crate::error::{FsError, FsResult};
use crate::path::Path;
use crate::provider::Scope;
use crate::system::FileSystem;

/// A directory in the merged input tree.
///
/// Identified only by its file system and relative virtual path. Nothing is
/// cached: every query re-resolves against the roots, so handles are cheap to
/// create and throw away. Two handles with the same virtual path on the same
/// file system compare equal.
///
/// Directory existence is a union: a virtual directory exists, and lists a
/// child, if any root does. File content is not mergeable, so for files the
/// earliest root holding a virtual path is the only one exposed.
#[derive(Debug, Clone)]
pub struct VirtualDirectory {
    fs: FileSystem,
    path: Path,
}

impl VirtualDirectory {
    /// Create a handle for a relative virtual path.
    ///
    /// Fails with [`FsError::InvalidArgument`] if `path` is absolute.
    pub fn new(fs: &FileSystem, path: Path) -> FsResult<Self> {
        if path.is_absolute() {
            return Err(FsError::InvalidArgument {
                path: path.to_string(),
                reason: "virtual input paths must be relative",
            });
        }
        Ok(Self {
            fs: fs.clone(),
            path,
        })
    }

    /// The top of the merged tree (`.`).
    pub fn root(fs: &FileSystem) -> Self {
        Self::unchecked(fs, Path::current())
    }

    /// Create a handle for a path already known to be relative.
    pub(crate) fn unchecked(fs: &FileSystem, path: Path) -> Self {
        Self {
            fs: fs.clone(),
            path,
        }
    }

    /// The file system this directory belongs to.
    pub fn file_system(&self) -> &FileSystem {
        &self.fs
    }

    fn at(&self, path: Path) -> Self {
        Self::unchecked(&self.fs, path)
    }

    fn relative<'p>(&self, path: &'p Path, reason: &'static str) -> FsResult<&'p Path> {
        if path.is_absolute() {
            return Err(FsError::InvalidArgument {
                path: path.to_string(),
                reason,
            });
        }
        Ok(path)
    }
}

impl PartialEq for VirtualDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.fs.same(&other.fs)
    }
}

impl Eq for VirtualDirectory {}

impl Entry for VirtualDirectory {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.fs.roots().iter().any(|root| {
            root.provider()
                .directory_exists(&root.locate(&self.path))
        })
    }
}

impl Directory for VirtualDirectory {
    type File = VirtualFile;

    fn parent(&self) -> Option<Self> {
        self.path.parent().map(|parent| self.at(parent))
    }

    fn create(&self) -> FsResult<()> {
        Err(FsError::not_supported("create", &self.path))
    }

    fn delete(&self, _recursive: bool) -> FsResult<()> {
        Err(FsError::not_supported("delete", &self.path))
    }

    fn directories(&self, scope: Scope) -> Vec<Self> {
        gather(self.fs.roots(), &self.path, Kind::Directories, scope)
            .into_iter()
            .map(|found| self.at(found.virtual_path))
            .collect()
    }

    fn files(&self, scope: Scope) -> Vec<VirtualFile> {
        gather(self.fs.roots(), &self.path, Kind::Files, scope)
            .into_iter()
            .map(|found| {
                VirtualFile::new(
                    &self.fs,
                    found.virtual_path,
                    Backing::Resolved {
                        root: found.root,
                        location: found.location,
                    },
                )
            })
            .collect()
    }

    fn file(&self, path: &Path) -> FsResult<VirtualFile> {
        let path = self.relative(path, "file paths must be relative to their directory")?;
        let target = self.path.concat(path);
        if target.is_empty() {
            return Err(FsError::InvalidArgument {
                path: path.to_string(),
                reason: "file path does not name a file",
            });
        }

        let roots = self.fs.roots();
        for (index, root) in roots.iter().enumerate() {
            let location = root.locate(&target);
            let found = root.provider().file_exists(&location);
            tracing::trace!(root = %root, %location, found, "resolving input file");
            if found {
                return Ok(VirtualFile::new(
                    &self.fs,
                    target,
                    Backing::Resolved {
                        root: index,
                        location,
                    },
                ));
            }
        }

        let backing = match roots.first() {
            Some(first) => Backing::Anchored {
                root: 0,
                location: first.locate(&target),
            },
            None => Backing::Unrooted,
        };
        Ok(VirtualFile::new(&self.fs, target, backing))
    }

    fn directory(&self, path: &Path) -> FsResult<Self> {
        let path = self.relative(path, "directory paths must be relative to their parent")?;
        Ok(self.at(self.path.concat(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::contract::File;
    use crate::input::fixture::{self, paths};

    fn dir(fs: &FileSystem, path: &str) -> VirtualDirectory {
        VirtualDirectory::new(fs, Path::new(path).unwrap()).unwrap()
    }

    fn p(raw: &str) -> Path {
        Path::new(raw).unwrap()
    }

    #[test]
    fn test_rejects_absolute_path() {
        let fs = fixture::file_system();
        let err = VirtualDirectory::new(&fs, p("/A")).unwrap_err();
        assert!(matches!(err, FsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_get_directories() {
        let fs = fixture::file_system();
        let cases: [(&str, Scope, &[&str]); 4] = [
            (".", Scope::Recursive, &["a", "a/b", "c", "c/1", "d"]),
            (".", Scope::TopOnly, &["a", "c", "d"]),
            ("a", Scope::Recursive, &["a/b"]),
            ("a", Scope::TopOnly, &["a/b"]),
        ];
        for (path, scope, expected) in cases {
            let found = dir(&fs, path).directories(scope);
            assert_eq!(paths(&found), expected, "{path} {scope:?}");
        }
    }

    #[test]
    fn test_get_directories_dedupes_shared_child() {
        // `c` exists under both roots but appears once.
        let fs = fixture::file_system();
        let top = dir(&fs, ".").directories(Scope::TopOnly);
        assert_eq!(top.iter().filter(|d| d.path() == &p("c")).count(), 1);
    }

    #[test]
    fn test_get_directories_is_order_independent() {
        let forward = fixture::file_system();
        let reversed = fixture::reversed_file_system();
        for scope in [Scope::TopOnly, Scope::Recursive] {
            assert_eq!(
                paths(&dir(&forward, ".").directories(scope)),
                paths(&dir(&reversed, ".").directories(scope))
            );
        }
    }

    #[test]
    fn test_get_directories_order_is_deterministic() {
        let fs = fixture::file_system();
        let listed: Vec<String> = dir(&fs, ".")
            .directories(Scope::Recursive)
            .iter()
            .map(|d| d.path().to_string())
            .collect();
        assert_eq!(listed, ["c", "c/1", "d", "a", "a/b"]);
    }

    #[test]
    fn test_get_files() {
        let fs = fixture::file_system();
        let cases: [(&str, Scope, &[&str]); 4] = [
            (
                ".",
                Scope::Recursive,
                &["baz.txt", "c/1/2.txt", "c/baz.txt", "c/foo.txt", "d/baz.txt"],
            ),
            (".", Scope::TopOnly, &["baz.txt"]),
            ("c", Scope::Recursive, &["c/1/2.txt", "c/baz.txt", "c/foo.txt"]),
            ("c", Scope::TopOnly, &["c/baz.txt", "c/foo.txt"]),
        ];
        for (path, scope, expected) in cases {
            let found = dir(&fs, path).files(scope);
            assert_eq!(paths(&found), expected, "{path} {scope:?}");
        }
    }

    #[test]
    fn test_get_files_first_root_wins() {
        let fs = fixture::file_system_with_shadow();
        let files = dir(&fs, "c").files(Scope::TopOnly);
        assert_eq!(paths(&files), ["c/baz.txt", "c/foo.txt"]);

        let baz = files.iter().find(|f| f.path() == &p("c/baz.txt")).unwrap();
        assert_eq!(baz.read_to_string().unwrap(), "A:/a/b/c/baz.txt");
    }

    #[test]
    fn test_get_files_from_second_root_when_first_lacks_it() {
        let fs = fixture::file_system();
        let files = dir(&fs, "c").files(Scope::TopOnly);
        let baz = files.iter().find(|f| f.path() == &p("c/baz.txt")).unwrap();
        assert_eq!(baz.read_to_string().unwrap(), "B:/foo/c/baz.txt");
    }

    #[test]
    fn test_get_file() {
        let fs = fixture::file_system();
        let cases = [
            (".", "c/foo.txt", Some("A:/a/b/c/foo.txt")),
            (".", "baz.txt", Some("B:/foo/baz.txt")),
            ("c", "foo.txt", Some("A:/a/b/c/foo.txt")),
            ("c", "1/2.txt", Some("A:/a/b/c/1/2.txt")),
            ("c", "1/3.txt", None),
            ("c", "baz.txt", Some("B:/foo/c/baz.txt")),
            ("c", "bar.txt", None),
            ("x/y/z", "bar.txt", None),
        ];
        for (path, file, content) in cases {
            let resolved = dir(&fs, path).file(&p(file)).unwrap();
            assert_eq!(resolved.path(), &p(path).combine(&p(file)).unwrap());
            assert_eq!(resolved.exists(), content.is_some(), "{path} {file}");
            if let Some(content) = content {
                assert_eq!(resolved.read_to_string().unwrap(), content);
            }
        }
    }

    #[test]
    fn test_get_file_prefers_first_root() {
        let fs = fixture::file_system_with_shadow();
        let baz = dir(&fs, "c").file(&p("baz.txt")).unwrap();
        assert!(baz.exists());
        assert_eq!(baz.read_to_string().unwrap(), "A:/a/b/c/baz.txt");
    }

    #[test]
    fn test_missing_file_anchored_at_first_root() {
        let fs = fixture::file_system();
        let missing = dir(&fs, "x/y/z").file(&p("bar.txt")).unwrap();
        assert!(!missing.exists());
        let err = missing.read_bytes().unwrap_err();
        assert_eq!(
            err.to_string(),
            "input file not found: x/y/z/bar.txt (would be at /a/b/x/y/z/bar.txt)"
        );
    }

    #[test]
    fn test_get_file_rejects_absolute() {
        let fs = fixture::file_system();
        let err = dir(&fs, "c").file(&p("/foo.txt")).unwrap_err();
        assert!(matches!(err, FsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_get_file_requires_name() {
        let fs = fixture::file_system();
        let err = dir(&fs, ".").file(&Path::current()).unwrap_err();
        assert!(matches!(err, FsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_parent() {
        let fs = fixture::file_system();
        for (path, expected) in [("a/b", "a"), ("a/b/", "a"), ("a/b/../c", "a")] {
            let parent = dir(&fs, path).parent().unwrap();
            assert_eq!(parent.path().to_string(), expected);
        }
        assert_eq!(dir(&fs, "a").parent().unwrap().path(), &Path::current());
        assert!(dir(&fs, ".").parent().is_none());
    }

    #[test]
    fn test_exists() {
        let fs = fixture::file_system();
        for path in [".", "c", "c/1", "a/b"] {
            assert!(dir(&fs, path).exists(), "{path} should exist");
        }
        for path in ["x", "bar", "baz", "a/b/c", "q/w/e"] {
            assert!(!dir(&fs, path).exists(), "{path} should not exist");
        }
    }

    #[test]
    fn test_exists_with_missing_first_root() {
        let fs = FileSystem::builder()
            .root_path("/a")
            .input_paths(["missing", "alt::/foo"])
            .provider("", fixture::provider_a(false))
            .provider("alt", fixture::provider_b())
            .build()
            .unwrap();
        assert!(dir(&fs, ".").exists());
    }

    #[test]
    fn test_create_and_delete_not_supported() {
        let fs = fixture::file_system();
        for path in [".", "c", "x/y"] {
            let d = dir(&fs, path);
            assert!(matches!(d.create(), Err(FsError::NotSupported { .. })));
            assert!(matches!(d.delete(false), Err(FsError::NotSupported { .. })));
            assert!(matches!(d.delete(true), Err(FsError::NotSupported { .. })));
        }
    }

    #[test]
    fn test_listed_children_resolve_again() {
        let fs = fixture::file_system();
        let top = dir(&fs, ".");
        for file in top.files(Scope::Recursive) {
            let again = top.file(file.path()).unwrap();
            assert!(again.exists(), "{}", file.path());
        }
        for sub in top.directories(Scope::Recursive) {
            let again = VirtualDirectory::new(&fs, sub.path().clone()).unwrap();
            assert!(again.exists(), "{}", sub.path());
            assert_eq!(again, sub);
        }
    }

    #[test]
    fn test_child_directory() {
        let fs = fixture::file_system();
        let c = dir(&fs, ".").directory(&p("c")).unwrap();
        assert_eq!(c, dir(&fs, "c"));
        assert!(dir(&fs, "c").directory(&p("/x")).is_err());
    }

    #[test]
    fn test_no_roots() {
        let fs = FileSystem::builder()
            .input_paths(Vec::<String>::new())
            .build()
            .unwrap();
        let top = dir(&fs, ".");
        assert!(!top.exists());
        assert!(top.directories(Scope::Recursive).is_empty());
        assert!(top.files(Scope::Recursive).is_empty());

        let file = top.file(&p("a.md")).unwrap();
        assert!(!file.exists());
        assert_eq!(
            file.read_bytes().unwrap_err().to_string(),
            "input file not found: a.md"
        );
    }
}
