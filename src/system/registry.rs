//! The provider registry: an immutable snapshot of roots and providers.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::access::AccessLog;
use super::root::{resolve_roots, Root};
use crate::config::FileSystemConfig;
use crate::error::{FsError, FsResult};
use crate::input::{Directory, VirtualDirectory, VirtualFile};
use crate::path::{Path, ProviderPath};
use crate::provider::FileProvider;

/// Builder for [`FileSystem`].
///
/// All configuration happens here. Once [`build`](Self::build) succeeds the
/// roots and providers are frozen for the rest of the build.
///
/// # Example
///
/// ```
/// use input_vfs::{FileSystemBuilder, MapProvider};
///
/// let mut site = MapProvider::new();
/// site.insert("/site/input/index.md", "# Home").unwrap();
/// let mut theme = MapProvider::new();
/// theme.insert("/layouts/base.html", "<html></html>").unwrap();
///
/// let fs = FileSystemBuilder::new()
///     .root_path("/site")
///     .input_paths(["input", "theme::/"])
///     .provider("", site)
///     .provider("theme", theme)
///     .build()
///     .unwrap();
///
/// assert_eq!(fs.roots().len(), 2);
/// ```
pub struct FileSystemBuilder {
    config: FileSystemConfig,
    providers: FxHashMap<String, Arc<dyn FileProvider>>,
}

impl Default for FileSystemBuilder {
    fn default() -> Self {
        Self::from_config(FileSystemConfig::default())
    }
}

impl FileSystemBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an existing configuration.
    pub fn from_config(config: FileSystemConfig) -> Self {
        Self {
            config,
            providers: FxHashMap::default(),
        }
    }

    /// Set the default absolute root that bare input paths are relative to.
    pub fn root_path(mut self, root: impl Into<String>) -> Self {
        self.config.root_path = root.into();
        self
    }

    /// Replace the input path entries.
    pub fn input_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.input_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Append one input path entry (lowest precedence so far).
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.config.input_paths.push(path.into());
        self
    }

    /// Register a provider under `scheme` (empty for the default provider).
    ///
    /// Registering the same scheme twice replaces the earlier provider.
    pub fn provider(self, scheme: impl Into<String>, provider: impl FileProvider + 'static) -> Self {
        self.provider_arc(scheme, Arc::new(provider))
    }

    /// Register a provider that is already wrapped in an `Arc`.
    pub fn provider_arc(mut self, scheme: impl Into<String>, provider: Arc<dyn FileProvider>) -> Self {
        self.providers.insert(scheme.into(), provider);
        self
    }

    /// Validate the configuration and freeze it.
    ///
    /// Fails if the default root is not absolute, an input entry cannot be
    /// parsed, or an entry references an unregistered scheme.
    pub fn build(self) -> FsResult<FileSystem> {
        let default_root = Path::new(&self.config.root_path)?;
        if !default_root.is_absolute() {
            return Err(FsError::Configuration(format!(
                "root path '{}' must be absolute",
                self.config.root_path
            )));
        }

        let roots = resolve_roots(&default_root, &self.config.input_paths, &self.providers)?;
        tracing::debug!(
            root = %default_root,
            count = roots.len(),
            "resolved input roots"
        );
        for (index, root) in roots.iter().enumerate() {
            tracing::trace!(index, root = %root, "input root");
        }

        Ok(FileSystem {
            inner: Arc::new(Inner {
                default_root,
                input_paths: self.config.input_paths,
                providers: self.providers,
                roots,
                access: AccessLog::new(),
            }),
        })
    }
}

struct Inner {
    default_root: Path,
    input_paths: Vec<String>,
    providers: FxHashMap<String, Arc<dyn FileProvider>>,
    roots: Vec<Root>,
    access: AccessLog,
}

/// The merged input file system.
///
/// Cheap to clone and safe to share across worker threads: every clone views
/// the same frozen roots, providers, and access log.
#[derive(Clone)]
pub struct FileSystem {
    inner: Arc<Inner>,
}

impl FileSystem {
    /// Start configuring a new file system.
    pub fn builder() -> FileSystemBuilder {
        FileSystemBuilder::new()
    }

    /// The default absolute root.
    pub fn default_root(&self) -> &Path {
        &self.inner.default_root
    }

    /// The input path entries as configured.
    pub fn input_paths(&self) -> &[String] {
        &self.inner.input_paths
    }

    /// Roots in precedence order.
    pub fn roots(&self) -> &[Root] {
        &self.inner.roots
    }

    /// The provider registered under `scheme`.
    pub fn provider(&self, scheme: &str) -> Option<&Arc<dyn FileProvider>> {
        self.inner.providers.get(scheme)
    }

    /// The top of the merged input tree (`.`).
    pub fn input_directory(&self) -> VirtualDirectory {
        VirtualDirectory::root(self)
    }

    /// A merged input directory by relative virtual path.
    pub fn get_input_directory(&self, path: &str) -> FsResult<VirtualDirectory> {
        VirtualDirectory::new(self, Path::new(path)?)
    }

    /// Resolve an input file by relative virtual path.
    pub fn get_input_file(&self, path: &str) -> FsResult<VirtualFile> {
        self.input_directory().file(&Path::new(path)?)
    }

    /// The root that contains a provider-side location.
    ///
    /// The longest matching prefix wins; equal prefixes fall back to
    /// precedence order.
    pub fn containing_root(&self, location: &ProviderPath) -> Option<&Root> {
        self.inner
            .roots
            .iter()
            .filter(|root| {
                root.scheme() == location.scheme && location.path.starts_with(root.prefix())
            })
            .fold(None, |best: Option<&Root>, root| match best {
                Some(best) if best.prefix().depth() >= root.prefix().depth() => Some(best),
                _ => Some(root),
            })
    }

    /// The virtual path a provider-side location maps to, if any root contains it.
    pub fn virtual_path(&self, location: &ProviderPath) -> Option<Path> {
        let root = self.containing_root(location)?;
        location.path.strip_prefix(root.prefix())
    }

    /// Virtual paths of every input file read since the last reset, sorted.
    pub fn accessed_files(&self) -> Vec<Path> {
        self.inner.access.snapshot()
    }

    /// Forget every recorded input read.
    pub fn reset_access_log(&self) {
        self.inner.access.clear();
    }

    pub(crate) fn access(&self) -> &AccessLog {
        &self.inner.access
    }

    /// Whether two handles view the same frozen file system.
    pub(crate) fn same(&self, other: &FileSystem) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystem")
            .field("default_root", &self.inner.default_root)
            .field("roots", &self.inner.roots)
            .finish()
    }
}
