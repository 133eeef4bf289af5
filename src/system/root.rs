//! Input roots and their resolution from configuration.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{FsError, FsResult};
use crate::path::{Path, ProviderPath};
use crate::provider::FileProvider;

/// One physical location merged into the input tree.
///
/// A root pairs a provider scheme with an absolute prefix in that provider's
/// namespace. Roots are ordered; earlier roots take precedence.
#[derive(Clone)]
pub struct Root {
    scheme: String,
    prefix: Path,
    provider: Arc<dyn FileProvider>,
}

impl Root {
    /// Provider scheme (empty for the default provider).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Absolute prefix inside the provider.
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// The provider backing this root.
    pub fn provider(&self) -> &Arc<dyn FileProvider> {
        &self.provider
    }

    /// Provider-side location of a virtual path under this root.
    #[inline]
    pub(crate) fn locate(&self, virtual_path: &Path) -> Path {
        self.prefix.concat(virtual_path)
    }

    /// Scheme-qualified form of a location under this root.
    pub(crate) fn qualify(&self, location: Path) -> ProviderPath {
        ProviderPath {
            scheme: self.scheme.clone(),
            path: location,
        }
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root")
            .field("scheme", &self.scheme)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualify(self.prefix.clone()))
    }
}

/// Compute the ordered roots for a set of input path entries.
///
/// Each entry is either a bare path, combined with `default_root` under the
/// default scheme, or `scheme::/absolute/path`. Entries keep their declared
/// order. A bare absolute entry is used as-is under the default scheme.
///
/// Fails if an entry references a scheme with no provider, or if a
/// scheme-qualified entry is relative.
pub fn resolve_roots(
    default_root: &Path,
    input_paths: &[String],
    providers: &FxHashMap<String, Arc<dyn FileProvider>>,
) -> FsResult<Vec<Root>> {
    input_paths
        .iter()
        .map(|entry| -> FsResult<Root> {
            let parsed = Path::parse(entry)?;
            let prefix = match (parsed.is_default_scheme(), parsed.path.is_absolute()) {
                (_, true) => parsed.path,
                (true, false) => default_root.concat(&parsed.path),
                (false, false) => {
                    return Err(FsError::Configuration(format!(
                        "input path '{entry}' names a provider scheme but is not absolute"
                    )));
                }
            };
            let provider = providers
                .get(&parsed.scheme)
                .cloned()
                .ok_or_else(|| FsError::UnknownScheme {
                    scheme: parsed.scheme.clone(),
                    entry: entry.clone(),
                })?;
            Ok(Root {
                scheme: parsed.scheme,
                prefix,
                provider,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MapProvider;

    fn providers(schemes: &[&str]) -> FxHashMap<String, Arc<dyn FileProvider>> {
        schemes
            .iter()
            .map(|s| {
                let provider: Arc<dyn FileProvider> = Arc::new(MapProvider::new());
                (s.to_string(), provider)
            })
            .collect()
    }

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_in_declared_order() {
        let root = Path::new("/a").unwrap();
        let roots =
            resolve_roots(&root, &entries(&["b", "alt::/foo"]), &providers(&["", "alt"])).unwrap();

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].scheme(), "");
        assert_eq!(roots[0].prefix().to_string(), "/a/b");
        assert_eq!(roots[1].scheme(), "alt");
        assert_eq!(roots[1].prefix().to_string(), "/foo");
        assert_eq!(roots[1].to_string(), "alt::/foo");
    }

    #[test]
    fn test_bare_absolute_entry_kept() {
        let root = Path::new("/a").unwrap();
        let roots = resolve_roots(&root, &entries(&["/shared/theme"]), &providers(&[""])).unwrap();
        assert_eq!(roots[0].prefix().to_string(), "/shared/theme");
    }

    #[test]
    fn test_unknown_scheme_is_configuration_error() {
        let root = Path::new("/a").unwrap();
        let err = resolve_roots(&root, &entries(&["b", "alt::/foo"]), &providers(&[""]))
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, FsError::UnknownScheme { ref scheme, .. } if scheme == "alt"));
    }

    #[test]
    fn test_relative_scheme_entry_rejected() {
        let root = Path::new("/a").unwrap();
        let err = resolve_roots(&root, &entries(&["alt::foo"]), &providers(&["alt"])).unwrap_err();
        assert!(matches!(err, FsError::Configuration(_)));
    }

    #[test]
    fn test_escaping_entry_rejected() {
        let root = Path::new("/a").unwrap();
        let err = resolve_roots(&root, &entries(&["../b"]), &providers(&[""])).unwrap_err();
        assert!(matches!(err, FsError::Path(_)));
    }
}
