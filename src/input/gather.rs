//! Per-root fan-out and precedence merge.
//!
//! ```text
//! roots:   [R0, R1, R2]          (declaration order)
//!            │   │   │           queried concurrently with `parallel`
//!            ▼   ▼   ▼
//! answers: [A0, A1, A2]          (collected back in declaration order)
//!            └───┴───┴──► merge  (sequential, first root wins)
//! ```

use rustc_hash::FxHashSet;

use crate::path::Path;
use crate::provider::Scope;
use crate::system::Root;

/// Kind of children to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Directories,
    Files,
}

/// A child found under one root.
#[derive(Debug, Clone)]
pub(crate) struct Found {
    /// Path in the merged tree.
    pub virtual_path: Path,
    /// Index of the root that holds it.
    pub root: usize,
    /// Provider-side location.
    pub location: Path,
}

/// Run `query` against every root, returning answers in declaration order.
#[cfg(feature = "parallel")]
pub(crate) fn per_root<T, F>(roots: &[Root], query: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &Root) -> T + Send + Sync,
{
    use rayon::prelude::*;

    roots
        .par_iter()
        .enumerate()
        .map(|(index, root)| query(index, root))
        .collect()
}

/// Run `query` against every root, returning answers in declaration order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn per_root<T, F>(roots: &[Root], query: F) -> Vec<T>
where
    F: Fn(usize, &Root) -> T,
{
    roots
        .iter()
        .enumerate()
        .map(|(index, root)| query(index, root))
        .collect()
}

/// Enumerate the children of virtual directory `dir` under a single root.
pub(crate) fn children(index: usize, root: &Root, dir: &Path, kind: Kind, scope: Scope) -> Vec<Found> {
    let base = root.locate(dir);
    let provider = root.provider();
    if !provider.directory_exists(&base) {
        tracing::trace!(root = %root, location = %base, "input root has no such directory");
        return Vec::new();
    }

    let listed = match kind {
        Kind::Directories => provider.list_directories(&base, scope),
        Kind::Files => provider.list_files(&base, scope),
    };

    listed
        .into_iter()
        .filter_map(|location| match location.strip_prefix(&base) {
            Some(relative) if !relative.is_empty() => Some(Found {
                virtual_path: dir.concat(&relative),
                root: index,
                location,
            }),
            _ => {
                tracing::warn!(
                    root = %root,
                    directory = %base,
                    %location,
                    "provider listed a path outside the queried directory, skipping"
                );
                None
            }
        })
        .collect()
}

/// Merge per-root answers, keeping the first occurrence of each virtual path.
///
/// `answers` must be in root declaration order.
pub(crate) fn merge(answers: Vec<Vec<Found>>) -> Vec<Found> {
    let mut seen: FxHashSet<Path> = FxHashSet::default();
    answers
        .into_iter()
        .flatten()
        .filter(|found| seen.insert(found.virtual_path.clone()))
        .collect()
}

/// Enumerate and merge the children of `dir` across all roots.
pub(crate) fn gather(roots: &[Root], dir: &Path, kind: Kind, scope: Scope) -> Vec<Found> {
    merge(per_root(roots, |index, root| {
        children(index, root, dir, kind, scope)
    }))
}
