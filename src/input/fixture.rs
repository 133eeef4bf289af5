//! Two-provider fixture shared by the merged-view tests.
//!
//! Default provider (rooted at `/a`, input `b`) and `alt` provider (input
//! `/foo`). Each file's content is `<provider>:<location>` so tests can tell
//! which root served a read.

use super::contract::Entry;
use crate::provider::MapProvider;
use crate::system::FileSystem;

fn provider(tag: &str, directories: &[&str], files: &[&str]) -> MapProvider {
    let mut provider = MapProvider::new();
    for dir in directories {
        provider.insert_dir(dir).unwrap();
    }
    for file in files {
        provider.insert(file, format!("{tag}:{file}")).unwrap();
    }
    provider
}

/// The default provider; `shadow` adds `/a/b/c/baz.txt`, hiding `alt`'s copy.
pub(crate) fn provider_a(shadow: bool) -> MapProvider {
    let mut files = vec![
        "/a/b/c/foo.txt",
        "/a/b/c/1/2.txt",
        "/a/b/d/baz.txt",
        "/a/x/bar.txt",
    ];
    if shadow {
        files.push("/a/b/c/baz.txt");
    }
    provider(
        "A",
        &["/a", "/a/b", "/a/b/c", "/a/b/c/1", "/a/b/d", "/a/x", "/a/y", "/a/y/z"],
        &files,
    )
}

pub(crate) fn provider_b() -> MapProvider {
    provider(
        "B",
        &["/foo", "/foo/a", "/foo/a/b", "/foo/c", "/bar"],
        &["/foo/baz.txt", "/foo/c/baz.txt", "/bar/baz.txt"],
    )
}

fn build(inputs: [&str; 2], shadow: bool) -> FileSystem {
    FileSystem::builder()
        .root_path("/a")
        .input_paths(inputs)
        .provider("", provider_a(shadow))
        .provider("alt", provider_b())
        .build()
        .unwrap()
}

/// Inputs `["b", "alt::/foo"]` without the shadowing file.
pub(crate) fn file_system() -> FileSystem {
    build(["b", "alt::/foo"], false)
}

/// Inputs `["b", "alt::/foo"]` where both roots hold `c/baz.txt`.
pub(crate) fn file_system_with_shadow() -> FileSystem {
    build(["b", "alt::/foo"], true)
}

/// Same providers with the roots declared in the opposite order.
pub(crate) fn reversed_file_system() -> FileSystem {
    build(["alt::/foo", "b"], false)
}

/// Sorted virtual paths of a set of entries.
pub(crate) fn paths<E: Entry>(entries: &[E]) -> Vec<String> {
    let mut paths: Vec<String> = entries.iter().map(|e| e.path().to_string()).collect();
    paths.sort();
    paths
}
