//! # input-vfs
//!
//! A merged, read-only virtual input file system for static site builds.
//!
//! A build reads its inputs from several places at once: the site's own
//! `input` folder, a theme, generated content. Each place is a *root*: a
//! `(scheme, absolute prefix)` pair backed by a [`FileProvider`]. This crate
//! presents all roots as one logical tree:
//!
//! - **Directories** are a union: a directory exists if any root has it
//! - **Files** are not mergeable: the earliest declared root wins
//! - **Paths** are always virtual: callers never see which root answered
//! - **Mutation** is rejected: the merged view has no single write target
//!
//! ## Quick Start
//!
//! ```
//! use input_vfs::prelude::*;
//!
//! let mut site = MapProvider::new();
//! site.insert("/site/input/index.md", "# Home").unwrap();
//! let mut theme = MapProvider::new();
//! theme.insert("/index.md", "# Theme home").unwrap();
//! theme.insert("/layout.html", "<main></main>").unwrap();
//!
//! let fs = FileSystem::builder()
//!     .root_path("/site")
//!     .input_paths(["input", "theme::/"])
//!     .provider("", site)
//!     .provider("theme", theme)
//!     .build()
//!     .unwrap();
//!
//! // The site's own copy shadows the theme's.
//! let index = fs.get_input_file("index.md").unwrap();
//! assert_eq!(index.read_to_string().unwrap(), "# Home");
//!
//! let names: Vec<String> = fs
//!     .input_directory()
//!     .files(Scope::TopOnly)
//!     .iter()
//!     .map(|f| f.path().to_string())
//!     .collect();
//! assert_eq!(names, ["index.md", "layout.html"]);
//! ```
//!
//! ## Modules
//!
//! - [`path`]: Normalized paths and `scheme::` parsing
//! - [`provider`]: The backing-store contract and an in-memory provider
//! - [`system`]: Root resolution, the frozen [`FileSystem`], read tracking
//! - [`input`]: [`VirtualDirectory`] and [`VirtualFile`]
//! - [`config`]: Input configuration (builder and JSON)
//!
//! ## Features
//!
//! - `parallel` (default): query roots concurrently on the rayon pool while
//!   enumerating. Precedence is applied after every root has answered, so
//!   results are identical with or without it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod path;
pub mod provider;
pub mod system;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use input_vfs::prelude::*;
/// ```
///
/// This includes the directory/file traits, which are needed to call
/// `files()`, `file()`, `exists()` and friends on the handles.
pub mod prelude {
    // Contract
    pub use crate::{Directory, Entry, File};

    // Handles
    pub use crate::{FileSystem, FileSystemBuilder, VirtualDirectory, VirtualFile};

    // Providers
    pub use crate::{FileProvider, MapProvider, Scope};

    // Paths and errors
    pub use crate::{FsError, FsResult, Path};
}

// =============================================================================
// Merged View
// =============================================================================

pub use input::{Directory, Entry, File, VirtualDirectory, VirtualFile};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{ConfigBuilder, FileSystemConfig};
pub use error::{FsError, FsResult};
pub use path::{Path, PathError, ProviderPath};
pub use provider::{FileProvider, MapProvider, Scope};
pub use system::{AccessLog, FileSystem, FileSystemBuilder, Root};
