//! The merged input view consumed by pipeline code.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 VirtualDirectory("c")                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  exists()        any root has <prefix>/c                   │
//! │  directories()   union of every root's children            │
//! │  files()         every root's children, first root wins    │
//! │  file("x.md")    first root holding <prefix>/c/x.md,       │
//! │                  else a missing handle anchored at root 0  │
//! │  create/delete   NotSupported                              │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod contract;
mod directory;
mod file;
mod gather;

#[cfg(test)]
pub(crate) mod fixture;

pub use contract::{Directory, Entry, File};
pub use directory::VirtualDirectory;
pub use file::VirtualFile;
