//! Provider registry, root resolution and read tracking.

mod access;
mod registry;
mod root;

pub use access::AccessLog;
pub use registry::{FileSystem, FileSystemBuilder};
pub use root::{resolve_roots, Root};
