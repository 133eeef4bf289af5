//! Error type for the merged input file system.

use thiserror::Error;

use crate::path::PathError;

/// Result alias used throughout the crate.
pub type FsResult<T> = Result<T, FsError>;

/// Errors raised by the merged input file system.
///
/// "Not found" during lookups is never an error: it is reported as
/// `exists() == false` on the returned handle. [`FsError::NotFound`] only
/// appears when reading a handle that does not exist.
///
/// # Example
///
/// ```ignore
/// match file.read_to_string() {
///     Ok(text) => { /* render */ }
///     Err(FsError::NotFound { path, anchor }) => {
///         eprintln!("missing input {path} (expected at {anchor:?})");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum FsError {
    /// A virtual path argument violated the relative-path contract.
    #[error("invalid virtual path '{path}': {reason}")]
    InvalidArgument {
        /// The offending path as given.
        path: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A mutation was attempted on the merged view.
    #[error("{operation} is not supported on the merged input directory '{path}'")]
    NotSupported {
        /// The attempted operation.
        operation: &'static str,
        /// Virtual path of the directory.
        path: String,
    },

    /// An input root references a scheme with no registered provider.
    #[error("input path '{entry}' references unregistered provider scheme '{scheme}'")]
    UnknownScheme {
        /// The missing scheme.
        scheme: String,
        /// The input path entry that referenced it.
        entry: String,
    },

    /// Any other misconfiguration detected while building the file system.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A read was attempted on a file that does not exist in any root.
    #[error("input file not found: {path}{}", anchor_suffix(.anchor))]
    NotFound {
        /// Virtual path of the file.
        path: String,
        /// Where the file would live in the highest-precedence root, if any root exists.
        anchor: Option<String>,
    },

    /// Path normalization failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A provider failed while reading content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document was not valid JSON.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

fn anchor_suffix(anchor: &Option<String>) -> String {
    anchor
        .as_deref()
        .map(|a| format!(" (would be at {a})"))
        .unwrap_or_default()
}

impl FsError {
    pub(crate) fn not_supported(operation: &'static str, path: impl ToString) -> Self {
        Self::NotSupported {
            operation,
            path: path.to_string(),
        }
    }

    /// Whether this error indicates a misconfigured system rather than a bad call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownScheme { .. } | Self::Configuration(_) | Self::Json(_)
        )
    }
}
