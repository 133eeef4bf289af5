//! Normalized, segment-based paths.
//!
//! A [`Path`] is either absolute (provider-side locations such as `/site/input`)
//! or relative (virtual paths such as `posts/2024`). Normalization happens once,
//! at construction:
//!
//! - `\` and `/` are both accepted as separators, `/` is canonical
//! - repeated and trailing separators collapse
//! - `.` segments vanish and `..` pops the previous segment
//!
//! A relative path whose `..` would climb above its own root is rejected. An
//! absolute path clamps at `/` instead.
//!
//! Scheme-qualified strings (`theme::/assets`) are split by [`Path::parse`] into
//! a [`ProviderPath`] so nothing downstream re-parses raw strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Token separating a scheme name from the path it qualifies.
pub const SCHEME_DELIMITER: &str = "::";

/// Rendering of a relative path with no segments.
const CURRENT: &str = ".";

/// Error raised while building or combining paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A `..` segment would climb above a relative path's root.
    #[error("path '{0}' escapes its root")]
    EscapesRoot(String),

    /// The right-hand side of a combine was absolute.
    #[error("cannot append absolute path '{0}'")]
    AbsoluteAppend(String),
}

// =============================================================================
// Path
// =============================================================================

/// An immutable, normalized path.
///
/// Equality, ordering and hashing are by segment sequence (then absoluteness),
/// so `a/./b/` and `a/b` are the same path.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<String>,
    absolute: bool,
}

impl Path {
    /// Parse and normalize a path string.
    pub fn new(raw: &str) -> Result<Self, PathError> {
        let absolute = raw.starts_with(['/', '\\']);
        let mut segments: Vec<String> = Vec::new();

        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() && !absolute {
                        return Err(PathError::EscapesRoot(raw.to_string()));
                    }
                }
                name => segments.push(name.to_string()),
            }
        }

        Ok(Self { segments, absolute })
    }

    /// The relative "current directory" path (`.`).
    pub const fn current() -> Self {
        Self {
            segments: Vec::new(),
            absolute: false,
        }
    }

    /// The absolute root path (`/`).
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
            absolute: true,
        }
    }

    /// Split an optional leading `scheme::` token off `raw` and normalize the rest.
    ///
    /// No token means the default (empty) scheme.
    ///
    /// ```
    /// use input_vfs::Path;
    ///
    /// let parsed = Path::parse("theme::/assets/css").unwrap();
    /// assert_eq!(parsed.scheme, "theme");
    /// assert_eq!(parsed.path.to_string(), "/assets/css");
    /// ```
    pub fn parse(raw: &str) -> Result<ProviderPath, PathError> {
        let (scheme, rest) = match raw.split_once(SCHEME_DELIMITER) {
            Some((scheme, rest)) if !scheme.contains(['/', '\\']) => (scheme, rest),
            _ => ("", raw),
        };
        Ok(ProviderPath {
            scheme: scheme.to_string(),
            path: Self::new(rest)?,
        })
    }

    /// Whether the path starts at a root marker.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the path is relative.
    #[inline]
    pub fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// Whether the path has no segments (`.` or `/`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The normalized segments.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The last segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path with its last segment removed, or `None` if it has no segments.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
            absolute: self.absolute,
        })
    }

    /// Append a relative path to this one.
    ///
    /// Fails if `relative` is absolute. The result keeps `self`'s absoluteness.
    pub fn combine(&self, relative: &Path) -> Result<Self, PathError> {
        if relative.absolute {
            return Err(PathError::AbsoluteAppend(relative.to_string()));
        }
        Ok(self.concat(relative))
    }

    /// Append `other`'s segments regardless of its absoluteness.
    pub(crate) fn concat(&self, other: &Path) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Self {
            segments,
            absolute: self.absolute,
        }
    }

    /// Append a raw relative path string.
    pub fn join(&self, relative: &str) -> Result<Self, PathError> {
        self.combine(&Self::new(relative)?)
    }

    /// Whether `prefix` is a segment-wise prefix of this path.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.absolute == prefix.absolute && self.segments.starts_with(&prefix.segments)
    }

    /// The relative remainder of this path below `prefix`.
    ///
    /// `/a/b/c` stripped of `/a` is `b/c`; stripping a path from itself yields `.`.
    pub fn strip_prefix(&self, prefix: &Path) -> Option<Self> {
        if !self.starts_with(prefix) {
            return None;
        }
        Some(Self {
            segments: self.segments[prefix.segments.len()..].to_vec(),
            absolute: false,
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.absolute, self.segments.is_empty()) {
            (true, _) => write!(f, "/{}", self.segments.join("/")),
            (false, true) => f.write_str(CURRENT),
            (false, false) => f.write_str(&self.segments.join("/")),
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// =============================================================================
// ProviderPath
// =============================================================================

/// A path qualified by the scheme of the provider it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderPath {
    /// Provider scheme; empty for the default provider.
    pub scheme: String,
    /// Path inside that provider's namespace.
    pub path: Path,
}

impl ProviderPath {
    /// Whether the scheme is the default (empty) one.
    pub fn is_default_scheme(&self) -> bool {
        self.scheme.is_empty()
    }
}

impl fmt::Display for ProviderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}{SCHEME_DELIMITER}{}", self.scheme, self.path)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
