//! Configuration for the input file system.
//!
//! This module describes *where* inputs live: a default absolute root and an
//! ordered list of input paths. Use [`ConfigBuilder`] in code, or load a JSON
//! document with [`FileSystemConfig::from_json`]:
//!
//! ```json
//! { "root": "/site", "inputs": ["input", "theme::/"] }
//! ```
//!
//! Providers are registered separately on
//! [`FileSystemBuilder`](crate::FileSystemBuilder).

use serde_json::Value;

use crate::error::{FsError, FsResult};

/// Input path used when none is configured.
pub const DEFAULT_INPUT_PATH: &str = "input";

/// Root path used when none is configured.
pub const DEFAULT_ROOT_PATH: &str = "/";

/// Where the build reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemConfig {
    /// Absolute root that bare input paths are relative to.
    pub root_path: String,
    /// Input path entries in precedence order.
    /// Each is `"relative/path"` or `"scheme::/absolute/path"`.
    pub input_paths: Vec<String>,
}

impl Default for FileSystemConfig {
    fn default() -> Self {
        Self {
            root_path: DEFAULT_ROOT_PATH.to_string(),
            input_paths: vec![DEFAULT_INPUT_PATH.to_string()],
        }
    }
}

impl FileSystemConfig {
    /// Parse a JSON configuration document.
    ///
    /// Recognized keys are `root` (string) and `inputs` (array of strings).
    /// Missing keys keep their defaults; other keys are ignored.
    pub fn from_json(json: &str) -> FsResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| FsError::Configuration("expected a JSON object".to_string()))?;

        let mut config = Self::default();
        if let Some(root) = object.get("root") {
            config.root_path = root
                .as_str()
                .ok_or_else(|| FsError::Configuration("'root' must be a string".to_string()))?
                .to_string();
        }
        if let Some(inputs) = object.get("inputs") {
            config.input_paths = inputs
                .as_array()
                .ok_or_else(|| FsError::Configuration("'inputs' must be an array".to_string()))?
                .iter()
                .map(|entry| {
                    entry.as_str().map(str::to_string).ok_or_else(|| {
                        FsError::Configuration(format!("input path {entry} is not a string"))
                    })
                })
                .collect::<FsResult<_>>()?;
        }
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> FsResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root_path: Option<String>,
    input_paths: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default absolute root.
    ///
    /// Default: `"/"`
    pub fn root_path(mut self, root: impl Into<String>) -> Self {
        self.root_path = Some(root.into());
        self
    }

    /// Append an input path entry. The first call replaces the default list.
    ///
    /// # Example
    ///
    /// ```
    /// use input_vfs::config::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new()
    ///     .root_path("/site")
    ///     .input_path("input")
    ///     .input_path("theme::/")
    ///     .build();
    /// assert_eq!(config.input_paths, ["input", "theme::/"]);
    /// ```
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_paths.get_or_insert_with(Vec::new).push(path.into());
        self
    }

    /// Replace the input path entries.
    pub fn input_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration, filling unset values with defaults.
    pub fn build(self) -> FileSystemConfig {
        let defaults = FileSystemConfig::default();
        FileSystemConfig {
            root_path: self.root_path.unwrap_or(defaults.root_path),
            input_paths: self.input_paths.unwrap_or(defaults.input_paths),
        }
    }
}
