//! Error types for navigation tree loading.

use std::path::PathBuf;

/// Error returned when a navigation tree cannot be loaded.
///
/// Matching, expansion and rendering are total; only loading a tree from
/// authored content can fail.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Navigation file not found.
    #[error("Navigation file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the navigation file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// File extension is not one of `.yaml`, `.yml` or `.toml`.
    #[error("Unsupported navigation file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Tree content violates a structural rule (empty section, duplicate path).
    #[error("Invalid navigation tree: {0}")]
    Validation(String),
}
