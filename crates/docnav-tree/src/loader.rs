//! Loading navigation trees from YAML or TOML files.
//!
//! ```yaml
//! sections:
//!   - title: Fundamentals
//!     icon: book
//!     items:
//!       - label: Core
//!         path: /docs/core
//!         children:
//!           - label: DI
//!             path: /docs/core/di
//! ```
//!
//! A node with an empty or absent `children` list becomes a leaf.

use std::path::Path;

use serde::Deserialize;

use crate::{NavNode, NavSection, NavTree, TreeError};

/// Navigation file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeFormat {
    /// `.yaml` or `.yml`.
    Yaml,
    /// `.toml`.
    Toml,
}

impl TreeFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, TreeError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(TreeError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Deserialize)]
struct RawTree {
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Deserialize)]
struct RawSection {
    title: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    items: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    label: String,
    path: String,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl From<RawNode> for NavNode {
    fn from(raw: RawNode) -> Self {
        let children = raw.children.into_iter().map(NavNode::from).collect();
        NavNode::parent(raw.label, raw.path, children)
    }
}

impl From<RawSection> for NavSection {
    fn from(raw: RawSection) -> Self {
        NavSection {
            title: raw.title,
            icon: raw.icon,
            items: raw.items.into_iter().map(NavNode::from).collect(),
        }
    }
}

/// Parse and validate a navigation tree.
///
/// # Errors
///
/// Returns an error if the content is malformed or fails [`NavTree::validate`].
pub fn parse_tree(content: &str, format: TreeFormat) -> Result<NavTree, TreeError> {
    let raw: RawTree = match format {
        TreeFormat::Yaml => serde_yaml::from_str(content)?,
        TreeFormat::Toml => toml::from_str(content)?,
    };

    let tree = NavTree::new(raw.sections.into_iter().map(NavSection::from).collect());
    tree.validate()?;
    Ok(tree)
}

/// Load and validate a navigation tree from a file.
///
/// # Errors
///
/// Returns an error if the file is missing, has an unsupported extension,
/// cannot be parsed, or fails validation.
pub fn load_tree(path: &Path) -> Result<NavTree, TreeError> {
    if !path.exists() {
        return Err(TreeError::NotFound(path.to_path_buf()));
    }
    let format = TreeFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let tree = parse_tree(&content, format)?;

    tracing::info!(
        path = %path.display(),
        sections = tree.sections().len(),
        nodes = tree.node_count(),
        "Loaded navigation tree"
    );

    Ok(tree)
}
