//! Navigation tree data.
//!
//! A [`NavTree`] is defined once at start-up and never mutated afterwards.
//! It is shared read-only between sidebar sessions (usually behind an `Arc`).

use std::collections::HashSet;

use serde::Serialize;

use crate::TreeError;

/// One entry in the navigation menu.
///
/// Leaves navigate, parents disclose their children. Modelled as a tagged
/// variant so that consumers match exhaustively instead of checking for an
/// empty child list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Navigable entry without children.
    Leaf {
        /// Display text.
        label: String,
        /// Link target path.
        path: String,
    },
    /// Entry with an ordered, non-empty list of children.
    Parent {
        /// Display text.
        label: String,
        /// Path of the section landing page.
        path: String,
        /// Child entries in display order.
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Create a leaf node.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Create a parent node.
    ///
    /// An empty `children` list produces a [`NavNode::Leaf`], so a `Parent`
    /// always has at least one child.
    pub fn parent(
        label: impl Into<String>,
        path: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        if children.is_empty() {
            return Self::leaf(label, path);
        }
        Self::Parent {
            label: label.into(),
            path: path.into(),
            children,
        }
    }

    /// Display text.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Parent { label, .. } => label,
        }
    }

    /// Node path.
    pub fn path(&self) -> &str {
        match self {
            Self::Leaf { path, .. } | Self::Parent { path, .. } => path,
        }
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Whether the node has children.
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }
}

/// Named group of top-level navigation nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Section heading.
    pub title: String,
    /// Display icon identifier (interpreted by the host stylesheet).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Top-level nodes in display order.
    pub items: Vec<NavNode>,
}

impl NavSection {
    /// Create a section without an icon.
    pub fn new(title: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            items,
        }
    }

    /// Set the display icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Static navigation forest grouped into sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavTree {
    sections: Vec<NavSection>,
}

impl NavTree {
    /// Create a tree from sections.
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Pre-order traversal over every node of every section.
    ///
    /// Yields `(node, depth)` pairs, top-level items at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        let stack = self
            .sections
            .iter()
            .rev()
            .flat_map(|section| section.items.iter().rev())
            .map(|node| (node, 0))
            .collect();
        Walk { stack }
    }

    /// Find a node by path.
    pub fn find(&self, path: &str) -> Option<&NavNode> {
        self.walk()
            .map(|(node, _)| node)
            .find(|node| node.path() == path)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Depth of the deepest node (0 when only top-level items exist).
    ///
    /// Returns `None` for a tree without nodes.
    pub fn max_depth(&self) -> Option<usize> {
        self.walk().map(|(_, depth)| depth).max()
    }

    /// Check structural rules of authored content.
    ///
    /// Every section needs at least one item and non-empty paths must be
    /// unique across the whole tree. An empty path marks a non-navigable group
    /// header and may repeat.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Validation` describing the first violation.
    pub fn validate(&self) -> Result<(), TreeError> {
        for section in &self.sections {
            if section.items.is_empty() {
                return Err(TreeError::Validation(format!(
                    "section \"{}\" has no items",
                    section.title
                )));
            }
        }

        let mut seen = HashSet::new();
        for (node, _) in self.walk() {
            if !node.path().is_empty() && !seen.insert(node.path()) {
                return Err(TreeError::Validation(format!(
                    "duplicate path {}",
                    node.path()
                )));
            }
        }

        Ok(())
    }
}

/// Pre-order iterator returned by [`NavTree::walk`].
pub struct Walk<'a> {
    stack: Vec<(&'a NavNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a NavNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> NavTree {
        NavTree::new(vec![
            NavSection::new(
                "Fundamentals",
                vec![
                    NavNode::parent(
                        "Core",
                        "/docs/core",
                        vec![
                            NavNode::leaf("DI", "/docs/core/di"),
                            NavNode::parent(
                                "Modules",
                                "/docs/core/modules",
                                vec![NavNode::leaf("Dynamic", "/docs/core/modules/dynamic")],
                            ),
                        ],
                    ),
                    NavNode::leaf("CLI", "/docs/cli"),
                ],
            )
            .with_icon("book"),
            NavSection::new("Recipes", vec![NavNode::leaf("Auth", "/docs/auth")]),
        ])
    }

    #[test]
    fn test_parent_with_empty_children_is_leaf() {
        let node = NavNode::parent("Core", "/docs/core", Vec::new());

        assert!(!node.is_parent());
        assert_eq!(node, NavNode::leaf("Core", "/docs/core"));
    }

    #[test]
    fn test_accessors_return_fields() {
        let node = NavNode::parent(
            "Core",
            "/docs/core",
            vec![NavNode::leaf("DI", "/docs/core/di")],
        );

        assert_eq!(node.label(), "Core");
        assert_eq!(node.path(), "/docs/core");
        assert_eq!(node.children().len(), 1);
        assert!(node.is_parent());
        assert!(NavNode::leaf("DI", "/docs/core/di").children().is_empty());
    }

    #[test]
    fn test_walk_is_pre_order_across_sections() {
        let tree = sample_tree();

        let visited: Vec<_> = tree
            .walk()
            .map(|(node, depth)| (node.path(), depth))
            .collect();

        assert_eq!(
            visited,
            vec![
                ("/docs/core", 0),
                ("/docs/core/di", 1),
                ("/docs/core/modules", 1),
                ("/docs/core/modules/dynamic", 2),
                ("/docs/cli", 0),
                ("/docs/auth", 0),
            ]
        );
    }

    #[test]
    fn test_find_returns_nested_node() {
        let tree = sample_tree();

        let node = tree.find("/docs/core/modules/dynamic").unwrap();

        assert_eq!(node.label(), "Dynamic");
        assert!(tree.find("/docs/missing").is_none());
    }

    #[test]
    fn test_node_count_and_max_depth() {
        let tree = sample_tree();

        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.max_depth(), Some(2));
        assert_eq!(NavTree::default().max_depth(), None);
    }

    #[test]
    fn test_validate_accepts_sample_tree() {
        assert!(sample_tree().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_path() {
        let tree = NavTree::new(vec![NavSection::new(
            "Docs",
            vec![
                NavNode::parent("Core", "/docs/core", vec![NavNode::leaf("DI", "/docs/di")]),
                NavNode::leaf("DI again", "/docs/di"),
            ],
        )]);

        let err = tree.validate().unwrap_err();

        assert!(matches!(err, TreeError::Validation(_)));
        assert!(err.to_string().contains("duplicate path /docs/di"));
    }

    #[test]
    fn test_validate_rejects_empty_section() {
        let tree = NavTree::new(vec![NavSection::new("Empty", Vec::new())]);

        let err = tree.validate().unwrap_err();

        assert!(err.to_string().contains("\"Empty\" has no items"));
    }

    #[test]
    fn test_validate_accepts_repeated_empty_group_paths() {
        let tree = NavTree::new(vec![NavSection::new(
            "Docs",
            vec![
                NavNode::parent("Basics", "", vec![NavNode::leaf("Intro", "/intro")]),
                NavNode::parent("Advanced", "", vec![NavNode::leaf("Tuning", "/tuning")]),
            ],
        )]);

        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_leaf_serialization_omits_children() {
        let node = NavNode::leaf("DI", "/docs/core/di");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["label"], "DI");
        assert_eq!(json["path"], "/docs/core/di");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_parent_serialization_includes_children() {
        let node = NavNode::parent(
            "Core",
            "/docs/core",
            vec![NavNode::leaf("DI", "/docs/core/di")],
        );

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["label"], "Core");
        assert!(json["children"].is_array());
        assert_eq!(json["children"][0]["path"], "/docs/core/di");
    }

    #[test]
    fn test_section_serialization_skips_missing_icon() {
        let section = NavSection::new("Recipes", vec![NavNode::leaf("Auth", "/docs/auth")]);

        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["title"], "Recipes");
        assert!(json.get("icon").is_none());
    }

    static_assertions::assert_impl_all!(super::NavTree: Send, Sync);
}
