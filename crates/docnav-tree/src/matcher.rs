//! Classification of node paths against the current location.
//!
//! All functions are pure and total over arbitrary strings.
//!
//! Prefix matching defaults to [`PrefixMode::Lexicographic`]: `/docs/auth`
//! is an ancestor of `/docs/authorization` even though the latter is a
//! different resource. [`PrefixMode::Segment`] requires the prefix to end at
//! a `/` boundary instead.
//!
//! # Example
//!
//! ```
//! use docnav_tree::matcher::{is_ancestor, is_exact_match};
//!
//! assert!(is_exact_match("/docs/core/di", "/docs/core/di"));
//! assert!(is_ancestor("/docs/core", "/docs/core/di"));
//! assert!(!is_ancestor("/docs/core/di", "/docs/core/di"));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NavTree;

/// How a node path is compared as a prefix of the location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// Plain string prefix.
    #[default]
    Lexicographic,
    /// String prefix that ends at a `/` boundary of the location.
    Segment,
}

impl PrefixMode {
    /// Whether `node_path` is a (non-strict) prefix of `location`.
    pub fn is_prefix(self, node_path: &str, location: &str) -> bool {
        let Some(rest) = location.strip_prefix(node_path) else {
            return false;
        };
        match self {
            Self::Lexicographic => true,
            Self::Segment => rest.is_empty() || rest.starts_with('/') || node_path.ends_with('/'),
        }
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexicographic => f.write_str("lexicographic"),
            Self::Segment => f.write_str("segment"),
        }
    }
}

impl FromStr for PrefixMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicographic" => Ok(Self::Lexicographic),
            "segment" => Ok(Self::Segment),
            other => Err(format!(
                "unknown match mode \"{other}\" (expected \"lexicographic\" or \"segment\")"
            )),
        }
    }
}

/// Relationship of a node to the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveState {
    /// Node path equals the location.
    Exact,
    /// Node path is a strict prefix of the location.
    Ancestor,
    /// Neither.
    Inactive,
}

impl ActiveState {
    /// Whether the node is exact or ancestor active.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Path classifier parameterized by [`PrefixMode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathMatcher {
    mode: PrefixMode,
}

impl PathMatcher {
    /// Create a matcher with the given prefix mode.
    pub fn new(mode: PrefixMode) -> Self {
        Self { mode }
    }

    /// Prefix mode in use.
    pub fn mode(self) -> PrefixMode {
        self.mode
    }

    /// True iff both paths are identical.
    ///
    /// Exact matching does not depend on the prefix mode.
    #[allow(clippy::unused_self)] // Method form mirrors `is_ancestor`
    pub fn is_exact_match(self, node_path: &str, location: &str) -> bool {
        node_path == location
    }

    /// True iff `node_path` is a prefix of `location` and differs from it.
    ///
    /// A node is never both exact and ancestor.
    pub fn is_ancestor(self, node_path: &str, location: &str) -> bool {
        node_path != location && self.mode.is_prefix(node_path, location)
    }

    /// Classify a parent node path.
    pub fn classify(self, node_path: &str, location: &str) -> ActiveState {
        if self.is_exact_match(node_path, location) {
            ActiveState::Exact
        } else if self.is_ancestor(node_path, location) {
            ActiveState::Ancestor
        } else {
            ActiveState::Inactive
        }
    }

    /// Paths of every parent node that must be expanded to reveal `location`.
    ///
    /// Walks every branch of the tree (no short-circuit) and keeps parent
    /// nodes whose path is a non-strict prefix of `location`. Leaves never
    /// need an expansion entry.
    pub fn collect_expand_targets(self, tree: &NavTree, location: &str) -> BTreeSet<String> {
        tree.walk()
            .map(|(node, _)| node)
            .filter(|node| node.is_parent() && self.mode.is_prefix(node.path(), location))
            .map(|node| node.path().to_owned())
            .collect()
    }
}

/// [`PathMatcher::is_exact_match`] with the default matcher.
pub fn is_exact_match(node_path: &str, location: &str) -> bool {
    PathMatcher::default().is_exact_match(node_path, location)
}

/// [`PathMatcher::is_ancestor`] with lexicographic prefix matching.
pub fn is_ancestor(node_path: &str, location: &str) -> bool {
    PathMatcher::default().is_ancestor(node_path, location)
}

/// [`PathMatcher::collect_expand_targets`] with lexicographic prefix matching.
pub fn collect_expand_targets(tree: &NavTree, location: &str) -> BTreeSet<String> {
    PathMatcher::default().collect_expand_targets(tree, location)
}
