//! Sidebar session.
//!
//! A [`Sidebar`] is created when the hosting view mounts and dropped when it
//! unmounts; its expansion state lives exactly that long. Location changes
//! go through [`Sidebar::navigate`], which synchronizes the expansion state
//! before returning, so any render that follows sees the synced state.

use std::sync::Arc;

use crate::{ActiveState, ExpansionState, NavNode, NavTree, PathMatcher};

/// Result of clicking a sidebar control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A parent's disclosure was toggled. The location is unchanged.
    Toggled {
        /// Path of the toggled parent.
        path: String,
        /// Expansion state after the toggle.
        expanded: bool,
    },
    /// A leaf was activated. The host router should navigate to this path
    /// and report the new location through [`Sidebar::navigate`].
    Navigate(String),
    /// No node has the clicked path.
    Ignored,
}

/// One sidebar view: shared tree, current location, owned expansion state.
#[derive(Debug)]
pub struct Sidebar {
    tree: Arc<NavTree>,
    matcher: PathMatcher,
    location: String,
    expansion: ExpansionState,
}

impl Sidebar {
    /// Mount a sidebar at `location` with lexicographic matching.
    pub fn mount(tree: Arc<NavTree>, location: impl Into<String>) -> Self {
        Self::mount_with(tree, PathMatcher::default(), ExpansionState::new(), location)
    }

    /// Mount a sidebar with a custom matcher and initial expansion state.
    ///
    /// The initial state is synced with `location` before this returns.
    pub fn mount_with(
        tree: Arc<NavTree>,
        matcher: PathMatcher,
        expansion: ExpansionState,
        location: impl Into<String>,
    ) -> Self {
        let mut sidebar = Self {
            tree,
            matcher,
            location: String::new(),
            expansion,
        };
        sidebar.navigate(location);
        sidebar
    }

    /// Handle a location change reported by the host router.
    pub fn navigate(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.expansion
            .sync_with_matcher(self.matcher, &self.tree, &self.location);
    }

    /// Handle a click on the control for `path`.
    ///
    /// Parents toggle and never navigate. Leaves return a navigation intent
    /// and leave the location untouched until the router calls back.
    pub fn click(&mut self, path: &str) -> ClickOutcome {
        match self.tree.find(path) {
            Some(NavNode::Parent { .. }) => {
                let expanded = self.expansion.toggle(path);
                tracing::debug!(path, expanded, "Toggled navigation node");
                ClickOutcome::Toggled {
                    path: path.to_owned(),
                    expanded,
                }
            }
            Some(NavNode::Leaf { .. }) => ClickOutcome::Navigate(path.to_owned()),
            None => {
                tracing::warn!(path, "Click on unknown navigation path ignored");
                ClickOutcome::Ignored
            }
        }
    }

    /// Whether the parent at `path` shows its children.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Active state of a node at the current location.
    ///
    /// Leaves are never reported as ancestors.
    pub fn active_state(&self, node: &NavNode) -> ActiveState {
        match node {
            NavNode::Parent { path, .. } => self.matcher.classify(path, &self.location),
            NavNode::Leaf { path, .. } => {
                if self.matcher.is_exact_match(path, &self.location) {
                    ActiveState::Exact
                } else {
                    ActiveState::Inactive
                }
            }
        }
    }

    /// Navigation tree.
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Current location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Matcher in use.
    pub fn matcher(&self) -> PathMatcher {
        self.matcher
    }

    /// Current expansion state.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Borrowed view for renderers.
    pub fn view(&self) -> SidebarView<'_> {
        SidebarView {
            tree: &self.tree,
            location: &self.location,
            matcher: self.matcher,
            expansion: &self.expansion,
        }
    }
}

/// Everything a renderer reads, borrowed from a [`Sidebar`] or assembled by hand.
#[derive(Clone, Copy, Debug)]
pub struct SidebarView<'a> {
    /// Tree to render.
    pub tree: &'a NavTree,
    /// Current location.
    pub location: &'a str,
    /// Matcher for active states.
    pub matcher: PathMatcher,
    /// Expansion state consulted for parents.
    pub expansion: &'a ExpansionState,
}
