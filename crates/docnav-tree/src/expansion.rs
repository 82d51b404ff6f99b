//! Expand/collapse state of parent nodes.
//!
//! Two writers mutate the state: location synchronization, which only ever
//! adds expanded entries, and manual toggling, which flips a single entry.
//! A path without an entry is collapsed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{NavTree, PathMatcher};

/// Mapping from node path to "is expanded".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionState {
    entries: BTreeMap<String, bool>,
}

impl ExpansionState {
    /// Create an empty state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given paths expanded.
    pub fn from_expanded<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: paths.into_iter().map(|path| (path.into(), true)).collect(),
        }
    }

    /// Merge the expand targets of `location` using lexicographic matching.
    ///
    /// See [`ExpansionState::sync_with_matcher`].
    pub fn sync_with_location(&mut self, tree: &NavTree, location: &str) -> usize {
        self.sync_with_matcher(PathMatcher::default(), tree, location)
    }

    /// Mark every expand target of `location` as expanded.
    ///
    /// Existing entries are never removed or collapsed, so branches the user
    /// expanded by hand survive navigation elsewhere. Returns the number of
    /// paths that went from collapsed to expanded.
    pub fn sync_with_matcher(
        &mut self,
        matcher: PathMatcher,
        tree: &NavTree,
        location: &str,
    ) -> usize {
        let mut newly_expanded = 0;
        for path in matcher.collect_expand_targets(tree, location) {
            let entry = self.entries.entry(path).or_insert(false);
            if !*entry {
                *entry = true;
                newly_expanded += 1;
            }
        }
        tracing::debug!(location, newly_expanded, "Synced expansion state");
        newly_expanded
    }

    /// Flip the entry for `path` and return the new value.
    ///
    /// A missing entry counts as collapsed, so the first toggle expands.
    pub fn toggle(&mut self, path: &str) -> bool {
        let entry = self.entries.entry(path.to_owned()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Whether `path` is expanded (false for unknown paths).
    pub fn is_expanded(&self, path: &str) -> bool {
        self.entries.get(path).copied().unwrap_or(false)
    }

    /// Expanded paths in sorted order.
    pub fn expanded_paths(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(path, _)| path.as_str())
    }

    /// Number of recorded entries, collapsed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
