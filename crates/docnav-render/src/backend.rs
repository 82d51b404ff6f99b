//! Render backend trait for format-specific sidebar output.
//!
//! This trait abstracts the differences between HTML and terminal output,
//! allowing the renderer to be generic over the output format.

use docnav_tree::{ActiveState, NavSection};

/// A single clickable sidebar control.
#[derive(Clone, Copy, Debug)]
pub struct Control<'a> {
    /// Display text.
    pub label: &'a str,
    /// Node path (toggle key for disclosures, navigation target for links).
    pub path: &'a str,
    /// Link target with the configured base path applied.
    pub href: &'a str,
    /// Relationship to the current location.
    pub state: ActiveState,
    /// Nesting depth, top-level items at 0.
    pub depth: usize,
}

/// Backend trait for format-specific rendering operations.
///
/// Every `*_start` call is matched by the corresponding `*_end` call.
/// Each [`SidebarBackend::disclosure`] or [`SidebarBackend::link`] opens an
/// item that is closed by [`SidebarBackend::item_end`]; for expanded
/// disclosures the nested list is emitted in between.
pub trait SidebarBackend {
    /// Render the sidebar opening.
    fn sidebar_start(out: &mut String);

    /// Render the sidebar closing.
    fn sidebar_end(out: &mut String);

    /// Render a section heading and open its item list.
    fn section_start(section: &NavSection, out: &mut String);

    /// Close a section.
    fn section_end(section: &NavSection, out: &mut String);

    /// Open a nested child list.
    ///
    /// # Arguments
    ///
    /// * `depth` - Depth of the children in the list
    /// * `out` - Output buffer to write to
    fn children_start(depth: usize, out: &mut String);

    /// Close a nested child list.
    fn children_end(depth: usize, out: &mut String);

    /// Render a parent control.
    ///
    /// The control toggles expansion and must never navigate by itself.
    ///
    /// # Arguments
    ///
    /// * `control` - Control to render
    /// * `expanded` - Whether the children are shown
    /// * `out` - Output buffer to write to
    fn disclosure(control: &Control<'_>, expanded: bool, out: &mut String);

    /// Render a leaf control that navigates to `control.href`.
    fn link(control: &Control<'_>, out: &mut String);

    /// Close the item opened by the last disclosure or link at `depth`.
    fn item_end(depth: usize, out: &mut String);
}
