//! Navigation tree and active-path resolution for docnav.
//!
//! This crate provides:
//! - [`NavTree`]: Static, read-only forest of navigation nodes grouped into sections
//! - [`PathMatcher`]: Classification of a node path against the current location
//! - [`ExpansionState`]: Expand/collapse map updated on navigation and clicks
//! - [`Sidebar`]: Session object tying the three together for one sidebar view
//! - [`load_tree`]: Loading of trees from YAML or TOML files
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use docnav_tree::{ClickOutcome, NavNode, NavSection, NavTree, Sidebar};
//!
//! let tree = Arc::new(NavTree::new(vec![NavSection::new(
//!     "Fundamentals",
//!     vec![NavNode::parent(
//!         "Core",
//!         "/docs/core",
//!         vec![NavNode::leaf("DI", "/docs/core/di")],
//!     )],
//! )]));
//!
//! let mut sidebar = Sidebar::mount(tree, "/docs/core/di");
//! assert!(sidebar.is_expanded("/docs/core"));
//!
//! // Clicking a parent toggles it without navigating
//! let outcome = sidebar.click("/docs/core");
//! assert_eq!(
//!     outcome,
//!     ClickOutcome::Toggled { path: "/docs/core".to_owned(), expanded: false }
//! );
//! assert_eq!(sidebar.location(), "/docs/core/di");
//! ```

mod error;
mod expansion;
mod loader;
pub mod matcher;
mod node;
mod sidebar;

pub use error::TreeError;
pub use expansion::ExpansionState;
pub use loader::{TreeFormat, load_tree, parse_tree};
pub use matcher::{ActiveState, PathMatcher, PrefixMode};
pub use node::{NavNode, NavSection, NavTree, Walk};
pub use sidebar::{ClickOutcome, Sidebar, SidebarView};
