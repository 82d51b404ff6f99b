//! Trait-based sidebar renderer with pluggable backends.
//!
//! This crate provides a generic [`SidebarRenderer`] that walks a navigation
//! tree and delegates output to a [`SidebarBackend`]:
//! - [`HtmlBackend`]: `<nav>` markup with disclosure buttons and active classes
//! - [`TextBackend`]: Indented tree for terminals
//!
//! The renderer decides what is visible (expanded parents show their
//! children) and which state each control has; backends only decide how a
//! control looks.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docnav_render::{HtmlBackend, SidebarRenderer};
//! use docnav_tree::{NavNode, NavSection, NavTree, Sidebar};
//!
//! let tree = Arc::new(NavTree::new(vec![NavSection::new(
//!     "Fundamentals",
//!     vec![NavNode::parent(
//!         "Core",
//!         "/docs/core",
//!         vec![NavNode::leaf("DI", "/docs/core/di")],
//!     )],
//! )]));
//! let sidebar = Sidebar::mount(tree, "/docs/core/di");
//!
//! let html = SidebarRenderer::<HtmlBackend>::new().render(&sidebar.view());
//! assert!(html.contains("aria-current=\"page\""));
//! ```

mod backend;
mod html;
mod renderer;
mod text;

pub use backend::{Control, SidebarBackend};
pub use html::{HtmlBackend, escape_html};
pub use renderer::SidebarRenderer;
pub use text::TextBackend;
