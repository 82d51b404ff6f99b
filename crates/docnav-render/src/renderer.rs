//! Generic sidebar renderer.

use std::marker::PhantomData;

use docnav_tree::{ActiveState, NavNode, SidebarView};

use crate::backend::{Control, SidebarBackend};

/// Sidebar renderer generic over the output backend.
///
/// Rendering reads the view only; call [`docnav_tree::Sidebar::navigate`]
/// before rendering so the expansion state reflects the current location.
pub struct SidebarRenderer<B: SidebarBackend> {
    base_path: String,
    _backend: PhantomData<B>,
}

impl<B: SidebarBackend> Default for SidebarRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SidebarBackend> SidebarRenderer<B> {
    /// Create a renderer without a base path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_path: String::new(),
            _backend: PhantomData,
        }
    }

    /// Prefix every generated link target with `base_path` (e.g. `/v2`).
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Render every section of the tree.
    pub fn render(&self, view: &SidebarView<'_>) -> String {
        let mut out = String::with_capacity(1024);
        B::sidebar_start(&mut out);
        for section in view.tree.sections() {
            B::section_start(section, &mut out);
            for node in &section.items {
                self.render_node(view, node, 0, &mut out);
            }
            B::section_end(section, &mut out);
        }
        B::sidebar_end(&mut out);
        out
    }

    /// Render a single node and, if it is an expanded parent, its subtree.
    ///
    /// Children are rendered in tree order at `depth + 1`. There is no depth
    /// limit.
    pub fn render_node(
        &self,
        view: &SidebarView<'_>,
        node: &NavNode,
        depth: usize,
        out: &mut String,
    ) {
        match node {
            NavNode::Parent {
                label,
                path,
                children,
            } => {
                let href = self.href(path);
                let control = Control {
                    label,
                    path,
                    href: &href,
                    state: view.matcher.classify(path, view.location),
                    depth,
                };
                let expanded = view.expansion.is_expanded(path);
                B::disclosure(&control, expanded, out);
                if expanded {
                    B::children_start(depth + 1, out);
                    for child in children {
                        self.render_node(view, child, depth + 1, out);
                    }
                    B::children_end(depth + 1, out);
                }
                B::item_end(depth, out);
            }
            NavNode::Leaf { label, path } => {
                let href = self.href(path);
                let state = if view.matcher.is_exact_match(path, view.location) {
                    ActiveState::Exact
                } else {
                    ActiveState::Inactive
                };
                let control = Control {
                    label,
                    path,
                    href: &href,
                    state,
                    depth,
                };
                B::link(&control, out);
                B::item_end(depth, out);
            }
        }
    }

    fn href(&self, path: &str) -> String {
        format!("{}{path}", self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use docnav_tree::{ExpansionState, NavSection, NavTree, PathMatcher, Sidebar};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HtmlBackend, TextBackend};

    fn docs_tree() -> Arc<NavTree> {
        Arc::new(NavTree::new(vec![
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
                                vec![NavNode::parent(
                                    "Dynamic",
                                    "/docs/core/modules/dynamic",
                                    vec![NavNode::leaf(
                                        "Async",
                                        "/docs/core/modules/dynamic/async",
                                    )],
                                )],
                            ),
                        ],
                    ),
                    NavNode::leaf("CLI", "/docs/cli"),
                ],
            )
            .with_icon("book"),
            NavSection::new(
                "Security",
                vec![NavNode::parent(
                    "Auth",
                    "/docs/auth",
                    vec![NavNode::leaf("JWT", "/docs/auth/jwt")],
                )],
            ),
        ]))
    }

    #[test]
    fn test_text_render_expands_active_branch_only() {
        let sidebar = Sidebar::mount(docs_tree(), "/docs/core/di");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        assert_eq!(
            text,
            "\
[book] Fundamentals
  ▾ Core (/docs/core) ~
    - DI (/docs/core/di) *
    ▸ Modules (/docs/core/modules)
  - CLI (/docs/cli)

Security
  ▸ Auth (/docs/auth)
"
        );
    }

    #[test]
    fn test_text_render_reaches_depth_three() {
        let sidebar = Sidebar::mount(docs_tree(), "/docs/core/modules/dynamic/async");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        assert!(text.contains("  ▾ Core (/docs/core) ~\n"));
        assert!(text.contains("    ▾ Modules (/docs/core/modules) ~\n"));
        assert!(text.contains("      ▾ Dynamic (/docs/core/modules/dynamic) ~\n"));
        assert!(text.contains("        - Async (/docs/core/modules/dynamic/async) *\n"));
    }

    #[test]
    fn test_collapsed_parent_hides_children_after_toggle() {
        let mut sidebar = Sidebar::mount(docs_tree(), "/docs/core/di");
        sidebar.click("/docs/core");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        assert!(text.contains("  ▸ Core (/docs/core) ~\n"));
        assert!(!text.contains("DI"));
    }

    #[test]
    fn test_manual_expansion_of_sibling_subtree() {
        let mut sidebar = Sidebar::mount(docs_tree(), "/docs/core/di");
        sidebar.click("/docs/auth");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        assert!(text.contains("  ▾ Auth (/docs/auth)\n    - JWT (/docs/auth/jwt)\n"));
        assert!(text.contains("    - DI (/docs/core/di) *\n"));
    }

    #[test]
    fn test_exact_parent_is_active_not_ancestor() {
        let sidebar = Sidebar::mount(docs_tree(), "/docs/core");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        assert!(text.contains("  ▾ Core (/docs/core) *\n"));
        assert!(text.contains("    - DI (/docs/core/di)\n"));
    }

    #[test]
    fn test_children_keep_tree_order() {
        let tree = Arc::new(NavTree::new(vec![NavSection::new(
            "Docs",
            vec![NavNode::parent(
                "Root",
                "/r",
                vec![
                    NavNode::leaf("Zeta", "/r/z"),
                    NavNode::leaf("Alpha", "/r/a"),
                    NavNode::leaf("Mu", "/r/m"),
                ],
            )],
        )]));
        let sidebar = Sidebar::mount(tree, "/r/a");

        let text = SidebarRenderer::<TextBackend>::new().render(&sidebar.view());

        let zeta = text.find("Zeta").unwrap();
        let alpha = text.find("Alpha").unwrap();
        let mu = text.find("Mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test]
    fn test_html_render_structure() {
        let sidebar = Sidebar::mount(docs_tree(), "/docs/auth/jwt");

        let html = SidebarRenderer::<HtmlBackend>::new().render(&sidebar.view());

        assert_eq!(
            html,
            "\
<nav class=\"sidebar\">
<section class=\"nav-section\">
<h3 class=\"nav-section-title\" data-icon=\"book\">Fundamentals</h3>
<ul class=\"nav-list\">
<li class=\"nav-item\">
<button type=\"button\" class=\"nav-toggle\" data-toggle=\"/docs/core\" aria-expanded=\"false\">Core</button>
</li>
<li class=\"nav-item\">
<a href=\"/docs/cli\" class=\"nav-link\">CLI</a>
</li>
</ul>
</section>
<section class=\"nav-section\">
<h3 class=\"nav-section-title\">Security</h3>
<ul class=\"nav-list\">
<li class=\"nav-item\">
<button type=\"button\" class=\"nav-toggle ancestor\" data-toggle=\"/docs/auth\" aria-expanded=\"true\">Auth</button>
<ul class=\"nav-list nav-depth-1\">
<li class=\"nav-item\">
<a href=\"/docs/auth/jwt\" class=\"nav-link active\" aria-current=\"page\">JWT</a>
</li>
</ul>
</li>
</ul>
</section>
</nav>
"
        );
    }

    #[test]
    fn test_html_base_path_prefixes_href_not_toggle_key() {
        let sidebar = Sidebar::mount(docs_tree(), "/docs/core/di");

        let html = SidebarRenderer::<HtmlBackend>::new()
            .with_base_path("/v2")
            .render(&sidebar.view());

        assert!(!html.contains("href=\"/v2/docs/core\""));
        assert!(html.contains("data-toggle=\"/docs/core\""));
        assert!(html.contains("href=\"/v2/docs/core/di\" class=\"nav-link active\""));
    }

    #[test]
    fn test_html_escapes_labels() {
        let tree = NavTree::new(vec![NavSection::new(
            "Q&A",
            vec![NavNode::leaf("<script>", "/docs/\"x\"")],
        )]);
        let expansion = ExpansionState::new();
        let view = SidebarView {
            tree: &tree,
            location: "/",
            matcher: PathMatcher::default(),
            expansion: &expansion,
        };

        let html = SidebarRenderer::<HtmlBackend>::new().render(&view);

        assert!(html.contains(">Q&amp;A</h3>"));
        assert!(html.contains("href=\"/docs/&quot;x&quot;\""));
        assert!(html.contains(">&lt;script&gt;</a>"));
    }

    #[test]
    fn test_render_node_subtree() {
        let tree = docs_tree();
        let expansion = ExpansionState::from_expanded(["/docs/auth"]);
        let view = SidebarView {
            tree: &tree,
            location: "/docs/unrelated",
            matcher: PathMatcher::default(),
            expansion: &expansion,
        };
        let auth = &tree.sections()[1].items[0];
        let mut out = String::new();

        SidebarRenderer::<TextBackend>::new().render_node(&view, auth, 0, &mut out);

        assert_eq!(out, "  ▾ Auth (/docs/auth)\n    - JWT (/docs/auth/jwt)\n");
    }
}
