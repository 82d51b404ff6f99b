//! HTML backend.
//!
//! Disclosures are `<button>` elements carrying `data-toggle`, so clicking one
//! never navigates even without a host script; the host reports the click on
//! that path. Leaves are plain links handled by the host router.

use std::fmt::Write;

use docnav_tree::{ActiveState, NavSection};

use crate::backend::{Control, SidebarBackend};

/// HTML sidebar backend.
pub struct HtmlBackend;

impl SidebarBackend for HtmlBackend {
    fn sidebar_start(out: &mut String) {
        out.push_str("<nav class=\"sidebar\">\n");
    }

    fn sidebar_end(out: &mut String) {
        out.push_str("</nav>\n");
    }

    fn section_start(section: &NavSection, out: &mut String) {
        out.push_str("<section class=\"nav-section\">\n");
        out.push_str("<h3 class=\"nav-section-title\"");
        if let Some(icon) = &section.icon {
            let _ = write!(out, " data-icon=\"{}\"", escape_html(icon));
        }
        let _ = writeln!(out, ">{}</h3>", escape_html(&section.title));
        out.push_str("<ul class=\"nav-list\">\n");
    }

    fn section_end(_section: &NavSection, out: &mut String) {
        out.push_str("</ul>\n</section>\n");
    }

    fn children_start(depth: usize, out: &mut String) {
        let _ = writeln!(out, "<ul class=\"nav-list nav-depth-{depth}\">");
    }

    fn children_end(_depth: usize, out: &mut String) {
        out.push_str("</ul>\n");
    }

    fn disclosure(control: &Control<'_>, expanded: bool, out: &mut String) {
        out.push_str("<li class=\"nav-item\">\n");
        let _ = writeln!(
            out,
            "<button type=\"button\" class=\"nav-toggle{}\" data-toggle=\"{}\" \
             aria-expanded=\"{}\"{}>{}</button>",
            state_class(control.state),
            escape_html(control.path),
            expanded,
            aria_current(control.state),
            escape_html(control.label),
        );
    }

    fn link(control: &Control<'_>, out: &mut String) {
        out.push_str("<li class=\"nav-item\">\n");
        let _ = writeln!(
            out,
            "<a href=\"{}\" class=\"nav-link{}\"{}>{}</a>",
            escape_html(control.href),
            state_class(control.state),
            aria_current(control.state),
            escape_html(control.label),
        );
    }

    fn item_end(_depth: usize, out: &mut String) {
        out.push_str("</li>\n");
    }
}

fn state_class(state: ActiveState) -> &'static str {
    match state {
        ActiveState::Exact => " active",
        ActiveState::Ancestor => " ancestor",
        ActiveState::Inactive => "",
    }
}

fn aria_current(state: ActiveState) -> &'static str {
    if state == ActiveState::Exact {
        " aria-current=\"page\""
    } else {
        ""
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
