//! Plain-text backend for terminals.
//!
//! ```text
//! [book] Fundamentals
//!   ▾ Core (/docs/core) ~
//!     - DI (/docs/core/di) *
//! ```
//!
//! `▸`/`▾` mark collapsed/expanded parents, `*` the exact match and `~` its
//! ancestors.

use std::fmt::Write;

use docnav_tree::{ActiveState, NavSection};

use crate::backend::{Control, SidebarBackend};

/// Terminal sidebar backend.
pub struct TextBackend;

impl SidebarBackend for TextBackend {
    fn sidebar_start(_out: &mut String) {}

    fn sidebar_end(_out: &mut String) {}

    fn section_start(section: &NavSection, out: &mut String) {
        if !out.is_empty() {
            out.push('\n');
        }
        if let Some(icon) = &section.icon {
            let _ = write!(out, "[{icon}] ");
        }
        let _ = writeln!(out, "{}", section.title);
    }

    fn section_end(_section: &NavSection, _out: &mut String) {}

    fn children_start(_depth: usize, _out: &mut String) {}

    fn children_end(_depth: usize, _out: &mut String) {}

    fn disclosure(control: &Control<'_>, expanded: bool, out: &mut String) {
        let glyph = if expanded { '▾' } else { '▸' };
        write_line(control, glyph, out);
    }

    fn link(control: &Control<'_>, out: &mut String) {
        write_line(control, '-', out);
    }

    fn item_end(_depth: usize, _out: &mut String) {}
}

fn write_line(control: &Control<'_>, glyph: char, out: &mut String) {
    let indent = "  ".repeat(control.depth + 1);
    let marker = match control.state {
        ActiveState::Exact => " *",
        ActiveState::Ancestor => " ~",
        ActiveState::Inactive => "",
    };
    let _ = writeln!(
        out,
        "{indent}{glyph} {} ({}){marker}",
        control.label, control.href
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_disclosure_line() {
        let control = Control {
            label: "Core",
            path: "/docs/core",
            href: "/docs/core",
            state: ActiveState::Inactive,
            depth: 0,
        };
        let mut out = String::new();

        TextBackend::disclosure(&control, false, &mut out);

        assert_eq!(out, "  ▸ Core (/docs/core)\n");
    }

    #[test]
    fn test_nested_exact_link_line() {
        let control = Control {
            label: "DI",
            path: "/docs/core/di",
            href: "/docs/core/di",
            state: ActiveState::Exact,
            depth: 1,
        };
        let mut out = String::new();

        TextBackend::link(&control, &mut out);

        assert_eq!(out, "    - DI (/docs/core/di) *\n");
    }

    #[test]
    fn test_sections_are_separated_by_blank_line() {
        let mut out = String::new();

        TextBackend::section_start(&NavSection::new("A", Vec::new()), &mut out);
        TextBackend::section_start(&NavSection::new("B", Vec::new()).with_icon("gear"), &mut out);

        assert_eq!(out, "A\n\n[gear] B\n");
    }
}
