//! `docnav check` command implementation.

use clap::Args;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// List every node path after the summary.
    #[arg(long)]
    list: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the navigation tree is invalid.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = Context::load(global, None)?;
        let tree = &ctx.tree;

        output.info(&format!(
            "Navigation file: {}",
            ctx.config.navigation_resolved.file.display()
        ));
        output.info(&format!(
            "Match mode: {}",
            ctx.config.navigation_resolved.match_mode
        ));
        output.info(&format!("Sections: {}", tree.sections().len()));
        output.info(&format!("Nodes: {}", tree.node_count()));
        if let Some(depth) = tree.max_depth() {
            output.info(&format!("Max depth: {depth}"));
        }

        if self.list {
            for section in tree.sections() {
                output.highlight(&section.title);
                for node in &section.items {
                    list_node(&output, node, 1);
                }
            }
        }

        output.success("Navigation tree is valid");
        Ok(())
    }
}

fn list_node(output: &Output, node: &docnav_tree::NavNode, depth: usize) {
    output.info(&format!("{}{}", "  ".repeat(depth), node.path()));
    for child in node.children() {
        list_node(output, child, depth + 1);
    }
}
