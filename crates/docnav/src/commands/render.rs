//! `docnav render` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docnav_tree::{ClickOutcome, ExpansionState, PathMatcher, Sidebar};

use super::{Context, GlobalArgs, RenderOptions};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Current location path (e.g. /docs/core/di).
    location: String,

    #[command(flatten)]
    options: RenderOptions,

    /// Parent path expanded before mounting (repeatable).
    #[arg(short, long = "expand", value_name = "PATH")]
    expand: Vec<String>,

    /// Path clicked after mounting, in order (repeatable).
    #[arg(long = "click", value_name = "PATH")]
    click: Vec<String>,

    /// Write the sidebar to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the navigation tree fails to load,
    /// or the output cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = Context::load(global, Some(&self.options))?;

        let mut sidebar = Sidebar::mount_with(
            Arc::clone(&ctx.tree),
            PathMatcher::new(ctx.config.navigation_resolved.match_mode),
            ExpansionState::from_expanded(self.expand),
            self.location,
        );

        for path in &self.click {
            match sidebar.click(path) {
                ClickOutcome::Navigate(target) => sidebar.navigate(target),
                ClickOutcome::Ignored => {
                    output.warning(&format!("No navigation node at {path}, click ignored"));
                }
                ClickOutcome::Toggled { .. } => {}
            }
        }

        let rendered = ctx.render(&sidebar);
        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.success(&format!("Sidebar written to {}", path.display()));
            }
            None => output.emit(&rendered)?,
        }

        Ok(())
    }
}
