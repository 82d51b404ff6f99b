//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod replay;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docnav_config::{CliSettings, Config, OutputFormat};
use docnav_render::{HtmlBackend, SidebarRenderer, TextBackend};
use docnav_tree::{NavTree, PrefixMode, Sidebar, load_tree};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use replay::ReplayArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Navigation tree file (overrides config).
    #[arg(short, long, global = true, env = "DOCNAV_NAV_FILE")]
    nav_file: Option<PathBuf>,

    /// Prefix matching mode: lexicographic or segment (overrides config).
    #[arg(long, global = true)]
    match_mode: Option<PrefixMode>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output options shared by commands that render.
#[derive(Args)]
pub(crate) struct RenderOptions {
    /// Output format: html or text (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Prefix for generated link targets (overrides config).
    #[arg(long)]
    base_path: Option<String>,
}

/// Loaded configuration and navigation tree.
pub(crate) struct Context {
    pub config: Config,
    pub tree: Arc<NavTree>,
}

impl Context {
    /// Load config with CLI overrides, then the navigation tree it points to.
    pub(crate) fn load(
        global: &GlobalArgs,
        render: Option<&RenderOptions>,
    ) -> Result<Self, CliError> {
        let cli_settings = CliSettings {
            nav_file: global.nav_file.clone(),
            match_mode: global.match_mode,
            format: render.and_then(|options| options.format),
            base_path: render.and_then(|options| options.base_path.clone()),
        };

        let config = Config::load(global.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            nav_file = %config.navigation_resolved.file.display(),
            "Loaded configuration"
        );
        let tree = load_tree(&config.navigation_resolved.file)?;

        Ok(Self {
            config,
            tree: Arc::new(tree),
        })
    }

    /// Render the sidebar in the configured format.
    pub(crate) fn render(&self, sidebar: &Sidebar) -> String {
        let base_path = self.config.render.base_path.as_str();
        let view = sidebar.view();
        match self.config.render.format {
            OutputFormat::Html => SidebarRenderer::<HtmlBackend>::new()
                .with_base_path(base_path)
                .render(&view),
            OutputFormat::Text => SidebarRenderer::<TextBackend>::new()
                .with_base_path(base_path)
                .render(&view),
        }
    }
}
