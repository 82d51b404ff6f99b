//! `docnav replay` command implementation.
//!
//! Replays a script of sidebar events, one per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! navigate /docs/core/di
//! click /docs/auth
//! render
//! ```
//!
//! Leaf clicks produce a navigation intent that is fed back into
//! `navigate`, as a host router would.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docnav_tree::{ClickOutcome, ExpansionState, PathMatcher, Sidebar};
use serde::Serialize;

use super::{Context, GlobalArgs, RenderOptions};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the replay command.
#[derive(Args)]
pub(crate) struct ReplayArgs {
    /// Script file with one event per line.
    script: PathBuf,

    #[command(flatten)]
    options: RenderOptions,

    /// Location the sidebar is mounted at before the first event.
    #[arg(long, default_value = "/")]
    start: String,

    /// Print the final location and expansion state as JSON.
    #[arg(long)]
    json: bool,
}

/// One scripted sidebar event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// Location change reported by the router.
    Navigate(String),
    /// Click on the control for a path.
    Click(String),
    /// Render the sidebar in its current state.
    Render,
}

/// Final session state printed with `--json`.
#[derive(Serialize)]
struct ReplaySummary<'a> {
    location: &'a str,
    expansion: &'a ExpansionState,
}

/// Parse a replay script.
///
/// # Errors
///
/// Returns `CliError::Script` with the 1-based line number of the first
/// unknown command or missing path.
pub(crate) fn parse_script(content: &str) -> Result<Vec<Event>, CliError> {
    let mut events = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        let require_path = || {
            if arg.is_empty() {
                Err(CliError::Script {
                    line: idx + 1,
                    message: format!("{command} requires a path"),
                })
            } else {
                Ok(arg.to_owned())
            }
        };

        let event = match command {
            "navigate" => Event::Navigate(require_path()?),
            "click" => Event::Click(require_path()?),
            "render" => Event::Render,
            other => {
                return Err(CliError::Script {
                    line: idx + 1,
                    message: format!("unknown command \"{other}\""),
                });
            }
        };
        events.push(event);
    }
    Ok(events)
}

impl ReplayArgs {
    /// Execute the replay command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the script is malformed, or output
    /// cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let events = parse_script(&std::fs::read_to_string(&self.script)?)?;
        let ctx = Context::load(global, Some(&self.options))?;

        let mut sidebar = Sidebar::mount_with(
            Arc::clone(&ctx.tree),
            PathMatcher::new(ctx.config.navigation_resolved.match_mode),
            ExpansionState::new(),
            self.start,
        );

        for event in events {
            match event {
                Event::Navigate(location) => {
                    output.info(&format!("navigate {location}"));
                    sidebar.navigate(location);
                }
                Event::Click(path) => match sidebar.click(&path) {
                    ClickOutcome::Toggled { path, expanded } => {
                        let state = if expanded { "expanded" } else { "collapsed" };
                        output.info(&format!("click {path}: {state}"));
                    }
                    ClickOutcome::Navigate(target) => {
                        output.info(&format!("click {path}: navigate"));
                        sidebar.navigate(target);
                    }
                    ClickOutcome::Ignored => {
                        output.warning(&format!("click {path}: no such node"));
                    }
                },
                Event::Render => output.emit(&ctx.render(&sidebar))?,
            }
        }

        if self.json {
            let summary = ReplaySummary {
                location: sidebar.location(),
                expansion: sidebar.expansion(),
            };
            output.emit(&serde_json::to_string_pretty(&summary)?)?;
            output.emit("\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_script_events() {
        let script = "\
# start somewhere unrelated
navigate /docs/unrelated

click /docs/core
render
";

        let events = parse_script(script).unwrap();

        assert_eq!(
            events,
            vec![
                Event::Navigate("/docs/unrelated".to_owned()),
                Event::Click("/docs/core".to_owned()),
                Event::Render,
            ]
        );
    }

    #[test]
    fn test_parse_script_trims_whitespace() {
        let events = parse_script("  click\t /docs/core  \n").unwrap();

        assert_eq!(events, vec![Event::Click("/docs/core".to_owned())]);
    }

    #[test]
    fn test_parse_script_unknown_command() {
        let err = parse_script("navigate /a\njump /b\n").unwrap_err();

        assert!(matches!(err, CliError::Script { line: 2, .. }));
        assert!(err.to_string().contains("unknown command \"jump\""));
    }

    #[test]
    fn test_parse_script_missing_path() {
        let err = parse_script("click\n").unwrap_err();

        assert_eq!(err.to_string(), "Script line 1: click requires a path");
    }

    #[test]
    fn test_summary_serialization() {
        let expansion = ExpansionState::from_expanded(["/docs/core"]);
        let summary = ReplaySummary {
            location: "/docs/core/di",
            expansion: &expansion,
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "location": "/docs/core/di",
                "expansion": {"/docs/core": true}
            })
        );
    }
}
