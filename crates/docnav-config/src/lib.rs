//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [navigation]
//! file = "navigation.yaml"
//! match_mode = "segment"
//!
//! [render]
//! format = "text"
//! base_path = "${DOCS_BASE:-/v2}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `render.base_path` supports `${VAR}` (errors if unset) and
//! `${VAR:-default}`.

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use docnav_tree::PrefixMode;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation file path.
    pub nav_file: Option<PathBuf>,
    /// Override prefix matching mode.
    pub match_mode: Option<PrefixMode>,
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override link base path.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Default navigation filename, relative to the config directory.
const DEFAULT_NAV_FILE: &str = "navigation.yaml";

/// Sidebar output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML markup.
    #[default]
    Html,
    /// Indented plain text.
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            other => Err(format!(
                "unknown format \"{other}\" (expected \"html\" or \"text\")"
            )),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation configuration (paths are relative strings from TOML).
    navigation: NavigationConfigRaw,
    /// Render configuration.
    pub render: RenderConfig,

    /// Resolved navigation configuration (set after loading).
    #[serde(skip)]
    pub navigation_resolved: NavigationConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw navigation configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavigationConfigRaw {
    file: Option<String>,
    match_mode: Option<PrefixMode>,
}

/// Resolved navigation configuration with an absolute file path.
#[derive(Debug, Default)]
pub struct NavigationConfig {
    /// Navigation tree file (`.yaml`, `.yml` or `.toml`).
    pub file: PathBuf,
    /// Prefix matching mode for active-path resolution.
    pub match_mode: PrefixMode,
}

/// Render configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Prefix for generated link targets (empty or `/`-rooted without trailing `/`).
    pub base_path: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`render.base_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(nav_file) = &settings.nav_file {
            self.navigation_resolved.file.clone_from(nav_file);
        }
        if let Some(match_mode) = settings.match_mode {
            self.navigation_resolved.match_mode = match_mode;
        }
        if let Some(format) = settings.format {
            self.render.format = format;
        }
        if let Some(base_path) = &settings.base_path {
            self.render.base_path.clone_from(base_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            navigation: NavigationConfigRaw::default(),
            render: RenderConfig::default(),
            navigation_resolved: NavigationConfig {
                file: base.join(DEFAULT_NAV_FILE),
                match_mode: PrefixMode::default(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables; validation runs once CLI settings are applied
        config.render.base_path = expand::expand_env(&config.render.base_path, "render.base_path")?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_path = &self.render.base_path;
        if base_path.is_empty() {
            return Ok(());
        }
        if !base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "render.base_path must start with /".to_owned(),
            ));
        }
        if base_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "render.base_path must not end with /".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve the navigation file relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.navigation_resolved = NavigationConfig {
            file: config_dir.join(self.navigation.file.as_deref().unwrap_or(DEFAULT_NAV_FILE)),
            match_mode: self.navigation.match_mode.unwrap_or_default(),
        };
    }
}
