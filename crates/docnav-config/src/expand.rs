//! Environment variable expansion for `render.base_path`.
//!
//! Lets one `docnav.toml` serve several deployments, e.g.
//! `base_path = "${DOCS_PREFIX:-/docs}"`.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in the configured base path.
///
/// Called while loading `docnav.toml`, before the base path is validated, so
/// the expanded value must satisfy the leading-slash rule. Bare `$VAR` is kept
/// literally. `field` names the config key in [`ConfigError::EnvVar`].
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of an environment variable that has no value.
struct UnsetVar(String);
