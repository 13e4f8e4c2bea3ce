use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "REGFORM";

/// Base name of the config file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "regform";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads a configuration by layering a file source and environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, an optional
///    `regform.{toml,json,yaml,...}` in the working directory is picked up if present.
/// 2. **Environment Overrides**: variables prefixed with `REGFORM__`, nested with double
///    underscores (e.g., `REGFORM__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the
/// merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder.build().map_err(|source| ConfigError::Config {
        source,
        context: Some("Failed to build config".into()),
    })?;

    config.try_deserialize::<T>().map_err(|source| ConfigError::Config {
        source,
        context: Some("Failed to deserialize config".into()),
    })
}
