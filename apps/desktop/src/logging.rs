//! Maps the `logging` config section onto the logger builder.

use anyhow::Context;
use regform::domain::config::{LogRotation, LoggingConfig};
use regform_logger::{LevelFilter, Logger, LoggerBuilder, Rotation};

/// Builds (but does not install) the logger described by `config`.
///
/// # Errors
/// Fails if `config.level` is not a valid level name.
pub fn logger_builder(name: &str, config: &LoggingConfig) -> anyhow::Result<LoggerBuilder> {
    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid logging level '{}'", config.level))?;

    let mut builder = Logger::builder(name).console(config.console).level(level);

    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &config.directory {
        builder = builder
            .directory(directory.clone())
            .json(config.json)
            .rotation(rotation(config.rotation))
            .max_files(config.max_files);
    }

    Ok(builder)
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// Like [`logger_builder`], but an invalid logging section falls back to the default
/// console logger. The rejected section's error is handed back so it can be reported once
/// the logger is running.
pub fn logger_builder_or_default(
    name: &str,
    config: &LoggingConfig,
) -> (LoggerBuilder, Option<anyhow::Error>) {
    match logger_builder(name, config) {
        Ok(builder) => (builder, None),
        Err(err) => (Logger::builder(name), Some(err)),
    }
}
