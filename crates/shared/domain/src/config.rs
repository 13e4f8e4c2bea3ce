use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the desktop front end.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Main window geometry and title.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Optional `RUST_LOG`-style filter, e.g. `regform_form=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// How often a new log file is started.
    pub rotation: LogRotation,
    /// Rolled files kept on disk.
    pub max_files: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Registration".to_owned(), width: 560.0, height: 860.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}
