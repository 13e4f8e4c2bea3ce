#![windows_subsystem = "windows"]

use regform::domain::config::AppConfig;
use regform::kernel::config::load_config;
use regform_desktop::DesktopApp;
use regform_desktop::components::App;
use regform_desktop::logging::logger_builder_or_default;
use regform_logger::Logger;

const APP_NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> anyhow::Result<()> {
    let loaded = load_config::<AppConfig>(None::<&str>);
    let config = loaded.as_ref().map_or_else(|_| AppConfig::default(), Clone::clone);

    let (builder, mut rejected_logging) = logger_builder_or_default(APP_NAME, &config.logging);
    let _logger = match builder.init() {
        Ok(logger) => logger,
        Err(err) => {
            rejected_logging = Some(err.into());
            Logger::builder(APP_NAME).init()?
        },
    };

    if let Err(err) = &loaded {
        tracing::warn!(%err, "Falling back to default configuration");
    }
    if let Some(err) = rejected_logging {
        tracing::warn!(error = %format_args!("{err:#}"), "Falling back to default logging configuration");
    }

    DesktopApp::from_config(&config.window).launch(App);

    Ok(())
}
