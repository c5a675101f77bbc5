//! Logging setup
//!
//! The terminal belongs to the UI, so events go to the in-app log pane and,
//! when a log directory is configured, to a daily rolling file.

use std::path::Path;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tui_logger=warn", config.log_level)));

    let file_layer = config
        .log_dir
        .as_deref()
        .filter(|dir| Path::new(dir).is_dir())
        .map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "catalog-admin");
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
        });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);
    // log-crate records from dependencies
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);

    Ok(())
}
