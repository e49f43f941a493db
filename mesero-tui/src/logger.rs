//! Logging setup
//!
//! Log lines render into the in-UI log pane (tui-logger). With
//! `LOG_DIR` set, a daily-rotating file layer is added so the panel
//! leaves a trace after the terminal closes.

use std::fs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter);

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
        let file_log = RollingFileAppender::new(Rotation::DAILY, dir, "panel");
        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file_log));
        registry.with(file_layer).init();
    } else {
        registry.init();
    }

    // log crate adapter for dependencies that bypass tracing
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    Ok(())
}
