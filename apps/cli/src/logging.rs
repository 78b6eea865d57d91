//! Logging initialization for the CLI
//!
//! Logs go to stderr so that stdout carries only parse results. `RUST_LOG`
//! overrides the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub fn init_logging(config: &Config) {
    let env_filter = build_env_filter(&config.log_level);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.log_json {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(level = %config.log_level, json = config.log_json, "Logging initialized");
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stoich={level},stoich_formula={level}")))
}
