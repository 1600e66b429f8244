//! Logging for faultline
//!
//! Installs a `tracing-subscriber` registry with an env filter and a text or
//! JSON `fmt` layer

use faultline_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from configuration
///
/// `RUST_LOG`, when set and valid, takes precedence over the configured
/// filter.
///
/// # Errors
///
/// Returns an error if the configured filter cannot be parsed or a global
/// subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(config)?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_target(true);

            registry.with(fmt_layer).try_init()?;
        }
    }

    tracing::debug!(filter = %config.filter, format = ?config.format, "telemetry initialized");

    Ok(())
}

/// Build the event filter, preferring `RUST_LOG` over configuration
fn build_filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter)
        .map_err(|e| anyhow::anyhow!("invalid telemetry filter '{}': {e}", config.filter))
}
