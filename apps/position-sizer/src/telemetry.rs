//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only carries calculator output.
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides `observability.logging.level` when set
//! - `observability.logging.format`: `json`, `pretty` or `compact`

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Errors while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("Tracing already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.include_target);

    match config.format.as_str() {
        "json" => registry.with(layer.json()).try_init()?,
        "pretty" => registry.with(layer.pretty()).try_init()?,
        _ => registry.with(layer.compact()).try_init()?,
    }

    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}
