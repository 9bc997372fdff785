//! Tracing subscriber setup for binaries embedding the maze core.

use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::formatter::CustomFormatter;

/// Installs the global subscriber: [`CustomFormatter`] output to stderr, filtered by `RUST_LOG`
/// when set and by `default_level` otherwise, with span traces captured for errors.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
}
