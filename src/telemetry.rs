//! Tracing subscriber setup for the storefront binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::StorefrontConfig;

/// Install the global subscriber. Filter comes from `RUST_LOG`, defaulting
/// to `info`. Calling this twice is harmless.
pub fn init_tracing(config: &StorefrontConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };
    if let Err(error) = result {
        tracing::debug!(error = %error, "tracing subscriber already initialized");
    }
}
