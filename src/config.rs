//! Runtime configuration for the storefront service.

use std::env;

use serde::Deserialize;

use crate::basket::DEFAULT_BASKET_KEY;

pub const DEFAULT_SESSION_HEADER: &str = "x-session-key";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Storefront settings.
///
/// Every field has a default, so a partial document (or none at all)
/// deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Session key the basket map is stored under.
    pub basket_session_key: String,
    /// Request/response header carrying the session key over HTTP.
    pub session_header: String,
    pub bind_addr: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            basket_session_key: DEFAULT_BASKET_KEY.to_string(),
            session_header: DEFAULT_SESSION_HEADER.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_json: false,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            basket_session_key: lookup("STOREFRONT_BASKET_KEY")
                .unwrap_or(defaults.basket_session_key),
            session_header: lookup("STOREFRONT_SESSION_HEADER")
                .map(|h| h.to_ascii_lowercase())
                .unwrap_or(defaults.session_header),
            bind_addr: lookup("STOREFRONT_BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_json: lookup("STOREFRONT_LOG_JSON")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
                .unwrap_or(defaults.log_json),
        }
    }
}
