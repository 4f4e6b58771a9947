//! Service configuration read from the environment.

use demo_content::config::{
    DEFAULT_CONTENT_BASE_URL, DEFAULT_IDENTITY_BASE_URL, DEFAULT_IMAGE_BASE_URL,
    DEFAULT_TIMEOUT_SECS, ProviderConfig,
};
use tracing::warn;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Origin substrings accepted by CORS when none are configured.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["vercel.app", "localhost"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub providers: ProviderConfig,
    /// An origin is allowed when it contains any of these.
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for missing or
    /// unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let timeout_secs = parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            port,
            providers: ProviderConfig {
                content_base_url: string_or("CONTENT_API_URL", DEFAULT_CONTENT_BASE_URL),
                identity_base_url: string_or("IDENTITY_API_URL", DEFAULT_IDENTITY_BASE_URL),
                image_base_url: string_or("IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL),
                timeout_secs,
            },
            cors_allowed_origins,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}
