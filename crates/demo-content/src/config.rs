//! Configuration types for upstream providers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default base URL of the placeholder post provider.
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default base URL of the random identity provider.
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://randomuser.me/api";

/// Default base URL of the image provider.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";

/// Default per-call deadline for upstream requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Where the upstream providers live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the placeholder post provider.
    pub content_base_url: String,

    /// Base URL of the random identity provider.
    pub identity_base_url: String,

    /// Base URL used to build image URLs.
    pub image_base_url: String,

    /// Deadline applied to every upstream call, in seconds.
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Deadline applied to every upstream call.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            content_base_url: DEFAULT_CONTENT_BASE_URL.to_string(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
