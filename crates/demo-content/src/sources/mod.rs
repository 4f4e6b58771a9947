//! Upstream data providers.
//!
//! - [`PlaceholderClient`]: post skeletons from the placeholder content API
//! - [`RandomUserClient`]: synthetic identities from the random person API
//! - [`PicsumImages`]: image URLs, built locally without a request

mod picsum;
mod placeholder;
mod random_user;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Provider, UpstreamError};
use crate::models::{ContentSkeleton, Identity};

pub use picsum::PicsumImages;
pub use placeholder::PlaceholderClient;
pub use random_user::RandomUserClient;

/// Source of raw post skeletons.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetches up to `limit` post skeletons.
    async fn fetch_content_skeletons(
        &self,
        limit: usize,
    ) -> Result<Vec<ContentSkeleton>, UpstreamError>;
}

/// Source of synthetic identities.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches the identity associated with `seed`.
    ///
    /// The same seed yields the same identity for as long as the upstream keeps that
    /// guarantee; nothing is cached locally.
    async fn fetch_identity(&self, seed: &str) -> Result<Identity, UpstreamError>;

    /// Fetches `count` unrelated identities in one request.
    async fn fetch_identities(&self, count: usize) -> Result<Vec<Identity>, UpstreamError>;
}

/// Issues a GET and decodes the JSON body, mapping every failure to [`UpstreamError`].
pub(crate) async fn get_json<T, Q>(
    client: &reqwest::Client,
    provider: Provider,
    url: &str,
    query: &Q,
) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
    Q: serde::Serialize + ?Sized,
{
    debug!(%provider, url, "upstream request");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| UpstreamError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| UpstreamError::from_reqwest(provider, e))?;

    serde_json::from_str(&text).map_err(|source| UpstreamError::Decode { provider, source })
}

/// Builds a client whose every request is bounded by `timeout`.
pub(crate) fn http_client(timeout: std::time::Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
