//! JSONPlaceholder client for fetching post skeletons.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ContentProvider, get_json, http_client};
use crate::config::DEFAULT_CONTENT_BASE_URL;
use crate::error::{Provider, UpstreamError};
use crate::models::ContentSkeleton;

/// Post as returned by `/posts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderPost {
    user_id: u64,
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

impl From<PlaceholderPost> for ContentSkeleton {
    fn from(post: PlaceholderPost) -> Self {
        Self {
            id: post.id,
            owner_seed: post.user_id,
            title: post.title,
            body: post.body,
        }
    }
}

/// Client for the placeholder content API.
pub struct PlaceholderClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlaceholderClient {
    /// Creates a client against `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client against the public JSONPlaceholder instance.
    pub fn public(timeout: Duration) -> reqwest::Result<Self> {
        Self::new(DEFAULT_CONTENT_BASE_URL, timeout)
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}

#[async_trait]
impl ContentProvider for PlaceholderClient {
    async fn fetch_content_skeletons(
        &self,
        limit: usize,
    ) -> Result<Vec<ContentSkeleton>, UpstreamError> {
        let posts: Vec<PlaceholderPost> = get_json(
            &self.client,
            Provider::Content,
            &self.posts_url(),
            &[("_limit", limit)],
        )
        .await?;

        Ok(posts.into_iter().map(ContentSkeleton::from).collect())
    }
}
