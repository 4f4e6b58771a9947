//! randomuser.me client for fetching synthetic identities.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{IdentityProvider, get_json, http_client};
use crate::config::DEFAULT_IDENTITY_BASE_URL;
use crate::error::{Provider, UpstreamError};
use crate::models::Identity;

/// Response envelope shared by seeded and batched requests.
#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUserRecord>,
}

#[derive(Debug, Deserialize)]
struct RandomUserRecord {
    name: RecordName,
    login: RecordLogin,
    picture: RecordPicture,
}

#[derive(Debug, Deserialize)]
struct RecordName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RecordLogin {
    username: String,
}

#[derive(Debug, Deserialize)]
struct RecordPicture {
    medium: String,
}

impl From<RandomUserRecord> for Identity {
    fn from(record: RandomUserRecord) -> Self {
        Self {
            first_name: record.name.first,
            last_name: record.name.last,
            username: record.login.username,
            avatar: record.picture.medium,
        }
    }
}

/// Client for the random person API.
pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl RandomUserClient {
    /// Creates a client against `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client against the public randomuser.me instance.
    pub fn public(timeout: Duration) -> reqwest::Result<Self> {
        Self::new(DEFAULT_IDENTITY_BASE_URL, timeout)
    }
}

#[async_trait]
impl IdentityProvider for RandomUserClient {
    async fn fetch_identity(&self, seed: &str) -> Result<Identity, UpstreamError> {
        let response: RandomUserResponse = get_json(
            &self.client,
            Provider::Identity,
            &self.base_url,
            &[("seed", seed)],
        )
        .await?;

        response
            .results
            .into_iter()
            .next()
            .map(Identity::from)
            .ok_or(UpstreamError::ShortBatch {
                provider: Provider::Identity,
                expected: 1,
                received: 0,
            })
    }

    async fn fetch_identities(&self, count: usize) -> Result<Vec<Identity>, UpstreamError> {
        let response: RandomUserResponse = get_json(
            &self.client,
            Provider::Identity,
            &self.base_url,
            &[("results", count)],
        )
        .await?;

        Ok(response.results.into_iter().map(Identity::from).collect())
    }
}
