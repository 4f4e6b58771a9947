//! Demo content aggregation.
//!
//! Posts fan out one identity lookup per skeleton; users come from one batched identity
//! request. Any upstream failure replaces the whole batch with fallback content, so a
//! response is never a mix of live and generated items.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::enrichment::{enrich_post, enrich_user};
use crate::error::{Provider, UpstreamError};
use crate::generators::FallbackGenerator;
use crate::models::{EnrichedPost, EnrichedUser};
use crate::sources::{
    ContentProvider, IdentityProvider, PicsumImages, PlaceholderClient, RandomUserClient,
};

/// Posts generated when the caller has no preference.
pub const DEFAULT_POST_LIMIT: usize = 10;

/// Users generated when the caller has no preference.
pub const DEFAULT_USER_COUNT: usize = 10;

/// Builds demo posts and users from the upstream providers.
#[derive(Clone)]
pub struct Aggregator {
    content: Arc<dyn ContentProvider>,
    identities: Arc<dyn IdentityProvider>,
    images: PicsumImages,
    fallback: FallbackGenerator,
    deadline: Duration,
}

impl Aggregator {
    /// Creates an aggregator over the given providers with the default deadline.
    pub fn new(
        content: Arc<dyn ContentProvider>,
        identities: Arc<dyn IdentityProvider>,
        images: PicsumImages,
    ) -> Self {
        Self {
            content,
            identities,
            images,
            fallback: FallbackGenerator::new(),
            deadline: ProviderConfig::default().timeout(),
        }
    }

    /// Creates an aggregator backed by the live HTTP clients.
    pub fn from_config(config: &ProviderConfig) -> reqwest::Result<Self> {
        let timeout = config.timeout();
        let content = PlaceholderClient::new(&config.content_base_url, timeout)?;
        let identities = RandomUserClient::new(&config.identity_base_url, timeout)?;

        Ok(Self::new(
            Arc::new(content),
            Arc::new(identities),
            PicsumImages::new(&config.image_base_url),
        )
        .with_deadline(timeout))
    }

    /// Bounds every upstream call by `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Replaces the fallback generator.
    pub fn with_fallback(mut self, fallback: FallbackGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns `limit` posts, live if every upstream call succeeds and generated otherwise.
    pub async fn get_demo_posts(
        &self,
        limit: usize,
        rng: &mut (impl Rng + Send),
    ) -> Vec<EnrichedPost> {
        match self.fetch_live_posts(limit, &mut *rng).await {
            Ok(posts) => posts,
            Err(error) => {
                warn!(%error, limit, "Falling back to generated demo posts");
                self.fallback.posts(limit, OffsetDateTime::now_utc(), rng)
            }
        }
    }

    /// Returns `count` users, live if the upstream call succeeds and generated otherwise.
    pub async fn get_demo_users(
        &self,
        count: usize,
        rng: &mut (impl Rng + Send),
    ) -> Vec<EnrichedUser> {
        match self.fetch_live_users(count, &mut *rng).await {
            Ok(users) => users,
            Err(error) => {
                warn!(%error, count, "Falling back to generated demo users");
                self.fallback.users(count, rng)
            }
        }
    }

    /// Builds `limit` posts from upstream data only.
    ///
    /// Identity lookups run concurrently. The first failure drops the lookups still in
    /// flight and fails the whole batch. Results keep skeleton order whatever order the
    /// lookups complete in.
    pub async fn fetch_live_posts(
        &self,
        limit: usize,
        rng: &mut (impl Rng + Send),
    ) -> Result<Vec<EnrichedPost>, UpstreamError> {
        let mut skeletons = self
            .bounded(Provider::Content, self.content.fetch_content_skeletons(limit))
            .await?;
        ensure_len(Provider::Content, skeletons.len(), limit)?;
        skeletons.truncate(limit);

        let identities = try_join_all(skeletons.iter().map(|skeleton| {
            let seed = skeleton.owner_seed.to_string();
            async move {
                self.bounded(Provider::Identity, self.identities.fetch_identity(&seed))
                    .await
            }
        }))
        .await?;

        debug!(count = skeletons.len(), "Enriching demo posts");

        let now = OffsetDateTime::now_utc();
        Ok(skeletons
            .iter()
            .zip(&identities)
            .enumerate()
            .map(|(i, (skeleton, identity))| {
                enrich_post(i, skeleton, identity, &self.images, now, rng)
            })
            .collect())
    }

    /// Builds `count` users from one batched upstream request.
    pub async fn fetch_live_users(
        &self,
        count: usize,
        rng: &mut (impl Rng + Send),
    ) -> Result<Vec<EnrichedUser>, UpstreamError> {
        let mut identities = self
            .bounded(Provider::Identity, self.identities.fetch_identities(count))
            .await?;
        ensure_len(Provider::Identity, identities.len(), count)?;
        identities.truncate(count);

        Ok(identities
            .into_iter()
            .enumerate()
            .map(|(i, identity)| enrich_user(i, identity, rng))
            .collect())
    }

    /// Runs an upstream call under the aggregator's deadline.
    async fn bounded<T>(
        &self,
        provider: Provider,
        call: impl Future<Output = Result<T, UpstreamError>>,
    ) -> Result<T, UpstreamError> {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout { provider }),
        }
    }
}

fn ensure_len(provider: Provider, received: usize, expected: usize) -> Result<(), UpstreamError> {
    if received < expected {
        return Err(UpstreamError::ShortBatch {
            provider,
            expected,
            received,
        });
    }
    Ok(())
}
