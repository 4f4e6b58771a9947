//! Demo social feed content.
//!
//! This crate builds the posts and user profiles served by the demo feed endpoints. Live
//! content is stitched together from three free upstream APIs (a placeholder post source,
//! a random identity source, and an image URL template) and decorated with presentation
//! fields. When any upstream call fails the whole batch is replaced by locally generated
//! content with the same shape.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_content::prelude::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let aggregator = Aggregator::from_config(&ProviderConfig::default())?;
//! let mut rng = StdRng::from_entropy();
//!
//! let posts = aggregator.get_demo_posts(20, &mut rng).await;
//! let users = aggregator.get_demo_users(15, &mut rng).await;
//! ```

pub mod aggregator;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod generators;
pub mod models;
pub mod sources;

pub use aggregator::Aggregator;
pub use error::{Provider, UpstreamError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::aggregator::{Aggregator, DEFAULT_POST_LIMIT, DEFAULT_USER_COUNT};
    pub use crate::config::ProviderConfig;
    pub use crate::error::{Provider, UpstreamError};
    pub use crate::generators::{FallbackConfig, FallbackGenerator};
    pub use crate::models::{
        Comment, ContentSkeleton, EnrichedPost, EnrichedUser, Identity, PostAuthor,
    };
    pub use crate::sources::{
        ContentProvider, IdentityProvider, PicsumImages, PlaceholderClient, RandomUserClient,
    };
}
