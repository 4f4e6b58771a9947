//! Upstream records and the enriched entities served to clients.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Raw post skeleton from the placeholder content provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSkeleton {
    pub id: u64,
    /// Upstream owner id, reused as the identity provider seed.
    pub owner_seed: u64,
    pub title: String,
    pub body: String,
}

/// Synthetic person from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Medium resolution portrait URL.
    pub avatar: String,
}

impl Identity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Author embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub avatar: String,
}

/// Comment on a post. Generated posts always start without any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub username: String,
    pub text: String,
}

/// A feed post ready to be rendered by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPost {
    pub id: String,
    pub caption: String,
    pub image: String,
    pub author: PostAuthor,
    pub like_count: u32,
    pub comments: Vec<Comment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A user profile card ready to be rendered by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedUser {
    /// Position in the generated batch, starting at 1.
    pub id: u32,
    pub username: String,
    pub name: String,
    pub avatar: String,
    pub follower_count: u32,
    pub following_count: u32,
    pub post_count: u32,
    pub bio: String,
    pub is_following: bool,
}
