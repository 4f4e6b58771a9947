//! Merging upstream records into enriched entities.
//!
//! Presentation fields are picked by batch position, never by content.

use rand::Rng;
use time::OffsetDateTime;

use crate::generators::{engagement, templates};
use crate::models::{ContentSkeleton, EnrichedPost, EnrichedUser, Identity, PostAuthor};
use crate::sources::PicsumImages;

/// Edge length of post images.
pub const POST_IMAGE_SIZE: u32 = 600;

/// Discriminator of the first post image in a batch.
pub const IMAGE_DISCRIMINATOR_BASE: u64 = 100;

/// Builds the post at batch position `index` from its skeleton and author identity.
pub fn enrich_post(
    index: usize,
    skeleton: &ContentSkeleton,
    identity: &Identity,
    images: &PicsumImages,
    now: OffsetDateTime,
    rng: &mut impl Rng,
) -> EnrichedPost {
    EnrichedPost {
        id: format!("demo-{}", skeleton.id),
        caption: templates::caption_at(index).to_string(),
        image: images.build_image_url(
            POST_IMAGE_SIZE,
            POST_IMAGE_SIZE,
            IMAGE_DISCRIMINATOR_BASE + index as u64,
        ),
        author: PostAuthor {
            id: skeleton.owner_seed,
            username: templates::username_at(index).to_string(),
            name: identity.full_name(),
            avatar: identity.avatar.clone(),
        },
        like_count: engagement::like_count(rng),
        comments: Vec::new(),
        created_at: engagement::created_at(now, rng),
    }
}

/// Builds the user at batch position `index` from an upstream identity.
pub fn enrich_user(index: usize, identity: Identity, rng: &mut impl Rng) -> EnrichedUser {
    let stats = engagement::profile_stats(rng);
    let bio = format!("{}'s Instagram profile", identity.first_name);

    EnrichedUser {
        id: index as u32 + 1,
        name: identity.full_name(),
        username: identity.username,
        avatar: identity.avatar,
        follower_count: stats.follower_count,
        following_count: stats.following_count,
        post_count: stats.post_count,
        bio,
        is_following: stats.is_following,
    }
}
