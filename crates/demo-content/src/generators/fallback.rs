//! Offline posts and users used when an upstream call fails.

use rand::Rng;
use time::OffsetDateTime;

use super::engagement;
use crate::models::{EnrichedPost, EnrichedUser, PostAuthor};

/// Configuration for fallback generation.
#[derive(Debug, Clone)]
pub struct FallbackConfig {
    /// Prefix of the frontend's bundled assets.
    pub asset_prefix: String,
    /// Number of bundled post images (`img1.jpg` ..).
    pub post_image_count: usize,
    /// Number of distinct authors posts are attributed to.
    pub author_pool_size: usize,
    /// Number of bundled avatar images (`user1.jpg` ..).
    pub avatar_pool_size: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            asset_prefix: "/src/assets".to_string(),
            post_image_count: 9,
            author_pool_size: 5,
            avatar_pool_size: 15,
        }
    }
}

/// Generates posts and users without touching the network.
///
/// Output has exactly the same fields as live output; only the values differ.
#[derive(Debug, Clone, Default)]
pub struct FallbackGenerator {
    config: FallbackConfig,
}

impl FallbackGenerator {
    /// Creates a fallback generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: FallbackConfig) -> Self {
        Self { config }
    }

    /// Generates `limit` posts dated relative to `now`.
    pub fn posts(&self, limit: usize, now: OffsetDateTime, rng: &mut impl Rng) -> Vec<EnrichedPost> {
        (0..limit)
            .map(|i| {
                let n = i + 1;
                let author = slot(i, self.config.author_pool_size);

                EnrichedPost {
                    id: format!("demo-{n}"),
                    caption: format!("Demo post {n}"),
                    image: format!(
                        "{}/img{}.jpg",
                        self.config.asset_prefix,
                        slot(i, self.config.post_image_count)
                    ),
                    author: PostAuthor {
                        id: author as u64,
                        username: format!("user{author}"),
                        name: format!("Demo User {author}"),
                        avatar: self.avatar(i),
                    },
                    like_count: engagement::like_count(rng),
                    comments: Vec::new(),
                    created_at: engagement::created_at(now, rng),
                }
            })
            .collect()
    }

    /// Generates `count` users with ids `1..=count`.
    pub fn users(&self, count: usize, rng: &mut impl Rng) -> Vec<EnrichedUser> {
        (0..count)
            .map(|i| {
                let n = i + 1;
                let stats = engagement::profile_stats(rng);

                EnrichedUser {
                    id: n as u32,
                    username: format!("user{n}"),
                    name: format!("Demo User {n}"),
                    avatar: self.avatar(i),
                    follower_count: stats.follower_count,
                    following_count: stats.following_count,
                    post_count: stats.post_count,
                    bio: format!("Demo user {n}'s profile"),
                    is_following: stats.is_following,
                }
            })
            .collect()
    }

    fn avatar(&self, index: usize) -> String {
        format!(
            "{}/user{}.jpg",
            self.config.asset_prefix,
            slot(index, self.config.avatar_pool_size)
        )
    }
}

/// 1-based position of `index` in a pool of `size` entries.
fn slot(index: usize, size: usize) -> usize {
    index % size.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_posts_length_and_fields() {
        let generator = FallbackGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let posts = generator.posts(12, OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(posts.len(), 12);
        for post in &posts {
            assert!(!post.id.is_empty());
            assert!(!post.caption.is_empty());
            assert!(post.image.starts_with("/src/assets/img"));
            assert!(!post.author.username.is_empty());
            assert!(post.comments.is_empty());
            assert!(engagement::LIKE_COUNT_RANGE.contains(&post.like_count));
        }
    }

    #[test]
    fn test_posts_cycle_local_pools() {
        let generator = FallbackGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let posts = generator.posts(16, OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(posts[0].id, "demo-1");
        assert_eq!(posts[0].caption, "Demo post 1");
        assert_eq!(posts[0].image, "/src/assets/img1.jpg");
        assert_eq!(posts[9].image, "/src/assets/img1.jpg");
        assert_eq!(posts[5].author.username, "user1");
        assert_eq!(posts[5].author.name, "Demo User 1");
        assert_eq!(posts[4].author.id, 5);
        assert_eq!(posts[15].author.avatar, "/src/assets/user1.jpg");
    }

    #[test]
    fn test_users_sequential_ids() {
        let generator = FallbackGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let users = generator.users(20, &mut rng);

        let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
        assert_eq!(users[2].username, "user3");
        assert_eq!(users[2].bio, "Demo user 3's profile");
        assert_eq!(users[15].avatar, "/src/assets/user1.jpg");
    }

    #[test]
    fn test_zero_sized_pool_does_not_panic() {
        let generator = FallbackGenerator::with_config(FallbackConfig {
            author_pool_size: 0,
            ..FallbackConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        let posts = generator.posts(3, OffsetDateTime::now_utc(), &mut rng);
        assert!(posts.iter().all(|p| p.author.username == "user1"));
    }
}
