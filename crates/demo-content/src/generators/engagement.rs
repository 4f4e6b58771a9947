//! Randomized engagement fields.
//!
//! Both the live and the fallback path draw from these so that their values follow the
//! same distributions.

use std::ops::RangeInclusive;

use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Likes on a generated post.
pub const LIKE_COUNT_RANGE: RangeInclusive<u32> = 50..=1049;

/// Followers of a generated user.
pub const FOLLOWER_COUNT_RANGE: RangeInclusive<u32> = 100..=10099;

/// Accounts a generated user follows.
pub const FOLLOWING_COUNT_RANGE: RangeInclusive<u32> = 50..=1049;

/// Posts published by a generated user.
pub const POST_COUNT_RANGE: RangeInclusive<u32> = 10..=109;

/// How far back a generated post may be dated.
pub const RECENCY_WINDOW: Duration = Duration::days(7);

/// Counters and follow state for a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub follower_count: u32,
    pub following_count: u32,
    pub post_count: u32,
    pub is_following: bool,
}

/// Uniform like count.
pub fn like_count(rng: &mut impl Rng) -> u32 {
    rng.gen_range(LIKE_COUNT_RANGE)
}

/// Uniform timestamp in `(now - RECENCY_WINDOW, now]`.
pub fn created_at(now: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
    let window_ms = RECENCY_WINDOW.whole_milliseconds() as i64;
    now - Duration::milliseconds(rng.gen_range(0..window_ms))
}

/// Uniform counters and a fair coin for the follow flag.
pub fn profile_stats(rng: &mut impl Rng) -> ProfileStats {
    ProfileStats {
        follower_count: rng.gen_range(FOLLOWER_COUNT_RANGE),
        following_count: rng.gen_range(FOLLOWING_COUNT_RANGE),
        post_count: rng.gen_range(POST_COUNT_RANGE),
        is_following: rng.gen_bool(0.5),
    }
}
