//! Local content generation.
//!
//! - [`templates`]: fixed caption and username tables, cycled by position
//! - [`engagement`]: randomized counters and timestamps shared by live and fallback output
//! - [`FallbackGenerator`]: network-free posts and users

pub mod engagement;
pub mod fallback;
pub mod templates;

pub use fallback::{FallbackConfig, FallbackGenerator};
