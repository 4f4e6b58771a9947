//! HTTP request handlers for the demo content API.

pub mod demo;
pub mod health;

pub use demo::{
    __path_demo_posts, __path_demo_users, DEFAULT_POSTS_LIMIT, DEFAULT_USERS_COUNT,
    DemoPostsQuery, DemoUsersQuery, MAX_DEMO_ITEMS, demo_posts, demo_users,
};
pub use health::{__path_health_check, HealthResponse, health_check, route_not_found};

use validator::Validate;

use crate::errors::AppError;

/// Runs `validator` rules and folds every failure message into one `InvalidInput`.
pub(crate) fn validate_input(input: &impl Validate) -> Result<(), AppError> {
    input.validate().map_err(|e| {
        let messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            })
            .collect();
        AppError::InvalidInput(messages.join(", "))
    })
}
