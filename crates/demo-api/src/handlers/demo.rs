//! Demo feed handlers.

use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
    response::Json,
};
use demo_content::{
    Aggregator,
    models::{EnrichedPost, EnrichedUser},
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use super::validate_input;
use crate::errors::{AppError, ErrorBody};

/// Posts returned when `limit` is omitted.
pub const DEFAULT_POSTS_LIMIT: i64 = 20;

/// Users returned when `count` is omitted.
pub const DEFAULT_USERS_COUNT: i64 = 15;

/// Upper bound for both endpoints; the content provider holds 100 posts.
pub const MAX_DEMO_ITEMS: i64 = 100;

fn default_posts_limit() -> i64 {
    DEFAULT_POSTS_LIMIT
}

fn default_users_count() -> i64 {
    DEFAULT_USERS_COUNT
}

/// Demo posts query parameters.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DemoPostsQuery {
    /// Number of posts to return (1-100).
    #[serde(default = "default_posts_limit")]
    #[validate(range(min = 1, max = MAX_DEMO_ITEMS, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

/// Demo users query parameters.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DemoUsersQuery {
    /// Number of users to return (1-100).
    #[serde(default = "default_users_count")]
    #[validate(range(min = 1, max = MAX_DEMO_ITEMS, message = "count must be between 1 and 100"))]
    pub count: i64,
}

fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

/// Get demo feed posts.
///
/// Always answers with `limit` posts; when an upstream provider fails the posts are
/// generated locally instead.
#[utoipa::path(
    get,
    path = "/api/demo/posts",
    tag = "demo",
    params(DemoPostsQuery),
    responses(
        (status = 200, description = "Demo posts", body = Vec<EnrichedPost>),
        (status = 400, description = "Invalid limit", body = ErrorBody)
    )
)]
pub async fn demo_posts(
    Extension(aggregator): Extension<Aggregator>,
    query: Result<Query<DemoPostsQuery>, QueryRejection>,
) -> Result<Json<Vec<EnrichedPost>>, AppError> {
    let params = parse_query(query)?;
    validate_input(&params)?;

    let mut rng = StdRng::from_entropy();
    let posts = aggregator
        .get_demo_posts(params.limit as usize, &mut rng)
        .await;
    Ok(Json(posts))
}

/// Get demo user profiles.
#[utoipa::path(
    get,
    path = "/api/demo/users",
    tag = "demo",
    params(DemoUsersQuery),
    responses(
        (status = 200, description = "Demo users", body = Vec<EnrichedUser>),
        (status = 400, description = "Invalid count", body = ErrorBody)
    )
)]
pub async fn demo_users(
    Extension(aggregator): Extension<Aggregator>,
    query: Result<Query<DemoUsersQuery>, QueryRejection>,
) -> Result<Json<Vec<EnrichedUser>>, AppError> {
    let params = parse_query(query)?;
    validate_input(&params)?;

    let mut rng = StdRng::from_entropy();
    let users = aggregator
        .get_demo_users(params.count as usize, &mut rng)
        .await;
    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert!(validate_input(&DemoPostsQuery { limit: 1 }).is_ok());
        assert!(validate_input(&DemoPostsQuery { limit: MAX_DEMO_ITEMS }).is_ok());

        let err = validate_input(&DemoPostsQuery { limit: 0 }).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: limit must be between 1 and 100");

        assert!(validate_input(&DemoUsersQuery { count: 101 }).is_err());
        assert!(validate_input(&DemoUsersQuery { count: -3 }).is_err());
    }

    #[test]
    fn test_defaults_apply() {
        let posts: DemoPostsQuery = serde_json::from_str("{}").unwrap();
        let users: DemoUsersQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(posts.limit, DEFAULT_POSTS_LIMIT);
        assert_eq!(users.count, DEFAULT_USERS_COUNT);
    }
}
