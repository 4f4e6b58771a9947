//! Integration tests for the HTTP provider clients.
//!
//! Each test starts a throwaway axum server on 127.0.0.1 that imitates the upstream
//! APIs, then points the real reqwest-based clients at it.

use std::collections::HashMap;
use std::time::Duration;

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use demo_content::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use serde_json::{Value, json};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}")
}

fn person(seed: &str) -> Value {
    json!({
        "gender": "female",
        "name": {"title": "Ms", "first": format!("Ada{seed}"), "last": "Lovelace"},
        "login": {"username": format!("ada_{seed}")},
        "picture": {
            "large": format!("https://portraits.test/large/{seed}.jpg"),
            "medium": format!("https://portraits.test/med/{seed}.jpg"),
            "thumbnail": format!("https://portraits.test/thumb/{seed}.jpg")
        }
    })
}

async fn posts(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: u64 = params
        .get("_limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(100);
    let posts: Vec<Value> = (1..=limit.min(100))
        .map(|id| json!({"userId": (id - 1) / 10 + 1, "id": id, "title": "t", "body": "b"}))
        .collect();
    Json(Value::Array(posts))
}

async fn people(Query(params): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    if let Some(seed) = params.get("seed") {
        if seed == "2" {
            return Err(StatusCode::BAD_GATEWAY);
        }
        return Ok(Json(json!({"results": [person(seed)], "info": {"seed": seed}})));
    }
    let count: usize = params
        .get("results")
        .and_then(|c| c.parse().ok())
        .unwrap_or(1);
    let results: Vec<Value> = (0..count).map(|i| person(&i.to_string())).collect();
    Ok(Json(json!({"results": results})))
}

fn upstream() -> Router {
    Router::new()
        .route("/posts", get(posts))
        .route("/api", get(people))
}

fn config(base: &str) -> ProviderConfig {
    ProviderConfig {
        content_base_url: base.to_string(),
        identity_base_url: format!("{base}/api"),
        image_base_url: "https://picsum.photos".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_placeholder_client_fetches_requested_limit() {
    let base = spawn_upstream(upstream()).await;
    let client = PlaceholderClient::new(&base, Duration::from_secs(5)).unwrap();

    let skeletons = client.fetch_content_skeletons(12).await.unwrap();

    assert_eq!(skeletons.len(), 12);
    assert_eq!(skeletons[0].id, 1);
    assert_eq!(skeletons[11].owner_seed, 2);
}

#[tokio::test]
async fn test_placeholder_client_maps_error_status() {
    let router = Router::new().route(
        "/posts",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base = spawn_upstream(router).await;
    let client = PlaceholderClient::new(&base, Duration::from_secs(5)).unwrap();

    let err = client.fetch_content_skeletons(3).await.unwrap_err();

    assert!(matches!(
        err,
        UpstreamError::Status {
            provider: Provider::Content,
            status: 503
        }
    ));
}

#[tokio::test]
async fn test_placeholder_client_rejects_malformed_body() {
    let router = Router::new().route("/posts", get(|| async { "<html>not json</html>" }));
    let base = spawn_upstream(router).await;
    let client = PlaceholderClient::new(&base, Duration::from_secs(5)).unwrap();

    let err = client.fetch_content_skeletons(3).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Decode { .. }));
}

#[tokio::test]
async fn test_placeholder_client_times_out() {
    let router = Router::new().route(
        "/posts",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let base = spawn_upstream(router).await;
    let client = PlaceholderClient::new(&base, Duration::from_millis(100)).unwrap();

    let err = client.fetch_content_skeletons(3).await.unwrap_err();

    assert!(matches!(
        err,
        UpstreamError::Timeout {
            provider: Provider::Content
        }
    ));
}

#[tokio::test]
async fn test_random_user_client_fetches_by_seed_and_batch() {
    let base = spawn_upstream(upstream()).await;
    let client = RandomUserClient::new(format!("{base}/api"), Duration::from_secs(5)).unwrap();

    let identity = client.fetch_identity("7").await.unwrap();
    assert_eq!(identity.full_name(), "Ada7 Lovelace");
    assert_eq!(identity.username, "ada_7");
    assert_eq!(identity.avatar, "https://portraits.test/med/7.jpg");

    let batch = client.fetch_identities(4).await.unwrap();
    let usernames: Vec<&str> = batch.iter().map(|i| i.username.as_str()).collect();
    assert_eq!(usernames, vec!["ada_0", "ada_1", "ada_2", "ada_3"]);
}

#[tokio::test]
async fn test_random_user_client_rejects_empty_results() {
    let router = Router::new().route("/api", get(|| async { Json(json!({"results": []})) }));
    let base = spawn_upstream(router).await;
    let client = RandomUserClient::new(format!("{base}/api"), Duration::from_secs(5)).unwrap();

    let err = client.fetch_identity("1").await.unwrap_err();

    assert!(matches!(
        err,
        UpstreamError::ShortBatch {
            provider: Provider::Identity,
            expected: 1,
            received: 0
        }
    ));
}

#[tokio::test]
async fn test_aggregator_serves_live_posts_from_upstream() {
    let base = spawn_upstream(upstream()).await;
    let aggregator = Aggregator::from_config(&config(&base)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    // Posts 1..=10 all belong to seed 1, which the upstream serves
    let posts = aggregator.get_demo_posts(10, &mut rng).await;

    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].id, "demo-1");
    assert_eq!(posts[0].author.name, "Ada1 Lovelace");
    assert_eq!(posts[0].image, "https://picsum.photos/600/600?random=100");
    assert_eq!(posts[9].author.username, "creative_mind");
}

#[tokio::test]
async fn test_aggregator_falls_back_when_one_identity_fails() {
    let base = spawn_upstream(upstream()).await;
    let aggregator = Aggregator::from_config(&config(&base)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    // Post 11 belongs to seed 2, which the upstream rejects
    let posts = aggregator.get_demo_posts(11, &mut rng).await;

    assert_eq!(posts.len(), 11);
    assert!(posts.iter().all(|p| p.caption.starts_with("Demo post")));
    assert!(posts.iter().all(|p| p.image.starts_with("/src/assets/")));
}

#[tokio::test]
async fn test_aggregator_serves_live_users_from_upstream() {
    let base = spawn_upstream(upstream()).await;
    let aggregator = Aggregator::from_config(&config(&base)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let users = aggregator.get_demo_users(3, &mut rng).await;

    let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[0].username, "ada_0");
    assert_eq!(users[2].bio, "Ada2's Instagram profile");
}

#[tokio::test]
async fn test_aggregator_falls_back_when_upstream_unreachable() {
    // Nothing listens on port 9 of localhost
    let aggregator = Aggregator::from_config(&config("http://127.0.0.1:9")).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let users = aggregator.get_demo_users(4, &mut rng).await;

    assert_eq!(users.len(), 4);
    assert_eq!(users[3].name, "Demo User 4");
}
