//! Per-request correlation for the demo feed.
//!
//! Each request gets a [`RequestId`] (the caller's `x-request-id` when usable, a fresh
//! UUID otherwise) and runs inside a `request` span tagged with the feed it asked for.
//! Aggregator fallback warnings are emitted inside that span, so a degraded response can
//! be traced back to the request that received it.

use std::fmt;
use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest caller-supplied ID that is reused as is.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation ID stored in the request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Reuses the caller's ID when it is non-empty, short and visible ASCII.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| {
                !id.is_empty()
                    && id.len() <= MAX_REQUEST_ID_LEN
                    && id.bytes().all(|b| b.is_ascii_graphic())
            })
            .map(|id| Self(id.to_string()))
            .unwrap_or_else(|| Self(Uuid::new_v4().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which part of the API a path belongs to, for log filtering.
pub fn feed_kind(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "/api/demo/posts" => "posts",
        "/api/demo/users" => "users",
        "/api/health" => "health",
        p if p.starts_with("/swagger-ui") || p.starts_with("/api-docs") => "docs",
        _ => "other",
    }
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response<Body> {
    let request_id = RequestId::from_headers(request.headers());
    request.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        feed = feed_kind(request.uri().path()),
        query = request.uri().query().unwrap_or(""),
    );

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }

        let status = response.status().as_u16();
        if response.status().is_server_error() {
            tracing::warn!(status, elapsed_ms, "Demo request failed");
        } else {
            tracing::info!(status, elapsed_ms, "Demo request served");
        }

        response
    }
    .instrument(span)
    .await
}
