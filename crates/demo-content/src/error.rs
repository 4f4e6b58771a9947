use std::fmt;

use thiserror::Error;

/// The upstream API a call was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Content,
    Identity,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Content => f.write_str("content provider"),
            Provider::Identity => f.write_str("identity provider"),
        }
    }
}

/// Failure of a single upstream call.
///
/// The aggregator never surfaces these to its callers; any of them switches the
/// current batch over to fallback content.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{provider} request failed: {source}")]
    Http {
        provider: Provider,
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}")]
    Status { provider: Provider, status: u16 },

    #[error("{provider} timed out")]
    Timeout { provider: Provider },

    #[error("{provider} returned a malformed body: {source}")]
    Decode {
        provider: Provider,
        source: serde_json::Error,
    },

    #[error("{provider} returned {received} items, expected {expected}")]
    ShortBatch {
        provider: Provider,
        expected: usize,
        received: usize,
    },
}

impl UpstreamError {
    /// The provider the failed call was made against.
    pub fn provider(&self) -> Provider {
        match self {
            UpstreamError::Http { provider, .. }
            | UpstreamError::Status { provider, .. }
            | UpstreamError::Timeout { provider }
            | UpstreamError::Decode { provider, .. }
            | UpstreamError::ShortBatch { provider, .. } => *provider,
        }
    }

    pub(crate) fn from_reqwest(provider: Provider, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            UpstreamError::Timeout { provider }
        } else {
            UpstreamError::Http { provider, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_provider() {
        let err = UpstreamError::Status {
            provider: Provider::Content,
            status: 503,
        };
        assert_eq!(err.to_string(), "content provider returned status 503");

        let err = UpstreamError::ShortBatch {
            provider: Provider::Identity,
            expected: 3,
            received: 1,
        };
        assert_eq!(err.provider(), Provider::Identity);
        assert_eq!(
            err.to_string(),
            "identity provider returned 1 items, expected 3"
        );
    }
}
