//! Failure taxonomy for upstream generative-API requests
//!
//! These are not process errors: the dispatcher retries them up to its
//! attempt cap and then degrades to "no result". Quota-related failures
//! additionally force key rotation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    #[error("authentication failed (invalid API key)")]
    AuthenticationFailed,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("request quota exceeded")]
    QuotaExceeded,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("server error: {0}")]
    ServerError(String),

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("empty response from model")]
    EmptyResponse,

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ApiFailure {
    /// Whether this failure indicates the key itself is out of capacity.
    ///
    /// Typed variants are matched directly; free-text variants fall back to
    /// the upstream error message.
    pub fn is_quota_related(&self) -> bool {
        match self {
            ApiFailure::RateLimitExceeded | ApiFailure::QuotaExceeded => true,
            ApiFailure::ServerError(message) | ApiFailure::Unknown(message) => {
                let message = message.to_lowercase();
                message.contains("quota") || message.contains("limit")
            }
            _ => false,
        }
    }
}
