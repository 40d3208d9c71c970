//! Quote fetch error types

use thiserror::Error;

/// Quote fetch error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct QuoteError {
    pub kind: QuoteErrorKind,
    pub message: String,
}

impl QuoteError {
    pub fn new(kind: QuoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::Auth, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::ServerError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::InvalidResponse, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(QuoteErrorKind::Unknown, message)
    }
}

/// Error classification, for logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorKind {
    /// Connect failures, timeouts
    Network,
    /// 401, 403
    Auth,
    /// 429
    RateLimit,
    /// 5xx
    ServerError,
    /// Unparseable body or a non-positive price
    InvalidResponse,
    Unknown,
}
