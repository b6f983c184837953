//! Typed error definitions for the depth feed.
//!
//! Provides [`FeedError`] for domain-specific errors that are more informative
//! than plain `anyhow::Error` strings. All variants implement `std::error::Error`
//! via `thiserror`, so they integrate seamlessly with `anyhow::Result`.
//!
//! The variants mirror the failure scopes of the system: `Connect` and
//! `Receive` are fatal for the worker that hit them (its stream ends, no other
//! symbol is affected), `Decode` is recoverable per message. Entry-level
//! price/quantity parse failures never surface here — the reducer skips the
//! offending entry and keeps going.

use thiserror::Error;

/// Domain-specific errors for the depth feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),

    /// WebSocket connection or handshake error (fatal for one symbol stream).
    #[error("connect error: {0}")]
    Connect(String),

    /// In-progress receive error on an established connection (fatal for one
    /// symbol stream).
    #[error("receive error: {0}")]
    Receive(String),

    /// Malformed message body (recoverable — skip the message).
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// Whether this error ends the stream it occurred on.
    ///
    /// `Decode` errors are absorbed per message; everything else terminates
    /// the owning worker.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FeedError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_recoverable() {
        let err: FeedError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_fatal());
    }

    #[test]
    fn connection_errors_are_fatal() {
        assert!(FeedError::Connect("refused".into()).is_fatal());
        assert!(FeedError::Receive("reset".into()).is_fatal());
    }
}
