//! # tob-core
//!
//! Core crate for the top-of-book depth feed, providing:
//!
//! - **Types** (`types`) — depth events, price levels, snapshots
//! - **Configuration** (`config`) — JSON config deserialization
//! - **Error types** (`error`) — domain-specific `FeedError` via thiserror
//! - **WebSocket** (`ws`) — pull-style message source over tokio-tungstenite
//! - **Time utilities** (`time_util`) — wall-clock timestamps
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod time_util;
pub mod types;
pub mod ws;

// Re-export types at crate root for convenience.
pub use error::FeedError;
pub use types::*;
