//! # tob-md
//!
//! Multi-symbol top-of-book market data engine.
//!
//! ## Architecture
//!
//! One stream worker per configured symbol owns a WebSocket connection and
//! runs `receive → parse → reduce → emit` until its connection ends. The
//! fan-in aggregator merges all worker output channels into one sequence that
//! the feed orchestrator drains into a snapshot sink.
//!
//! ```text
//! FeedConfig ──► worker (per symbol) ──► bounded channel ─┐
//!            ──► worker (per symbol) ──► bounded channel ─┼─► SnapshotFanIn ──► SnapshotSink
//!            ──► worker (per symbol) ──► bounded channel ─┘
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — raw depth message → [`tob_core::DepthEvent`]
//! - [`reduce`] — depth event → [`tob_core::DepthSnapshot`]
//! - [`worker`] — per-symbol connection owner
//! - [`fanin`] — dynamic many-channel merge
//! - [`sink`] — injected consumer of the merged sequence
//! - [`feed`] — orchestrator tying the above together

pub mod fanin;
pub mod feed;
pub mod parser;
pub mod reduce;
pub mod sink;
pub mod worker;

pub use fanin::SnapshotFanIn;
pub use feed::DepthFeed;
pub use sink::{LogSink, MemorySink, SnapshotSink};
pub use worker::StreamWorkerHandle;
