//! Feed orchestrator.
//!
//! Spawns one stream worker per configured symbol, merges their outputs
//! through [`SnapshotFanIn`], and records every snapshot with the injected
//! sink. Runs until every symbol stream has terminated on its own — there is
//! no internal timeout or retry; a symbol whose connection fails simply
//! stops contributing.

use tob_core::config::FeedConfig;
use tracing::{info, warn};

use crate::fanin::SnapshotFanIn;
use crate::sink::SnapshotSink;
use crate::worker::{StreamWorkerHandle, spawn_symbol_worker};

/// The multi-symbol top-of-book feed.
pub struct DepthFeed {
    config: FeedConfig,
}

impl DepthFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    /// Launch all workers and drain the merged sequence into `sink`.
    ///
    /// Returns when the last symbol stream has closed.
    pub async fn run(&self, sink: &mut dyn SnapshotSink) {
        let handles: Vec<StreamWorkerHandle> = self
            .config
            .symbols
            .iter()
            .map(|symbol| spawn_symbol_worker(self.config.stream_url(symbol), symbol.clone()))
            .collect();

        info!("feed started — {} symbol stream(s)", handles.len());
        drain(SnapshotFanIn::new(handles), sink).await;
        info!("all symbol streams terminated");
    }
}

/// Drain a fan-in into a sink until the merged sequence is exhausted.
///
/// A snapshot the sink cannot use is dropped with a warning; the merge keeps
/// running.
pub async fn drain(mut merged: SnapshotFanIn, sink: &mut dyn SnapshotSink) {
    while let Some(snapshot) = merged.next().await {
        if let Err(e) = sink.record(&snapshot) {
            warn!("dropping unusable snapshot for {}: {e}", snapshot.symbol);
        }
    }
}
