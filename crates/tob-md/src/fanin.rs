//! Dynamic fan-in over the workers' output channels.
//!
//! Merges a fixed-at-startup but individually-terminating set of per-symbol
//! channels into one sequence. Built on [`tokio_stream::StreamMap`], which
//! waits on all still-open streams without busy polling, picks among
//! simultaneously-ready streams in randomized (non-starving) order, and
//! removes a stream from the wait set when it finishes — exactly the
//! "remove a source without restarting the others" behavior the merge needs.
//!
//! Per-producer FIFO order survives the merge; cross-producer interleaving
//! is unspecified by design.

use tob_core::DepthSnapshot;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{StreamExt, StreamMap};
use tracing::debug;

use crate::worker::StreamWorkerHandle;

/// Merges all stream workers' outputs into one snapshot sequence.
///
/// Streams are keyed by their position in the handle list, not by symbol,
/// so two handles carrying the same symbol can never alias (an aliased
/// insert would silently replace — and drop — the first producer's stream).
pub struct SnapshotFanIn {
    streams: StreamMap<usize, ReceiverStream<DepthSnapshot>>,
}

impl SnapshotFanIn {
    /// Take ownership of the workers' receive ends.
    pub fn new(handles: Vec<StreamWorkerHandle>) -> Self {
        let mut streams = StreamMap::with_capacity(handles.len());
        for (idx, handle) in handles.into_iter().enumerate() {
            streams.insert(idx, ReceiverStream::new(handle.rx));
        }
        Self { streams }
    }

    /// Number of producers that have not yet terminated.
    pub fn active_producers(&self) -> usize {
        self.streams.len()
    }

    /// Next snapshot from whichever producer is ready first.
    ///
    /// Blocks until a snapshot arrives; returns `None` exactly when every
    /// producer channel has closed.
    pub async fn next(&mut self) -> Option<DepthSnapshot> {
        let before = self.streams.len();
        match self.streams.next().await {
            Some((_idx, snapshot)) => Some(snapshot),
            None => {
                debug!("all {before} producer stream(s) terminated");
                None
            }
        }
    }
}
