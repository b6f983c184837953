//! Per-symbol stream worker.
//!
//! Each worker owns exactly one connection and one sending half of a bounded
//! channel. Lifecycle: connect, then loop `receive → parse → reduce → emit`
//! until the connection ends. A connect or receive failure terminates only
//! this symbol's stream; the output channel closes when the sender is
//! dropped, which is how the aggregator observes end-of-stream.
//!
//! The output channel has capacity [`HANDOFF_CAPACITY`] — a slow aggregator
//! stalls the producing worker on `send` rather than dropping or buffering
//! snapshots without bound.

use tob_core::DepthSnapshot;
use tob_core::ws::{MessageSource, WsSource};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{parser, reduce};

/// Output channel capacity per worker — a rendezvous-style handoff.
pub const HANDOFF_CAPACITY: usize = 1;

/// The receiving half of one worker's output, tagged with its symbol.
///
/// Created at startup, one per configured symbol; retired by the aggregator
/// when the channel closes.
pub struct StreamWorkerHandle {
    pub symbol: String,
    pub rx: mpsc::Receiver<DepthSnapshot>,
}

/// Spawn the worker task for one symbol and return its handle.
///
/// The task connects to `url` and streams until the connection ends. All
/// exit paths drop the connection and the channel sender, so the handle's
/// channel always closes.
pub fn spawn_symbol_worker(url: String, symbol: String) -> StreamWorkerHandle {
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
    let sym = symbol.clone();

    tokio::spawn(async move {
        info!("starting {sym} depth stream");
        let mut source = match WsSource::connect(&url).await {
            Ok(source) => source,
            Err(e) => {
                error!("[{sym}] couldn't open stream: {e}");
                return; // tx drops here — downstream sees end-of-stream
            }
        };
        stream_symbol(&sym, &mut source, tx).await;
        source.close().await;
    });

    StreamWorkerHandle { symbol, rx }
}

/// The streaming state of a worker: receive, parse, reduce, emit.
///
/// Returns when the source ends (cleanly or with a connection-level error)
/// or when the consumer side of `tx` is gone. A per-message decode failure
/// is logged and skipped — one bad message must not kill the stream.
pub async fn stream_symbol<S: MessageSource>(
    symbol: &str,
    source: &mut S,
    tx: mpsc::Sender<DepthSnapshot>,
) {
    loop {
        let text = match source.next_message().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!("[{symbol}] stream closed");
                return;
            }
            Err(e) => {
                error!("[{symbol}] receiving failed: {e}");
                return;
            }
        };

        let event = match parser::parse_depth_event(&text) {
            Ok(event) => event,
            Err(e) => {
                warn!("[{symbol}] skipping undecodable message: {e}");
                continue;
            }
        };

        let snapshot = reduce::reduce_event(&event);
        if tx.send(snapshot).await.is_err() {
            debug!("[{symbol}] consumer gone, stopping");
            return;
        }
    }
}
