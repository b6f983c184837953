//! Snapshot sinks — the consumer side of the merged sequence.
//!
//! The sink is injected so the feed's output is observable without scraping
//! log text. [`LogSink`] is the production implementation; [`MemorySink`]
//! collects snapshots for assertions.

use tob_core::DepthSnapshot;
use tracing::info;

/// Consumer of the merged snapshot sequence.
///
/// Only `Send` is required: the feed records snapshots sequentially, never
/// concurrently. A `record` error means this one snapshot was unusable; the
/// feed drops it and keeps going.
pub trait SnapshotSink: Send {
    fn record(&mut self, snapshot: &DepthSnapshot) -> anyhow::Result<()>;
}

/// Logs each snapshot: symbol and capture time on one line, the serialized
/// `{"bid":…,"ask":…}` record on the next.
#[derive(Debug, Default)]
pub struct LogSink;

impl SnapshotSink for LogSink {
    fn record(&mut self, snapshot: &DepthSnapshot) -> anyhow::Result<()> {
        let body = serde_json::to_string(snapshot)?;
        info!("{} - {}", snapshot.symbol, snapshot.captured_at_ms);
        info!("{body}");
        Ok(())
    }
}

/// Collects snapshots in memory. Intended for tests and tooling.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub snapshots: Vec<DepthSnapshot>,
}

impl SnapshotSink for MemorySink {
    fn record(&mut self, snapshot: &DepthSnapshot) -> anyhow::Result<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tob_core::PriceLevel;

    #[test]
    fn memory_sink_collects_in_order() {
        let mut sink = MemorySink::default();
        for seq in 0..3u64 {
            let snap = DepthSnapshot {
                symbol: "btcusdt".into(),
                captured_at_ms: seq,
                bid: PriceLevel::default(),
                ask: PriceLevel::default(),
            };
            sink.record(&snap).unwrap();
        }
        let seqs: Vec<u64> = sink.snapshots.iter().map(|s| s.captured_at_ms).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }
}
