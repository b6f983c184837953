//! Depth event and top-of-book snapshot structures.
//!
//! [`DepthEvent`] is the transient, owned form of one incremental order-book
//! update as Binance sends it; it lives only between decode and reduction.
//! [`DepthSnapshot`] is the reduced result handed from a stream worker to the
//! aggregator and on to the consumer.
//!
//! # Timestamp convention
//!
//! The exchange event time (`E`) is in milliseconds since Unix epoch, and the
//! locally assigned capture time on snapshots uses the same resolution.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DepthEvent — one raw diff-depth update
// ---------------------------------------------------------------------------

/// One incremental depth update for a single symbol.
///
/// Field names map to the Binance `depthUpdate` wire schema. All fields are
/// defaulted so a sparse message still decodes — upstream occasionally omits
/// fields, and unknown extra fields are ignored. Bid/ask entries are kept as
/// raw string vectors; entries with fewer than two elements or non-numeric
/// values are skipped during reduction, not at decode time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepthEvent {
    /// Event type (`"depthUpdate"`).
    #[serde(rename = "e", default)]
    pub event_type: String,

    /// Event time in milliseconds since Unix epoch.
    #[serde(rename = "E", default)]
    pub event_time_ms: u64,

    /// Symbol, as sent by the exchange (e.g. `"BTCUSDT"`).
    #[serde(rename = "s", default)]
    pub symbol: String,

    /// First update ID in this event.
    #[serde(rename = "U", default)]
    pub first_update_id: u64,

    /// Final update ID in this event.
    #[serde(rename = "u", default)]
    pub final_update_id: u64,

    /// Changed bid levels as `[price, quantity]` decimal strings.
    #[serde(rename = "b", default)]
    pub bids: Vec<Vec<String>>,

    /// Changed ask levels as `[price, quantity]` decimal strings.
    #[serde(rename = "a", default)]
    pub asks: Vec<Vec<String>>,
}

// ---------------------------------------------------------------------------
// PriceLevel / DepthSnapshot — the reduced output
// ---------------------------------------------------------------------------

/// One side of a top-of-book snapshot.
///
/// The all-zero value is the sentinel for "no valid level in this update".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    pub amount: f64,
}

impl PriceLevel {
    pub fn new(price: f64, amount: f64) -> Self {
        Self { price, amount }
    }

    /// Whether this is the "no valid level" sentinel.
    pub fn is_empty(&self) -> bool {
        self.price == 0.0 && self.amount == 0.0
    }
}

/// Best bid and best ask extracted from one depth event.
///
/// Immutable once constructed; ownership passes worker → aggregator → sink
/// through the channel handoff. Serialization intentionally covers only the
/// two levels — `{"bid":{…},"ask":{…}}` is the consumer wire shape, with
/// symbol and capture time surfaced alongside by the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthSnapshot {
    #[serde(skip_serializing)]
    pub symbol: String,

    /// Capture time assigned at reduction, milliseconds since Unix epoch.
    #[serde(skip_serializing)]
    pub captured_at_ms: u64,

    pub bid: PriceLevel,
    pub ask: PriceLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_event() {
        let json = r#"{"e":"depthUpdate","E":1672515782136,"s":"BTCUSDT","U":157,"u":160,
                       "b":[["16500.50","0.25"]],"a":[["16501.00","1.00"],["16502.00","0.50"]]}"#;
        let ev: DepthEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.event_type, "depthUpdate");
        assert_eq!(ev.symbol, "BTCUSDT");
        assert_eq!(ev.first_update_id, 157);
        assert_eq!(ev.final_update_id, 160);
        assert_eq!(ev.bids.len(), 1);
        assert_eq!(ev.asks.len(), 2);
        assert_eq!(ev.bids[0], vec!["16500.50", "0.25"]);
    }

    #[test]
    fn decode_tolerates_missing_and_unknown_fields() {
        let ev: DepthEvent = serde_json::from_str(r#"{"s":"ETHUSDT","zz":true}"#).unwrap();
        assert_eq!(ev.symbol, "ETHUSDT");
        assert!(ev.bids.is_empty());
        assert!(ev.asks.is_empty());
    }

    #[test]
    fn decode_keeps_short_entries() {
        // A one-element level must survive decoding; the reducer skips it.
        let ev: DepthEvent =
            serde_json::from_str(r#"{"s":"X","b":[["10.0"]],"a":[]}"#).unwrap();
        assert_eq!(ev.bids[0].len(), 1);
    }

    #[test]
    fn snapshot_serializes_to_wire_shape() {
        let snap = DepthSnapshot {
            symbol: "BTCUSDT".into(),
            captured_at_ms: 1_700_000_000_000,
            bid: PriceLevel::new(10.0, 2.0),
            ask: PriceLevel::new(10.8, 3.0),
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bid": {"price": 10.0, "amount": 2.0},
                "ask": {"price": 10.8, "amount": 3.0},
            })
        );
    }

    #[test]
    fn zero_level_is_sentinel() {
        assert!(PriceLevel::default().is_empty());
        assert!(!PriceLevel::new(5.0, 1.0).is_empty());
    }
}
