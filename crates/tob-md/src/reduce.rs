//! Top-of-book reduction.
//!
//! Collapses one [`DepthEvent`] into the best bid (highest price) and best
//! ask (lowest price) among the event's usable entries. Uses `fast-float2`
//! for string-to-f64 conversion, like the rest of the hot path.
//!
//! An entry is usable when it has at least two fields, both parse as f64,
//! and the quantity is not exactly zero (a zero quantity is a removed level,
//! never a live one). Unusable entries are skipped with a warning; they never
//! reject the whole event. An event with no usable entries on a side yields
//! the zero-valued sentinel level for that side.

use tob_core::{DepthEvent, DepthSnapshot, PriceLevel, time_util};
use tracing::warn;

/// Reduce a depth event to a snapshot, stamping the capture time.
///
/// Never fails: a side with no usable level comes out as the zero sentinel.
pub fn reduce_event(event: &DepthEvent) -> DepthSnapshot {
    DepthSnapshot {
        symbol: event.symbol.clone(),
        captured_at_ms: time_util::now_ms(),
        bid: best_bid(&event.bids),
        ask: best_ask(&event.asks),
    }
}

/// Parse one `[price, quantity]` entry, quantity first.
///
/// Quantity is checked before price so a removed level (quantity 0) never
/// competes on price at all.
fn parse_entry(side: &str, entry: &[String]) -> Option<(f64, f64)> {
    if entry.len() < 2 {
        return None;
    }
    let amount: f64 = match fast_float2::parse(entry[1].as_str()) {
        Ok(a) => a,
        Err(_) => {
            warn!("couldn't parse {side} quantity {:?}, skipping entry", entry[1]);
            return None;
        }
    };
    if amount == 0.0 {
        return None;
    }
    let price: f64 = match fast_float2::parse(entry[0].as_str()) {
        Ok(p) => p,
        Err(_) => {
            warn!("couldn't parse {side} price {:?}, skipping entry", entry[0]);
            return None;
        }
    };
    Some((price, amount))
}

/// Highest usable bid. Ties keep the first entry observed.
fn best_bid(levels: &[Vec<String>]) -> PriceLevel {
    let mut best = PriceLevel::default();
    for entry in levels {
        if let Some((price, amount)) = parse_entry("bid", entry) {
            if price > best.price {
                best = PriceLevel::new(price, amount);
            }
        }
    }
    best
}

/// Lowest usable ask.
///
/// 0.0 doubles as "no ask yet" and as a valid price, so the first usable
/// entry always becomes the candidate regardless of magnitude and later
/// entries win only by being strictly lower. This asymmetry with the bid
/// side is inherited behavior that downstream consumers may rely on; keep
/// it as is.
fn best_ask(levels: &[Vec<String>]) -> PriceLevel {
    let mut best = PriceLevel::default();
    for entry in levels {
        if let Some((price, amount)) = parse_entry("ask", entry) {
            if best.price == 0.0 || price < best.price {
                best = PriceLevel::new(price, amount);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(bids: &[[&str; 2]], asks: &[[&str; 2]]) -> DepthEvent {
        DepthEvent {
            symbol: "BTCUSDT".into(),
            bids: bids.iter().map(|e| vec![e[0].into(), e[1].into()]).collect(),
            asks: asks.iter().map(|e| vec![e[0].into(), e[1].into()]).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn zero_quantity_bid_loses_to_lower_live_bid() {
        // The 10.5 level has quantity 0 (a removal) and must not be picked
        // even though its price is higher.
        let snap = reduce_event(&event(
            &[["10.5", "0"], ["10.0", "2"]],
            &[["11.0", "1"], ["10.8", "3"]],
        ));
        assert_eq!(snap.bid, PriceLevel::new(10.0, 2.0));
        // First ask (11.0, 1) is the initial candidate; 10.8 < 11.0 replaces it.
        assert_eq!(snap.ask, PriceLevel::new(10.8, 3.0));
    }

    #[test]
    fn empty_bid_side_yields_sentinel() {
        let snap = reduce_event(&event(&[], &[["5.0", "1"]]));
        assert!(snap.bid.is_empty());
        assert_eq!(snap.ask, PriceLevel::new(5.0, 1.0));
    }

    #[test]
    fn highest_bid_wins() {
        let snap = reduce_event(&event(
            &[["9.0", "1"], ["11.0", "4"], ["10.0", "2"]],
            &[],
        ));
        assert_eq!(snap.bid, PriceLevel::new(11.0, 4.0));
    }

    #[test]
    fn bid_ties_keep_first_entry() {
        let snap = reduce_event(&event(&[["10.0", "1"], ["10.0", "9"]], &[]));
        assert_eq!(snap.bid.amount, 1.0);
    }

    #[test]
    fn ask_first_candidate_wins_unless_strictly_undercut() {
        // First usable ask becomes the candidate even though a cheaper-looking
        // comparison never happened; equal or higher entries never replace it.
        let snap = reduce_event(&event(&[], &[["5.0", "1"], ["7.0", "2"], ["5.0", "9"]]));
        assert_eq!(snap.ask, PriceLevel::new(5.0, 1.0));

        let snap = reduce_event(&event(&[], &[["7.0", "2"], ["5.0", "9"]]));
        assert_eq!(snap.ask, PriceLevel::new(5.0, 9.0));
    }

    #[test]
    fn ask_priced_zero_keeps_candidate_slot_open() {
        // A usable ask at price 0.0 is indistinguishable from the sentinel,
        // so the next usable ask takes over unconditionally.
        let snap = reduce_event(&event(&[], &[["0.0", "3"], ["8.0", "1"]]));
        assert_eq!(snap.ask, PriceLevel::new(8.0, 1.0));
    }

    #[test]
    fn malformed_entries_skip_without_rejecting_event() {
        let mut ev = event(&[["10.0", "2"]], &[["5.0", "1"]]);
        ev.bids.push(vec!["not-a-price".into(), "1".into()]);
        ev.bids.push(vec!["99.0".into(), "not-a-qty".into()]);
        ev.bids.push(vec!["12.0".into()]); // short entry
        ev.asks.push(vec![]); // empty entry
        let snap = reduce_event(&ev);
        assert_eq!(snap.bid, PriceLevel::new(10.0, 2.0));
        assert_eq!(snap.ask, PriceLevel::new(5.0, 1.0));
    }

    #[test]
    fn capture_time_is_stamped() {
        let before = time_util::now_ms();
        let snap = reduce_event(&event(&[], &[]));
        assert!(snap.captured_at_ms >= before);
        assert_eq!(snap.symbol, "BTCUSDT");
    }
}
