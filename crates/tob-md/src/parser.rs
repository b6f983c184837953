//! Depth message parser.
//!
//! Converts one raw WebSocket text payload into a [`DepthEvent`]. Pure —
//! no state, no I/O. Decoding is deliberately lenient: unknown fields are
//! ignored and missing fields default, but a payload that is not well-formed
//! JSON at all is a [`FeedError::Decode`] for the caller to absorb.

use tob_core::{DepthEvent, FeedError};

/// Parse one raw depth-update message.
///
/// Empty bid/ask lists are valid; an event with zero usable levels reduces
/// to zero-valued price levels downstream.
pub fn parse_depth_event(text: &str) -> Result<DepthEvent, FeedError> {
    let event: DepthEvent = serde_json::from_str(text)?;
    Ok(event)
}
