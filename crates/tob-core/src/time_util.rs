//! Wall-clock time utilities.
//!
//! Snapshot capture timestamps use millisecond resolution, matching the
//! exchange's event-time convention.

use std::time::{SystemTime, UNIX_EPOCH};

#[inline]
fn since_epoch() -> (u64, u64) {
    let d = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    (d.as_secs(), d.subsec_nanos() as u64)
}

/// Current time as **milliseconds** since Unix epoch.
#[inline]
pub fn now_ms() -> u64 {
    let (sec, nsec) = since_epoch();
    sec * 1_000 + nsec / 1_000_000
}

/// Current time as **microseconds** since Unix epoch.
#[inline]
pub fn now_us() -> u64 {
    let (sec, nsec) = since_epoch();
    sec * 1_000_000 + nsec / 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolutions_agree() {
        let ms = now_ms();
        let us = now_us();
        // Allow a generous window for the two calls.
        assert!(us / 1_000 >= ms);
        assert!(us / 1_000 - ms < 1_000);
    }
}
