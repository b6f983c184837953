//! Core data types flowing through the feed.

pub mod depth;

pub use depth::*;
