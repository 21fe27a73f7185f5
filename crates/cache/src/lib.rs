//! # Oracle Cache
//!
//! A small read-through cache abstraction: `key -> {value, expiry}` behind a
//! `RwLock`, with the notion of "now" supplied by an injectable [`Clock`].
//! Production code uses [`SystemClock`]; tests drive a [`ManualClock`].

pub mod clock;
pub mod ttl;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ttl::{CacheStats, TtlCache};
