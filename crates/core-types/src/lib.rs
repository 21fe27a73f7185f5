//! # Oracle Core Types
//!
//! The shared vocabulary of the dashboard backend: sector categories, per-sector
//! metrics, letter grades, macro regimes and the indicator/quote payloads.
//!
//! This is a Layer 0 crate. It holds data and the small pure derivations that
//! belong to the data itself (grade bucketing, trend classification, impact
//! scores). Everything that needs a lookup table or I/O lives further up.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BadgeColor, DataStatus, Grade, Impact, Regime, RiskLevel, SectorCategory, Trend};
pub use error::CoreError;
pub use structs::{
    AllocationMix, CountryMultipliers, CountryRegimeRecord, EtfQuote, HistoricalPoint,
    IndicatorReading, PricePoint, PriceSeries, RegimeIndicators, Sector, SectorMetrics,
    SectorRecord, SectorStats,
};
