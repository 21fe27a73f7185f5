//! # Oracle Analytics
//!
//! The arithmetic behind the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of HTTP or of the
//!   live feed; live prices arrive as already-fetched [`core_types::PriceSeries`].
//! - **Deterministic under test:** the only nondeterminism (confidence, beta, synthetic
//!   volumes) comes from an injected [`RandomSource`].
//!
//! ## Public API
//!
//! - `SectorAggregator`: builds the normalised, graded sector records for a country.
//! - `sector_stats` / `diversification_score`: allocation-weighted aggregates and the HHI score.
//! - `overall_score`: the weighted indicator score.
//! - `sort_sectors` / `paginate`: the table ordering used by the sectors endpoint.
//! - `assess_stress`: gauge statuses and the market stress level.

pub mod aggregator;
pub mod error;
pub mod indicators;
pub mod random;
pub mod series;
pub mod sorting;
pub mod stats;
pub mod stress;

pub use aggregator::{recommendations, resolve_multipliers, sector_multiplier, SectorAggregator};
pub use error::AnalyticsError;
pub use indicators::overall_score;
pub use random::{FixedRandom, RandomSource, SeededRandom};
pub use series::{analyze_closes, SeriesMetrics, TRADING_DAYS_PER_YEAR};
pub use sorting::{paginate, sort_sectors, Page, SortDirection, SortField};
pub use stats::{diversification_score, sector_stats};
pub use stress::{assess_stress, GaugeStatus, StressAssessment, StressLevel};
