//! # Oracle Reference Data
//!
//! Read-only lookup tables behind the dashboard: the sector catalogue and its
//! base figures, per-country multipliers, macro regime snapshots, strategic
//! allocations and the static market snapshots served when live data is off.
//!
//! Every lookup that takes a country accepts an ISO alpha-3 code, a French
//! display name or an English name, case-insensitively. Callers decide what
//! to do with an unknown country; most fall back to [`DEFAULT_COUNTRY`].

pub mod allocations;
pub mod countries;
pub mod indicators;
pub mod markets;
pub mod regimes;
pub mod sectors;

pub use allocations::{allocation_for, ChartSlice, CHART_SLICES};
pub use countries::{resolve_country, Country, DEFAULT_COUNTRY};
pub use indicators::fallback_breakdown;
pub use markets::{
    backtest_snapshot, etf_snapshot, market_stress_snapshot, quote_url, BacktestSnapshot,
    MarketStressSnapshot,
};
pub use regimes::regime_for;
pub use sectors::{multipliers_for, profile, SectorProfile, DEFAULT_SECTOR_COUNTRY};
