use crate::enums::{BadgeColor, Grade, Impact, Regime, RiskLevel, SectorCategory, Trend};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==============================================================================
// Sectors
// ==============================================================================

/// Static, immutable description of a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub category: SectorCategory,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub risk_level: RiskLevel,
    /// The ETF used as the live proxy for this sector.
    pub etf_symbol: String,
}

/// The computed figures for one sector. Always replaced as a whole on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorMetrics {
    /// Share of the portfolio in percent. Sums to 100 across a response.
    pub allocation: f64,
    pub performance: f64,
    /// 0-100.
    pub risk_score: f64,
    pub volatility: f64,
    /// 0-100.
    pub confidence: f64,
    pub trend: Trend,
    pub sharpe_ratio: f64,
    pub beta: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorRecord {
    pub metadata: Sector,
    pub metrics: SectorMetrics,
    pub grade: Grade,
    pub recommendations: Vec<String>,
    pub historical_data: Vec<HistoricalPoint>,
    /// Where the figures came from, e.g. "Yahoo Finance" or "XLK (fallback)".
    pub source: String,
}

/// Portfolio-level aggregates over a set of sector records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorStats {
    pub total_allocation: f64,
    pub average_performance: f64,
    pub average_risk: f64,
    pub diversification_score: f64,
    pub sectors_count: usize,
}

/// Per-country weighting factors for the five anchor sector families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryMultipliers {
    pub tech: f64,
    pub finance: f64,
    pub healthcare: f64,
    pub industrials: f64,
    pub energy: f64,
}

// ==============================================================================
// Macro regime
// ==============================================================================

/// Headline macro figures in percent, keyed with the dashboard's French labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeIndicators {
    pub croissance: f64,
    pub inflation: f64,
    pub chomage: f64,
}

/// A read-only economic snapshot for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRegimeRecord {
    /// ISO 3166-1 alpha-3 code.
    pub code: String,
    /// Display name as used by the dashboard's country selector.
    pub name: String,
    pub regime: Regime,
    /// 0-100.
    pub confidence: u8,
    pub indicators: RegimeIndicators,
    pub badge_color: BadgeColor,
}

// ==============================================================================
// Asset-class allocations
// ==============================================================================

/// Strategic asset-class split, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationMix {
    pub stocks: Decimal,
    pub bonds: Decimal,
    pub commodities: Decimal,
    pub cash: Decimal,
}

impl AllocationMix {
    pub fn total(&self) -> Decimal {
        self.stocks + self.bonds + self.commodities + self.cash
    }

    /// Checks that the mix is fully invested: no negative leg and a total of exactly 100.
    pub fn validate(&self) -> Result<(), CoreError> {
        let legs = [self.stocks, self.bonds, self.commodities, self.cash];
        if legs.iter().any(|leg| leg.is_sign_negative()) {
            return Err(CoreError::InvalidInput(
                "allocation".to_string(),
                "negative leg".to_string(),
            ));
        }
        if self.total() != Decimal::ONE_HUNDRED {
            return Err(CoreError::InvalidInput(
                "allocation".to_string(),
                format!("legs sum to {} instead of 100", self.total()),
            ));
        }
        Ok(())
    }
}

// ==============================================================================
// Indicators & quotes
// ==============================================================================

/// One commodity/macro indicator contributing to the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub current_value: f64,
    pub weight: f64,
    /// 0-1.
    pub confidence: f64,
    pub trend: Trend,
    pub impact: Impact,
    pub unit: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfQuote {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub url: String,
    /// "green" when the session change is non-negative, "red" otherwise.
    pub color: String,
}

impl EtfQuote {
    pub fn color_for_change(change: f64) -> &'static str {
        if change >= 0.0 { "green" } else { "red" }
    }
}

// ==============================================================================
// Price series
// ==============================================================================

/// One daily bar from the live feed. Bars without a close are dropped upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub volume: Option<u64>,
}

/// A chronologically ordered close series for one symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The bar before the last one.
    pub fn previous(&self) -> Option<&PricePoint> {
        self.points.len().checked_sub(2).and_then(|i| self.points.get(i))
    }
}
