use crate::error::ApiError;
use chrono::{DateTime, Utc};
use core_types::{IndicatorReading, PricePoint, PriceSeries};
use serde::Deserialize;
use std::collections::BTreeMap;

// --- Chart feed ---

/// Top-level envelope of `GET /v8/finance/chart/{symbol}`.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub struct ChartBody {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Epoch seconds, one per bar.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

/// Column-oriented bar data. Holidays and halted sessions come back as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResponse {
    /// Zips the timestamp and close columns, dropping bars without a close.
    pub fn into_series(self, symbol: &str) -> Result<PriceSeries, ApiError> {
        if let Some(error) = self.chart.error {
            return Err(ApiError::ApiError(format!("{}: {}", error.code, error.description)));
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ApiError::InvalidData(format!("no chart result for {symbol}")))?;
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut points = Vec::with_capacity(result.timestamp.len());
        for (i, &epoch) in result.timestamp.iter().enumerate() {
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            let timestamp: DateTime<Utc> = DateTime::from_timestamp(epoch, 0)
                .ok_or_else(|| ApiError::InvalidData(format!("invalid timestamp: {epoch}")))?;
            points.push(PricePoint {
                timestamp,
                close,
                volume: quote.volume.get(i).copied().flatten(),
            });
        }

        Ok(PriceSeries {
            symbol: symbol.to_string(),
            points,
        })
    }
}

// --- Indicators service ---

/// Body of the upstream indicators-breakdown service. Extra fields are ignored;
/// the score is always recomputed locally.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorsResponse {
    pub country: Option<String>,
    #[serde(default)]
    pub indicators_breakdown: BTreeMap<String, IndicatorReading>,
}
