use crate::handlers::CountryQuery;
use crate::AppState;
use analytics::{overall_score, AnalyticsError};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use core_types::{DataStatus, IndicatorReading};
use reference_data::fallback_breakdown;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

const UPSTREAM_PROVIDER: &str = "Indicators service";
const FALLBACK_PROVIDER: &str = "Static indicator table";

#[derive(Debug, Serialize)]
pub struct IndicatorSources {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct IndicatorsPayload {
    pub country: String,
    pub indicators_breakdown: BTreeMap<String, IndicatorReading>,
    pub overall_score: f64,
    pub data_status: DataStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub sources: IndicatorSources,
}

/// # GET /api/getIndicatorsBreakdown
///
/// Always answers 200. The `data_status` field says whether the breakdown is
/// live, the static table, empty, or could not be scored.
pub async fn get_indicators_breakdown(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> Json<IndicatorsPayload> {
    let requested = query
        .country
        .unwrap_or_else(|| state.config.indicators.default_country.clone());

    let (country, breakdown, mut status, provider, fallback_reason) = match &state.indicators {
        None => (
            requested,
            fallback_breakdown(),
            DataStatus::Fallback,
            FALLBACK_PROVIDER,
            Some("upstream not configured".to_string()),
        ),
        Some(source) => match source.fetch_breakdown(&requested).await {
            Ok(response) => {
                let status = if response.indicators_breakdown.is_empty() {
                    DataStatus::NoData
                } else {
                    DataStatus::Live
                };
                (
                    response.country.unwrap_or(requested),
                    response.indicators_breakdown,
                    status,
                    UPSTREAM_PROVIDER,
                    None,
                )
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Indicators upstream failed, serving the fallback table."
                );
                (
                    requested,
                    fallback_breakdown(),
                    DataStatus::Fallback,
                    FALLBACK_PROVIDER,
                    Some(e.to_string()),
                )
            }
        },
    };

    let (score, error) = match overall_score(&breakdown) {
        Ok(score) => (score, None),
        Err(AnalyticsError::NotEnoughData(_)) => (0.0, None),
        Err(e) => {
            tracing::error!(error = %e, "Could not score the indicator breakdown.");
            status = DataStatus::Error;
            (0.0, Some(e.to_string()))
        }
    };

    let now = state.clock.now();
    Json(IndicatorsPayload {
        country,
        indicators_breakdown: breakdown,
        overall_score: score,
        data_status: status,
        error,
        timestamp: now,
        sources: IndicatorSources {
            provider: provider.to_string(),
            fallback_reason,
            last_update: now,
        },
    })
}
