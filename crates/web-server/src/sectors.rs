use crate::handlers::source_label;
use crate::{error::AppError, AppState};
use analytics::{paginate, sector_stats, sort_sectors, SortDirection, SortField};
use api_client::fetch_many;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use core_types::{SectorCategory, SectorRecord, SectorStats};
use reference_data::{profile, resolve_country, DEFAULT_SECTOR_COUNTRY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_PAGE: usize = 1;
/// A request without `limit` gets the whole catalogue on one page.
const DEFAULT_LIMIT: usize = SectorCategory::ALL.len();

/// A computed sector listing for one country, as stored in the cache.
#[derive(Debug, Clone)]
pub struct SectorSnapshot {
    pub records: Vec<SectorRecord>,
    pub generated_at: DateTime<Utc>,
}

impl SectorSnapshot {
    fn live_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.source.ends_with("(fallback)"))
            .count()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SectorQuery {
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub sort: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorsResponse {
    pub success: bool,
    pub country: String,
    pub sectors: Vec<SectorRecord>,
    pub count: usize,
    /// Computed over every sector, not only the current page.
    pub stats: Option<SectorStats>,
    pub pagination: PaginationInfo,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub cached: bool,
}

/// Countries share a cache entry when they resolve to the same code; unknown
/// countries all use the US figures and so share the US entry.
fn cache_key(country: &str) -> String {
    resolve_country(country)
        .map(|c| c.code)
        .unwrap_or(DEFAULT_SECTOR_COUNTRY)
        .to_string()
}

/// Returns the cached listing for `country`, computing and caching it on a miss.
async fn load_snapshot(state: &AppState, country: &str) -> (SectorSnapshot, bool) {
    let key = cache_key(country);
    if let Some(snapshot) = state.sector_cache.get(&key) {
        return (snapshot, true);
    }
    state.sector_cache.clear_expired();

    let live = match &state.market_data {
        Some(client) => {
            let symbols: Vec<&str> = SectorCategory::ALL
                .iter()
                .map(|&category| profile(category).etf_symbol)
                .collect();
            fetch_many(client.as_ref(), &symbols).await
        }
        None => HashMap::new(),
    };

    let now = state.clock.now();
    let snapshot = SectorSnapshot {
        records: state.aggregator.aggregate(country, &live, now),
        generated_at: now,
    };
    tracing::info!(
        country,
        key = %key,
        sectors = snapshot.records.len(),
        live = snapshot.live_count(),
        "Computed sector listing."
    );
    state.sector_cache.insert(key, snapshot.clone());
    (snapshot, false)
}

async fn sectors_response(
    state: &AppState,
    country: String,
    query: Result<Query<SectorQuery>, QueryRejection>,
) -> Result<Json<SectorsResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let sort = query.sort.unwrap_or_default();
    let direction = query.direction.unwrap_or_default();

    let (snapshot, cached) = load_snapshot(state, &country).await;
    let stats = sector_stats(&snapshot.records);
    let source = source_label(snapshot.live_count(), snapshot.records.len());

    let mut records = snapshot.records;
    sort_sectors(&mut records, sort, direction);
    let page = paginate(
        &records,
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    )?;

    Ok(Json(SectorsResponse {
        success: true,
        country,
        count: page.items.len(),
        sectors: page.items,
        stats,
        pagination: PaginationInfo {
            page: page.page,
            limit: page.limit,
            total_items: page.total_items,
            total_pages: page.total_pages,
            sort,
            direction,
        },
        timestamp: snapshot.generated_at,
        source,
        cached,
    }))
}

/// # GET /api/sectors
pub async fn get_default_sectors(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SectorQuery>, QueryRejection>,
) -> Result<Json<SectorsResponse>, AppError> {
    sectors_response(&state, DEFAULT_SECTOR_COUNTRY.to_string(), query).await
}

/// # GET /api/sectors/:country
pub async fn get_sectors(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    query: Result<Query<SectorQuery>, QueryRejection>,
) -> Result<Json<SectorsResponse>, AppError> {
    sectors_response(&state, country, query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_a_cache_entry() {
        assert_eq!(cache_key("usa"), "USA");
        assert_eq!(cache_key("États-Unis"), "USA");
        assert_eq!(cache_key("Atlantis"), "USA");
        assert_eq!(cache_key("France"), "FRA");
    }
}
