use crate::{error::AppError, AppState};
use analytics::{assess_stress, GaugeStatus, StressLevel};
use api_client::fetch_many;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, NaiveDate};
use core_types::{EtfQuote, PriceSeries};
use reference_data::{
    allocation_for, backtest_snapshot, etf_snapshot, market_stress_snapshot, regime_for,
    DEFAULT_COUNTRY, CHART_SLICES,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const ANALYTICS_SOURCE: &str = "Oracle Portfolio Analytics";
const LIVE_SOURCE: &str = "Yahoo Finance";

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Describes where a mixed live/static payload came from.
pub(crate) fn source_label(live: usize, total: usize) -> String {
    match live {
        0 => format!("{LIVE_SOURCE} (fallback)"),
        n if n == total => LIVE_SOURCE.to_string(),
        _ => format!("{LIVE_SOURCE} (partial fallback)"),
    }
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// # GET /api/regime
/// Unknown countries get the French record; the requested name is echoed back.
pub async fn get_regime(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Value>, AppError> {
    let country = query.country.unwrap_or_else(|| "France".to_string());
    let record = regime_for(&country)
        .or_else(|| regime_for(DEFAULT_COUNTRY))
        .ok_or_else(|| AppError::Internal("default regime record missing".to_string()))?;

    Ok(Json(json!({
        "regime": record.regime,
        "confidence": record.confidence,
        "indicators": record.indicators,
        "badge_color": record.badge_color,
        "country": country,
        "timestamp": state.clock.now(),
        "source": ANALYTICS_SOURCE,
    })))
}

/// # GET /api/allocations
pub async fn get_allocations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Value>, AppError> {
    let country = query.country.unwrap_or_else(|| "France".to_string());
    let mix = allocation_for(&country)
        .or_else(|| allocation_for(DEFAULT_COUNTRY))
        .ok_or_else(|| AppError::Internal("default allocation missing".to_string()))?;
    mix.validate().map_err(|e| AppError::Internal(e.to_string()))?;

    let regime = regime_for(&country)
        .or_else(|| regime_for(DEFAULT_COUNTRY))
        .map(|record| record.regime);

    let legs = [mix.stocks, mix.bonds, mix.commodities, mix.cash];
    let chart_data: Vec<Value> = CHART_SLICES
        .iter()
        .zip(legs)
        .map(|(slice, value)| json!({ "name": slice.name, "value": value, "color": slice.color }))
        .collect();

    Ok(Json(json!({
        "allocations": mix,
        "total": mix.total(),
        "chartData": chart_data,
        "country": country,
        "regime": regime,
        "timestamp": state.clock.now(),
        "source": ANALYTICS_SOURCE,
    })))
}

/// Overwrites a snapshot quote with the last two bars of a live series.
/// Returns false, leaving the quote untouched, when the series is too short.
fn apply_live_quote(quote: &mut EtfQuote, series: &PriceSeries) -> bool {
    let (Some(last), Some(previous)) = (series.last(), series.previous()) else {
        return false;
    };
    if !(previous.close > 0.0) || !last.close.is_finite() {
        return false;
    }

    let change = last.close - previous.close;
    quote.price = round2(last.close);
    quote.change = round2(change);
    quote.change_percent = round2(change / previous.close * 100.0);
    if let Some(volume) = last.volume {
        quote.volume = volume;
    }
    quote.color = EtfQuote::color_for_change(change).to_string();
    true
}

/// # GET /api/market-data
/// The ETF board. With live data enabled each symbol is refreshed on its own and
/// keeps its snapshot figures if the refresh fails.
pub async fn get_market_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Value>, AppError> {
    let mut etfs = etf_snapshot();
    let total = etfs.len();

    let live = match &state.market_data {
        Some(client) => {
            let symbols: Vec<&str> = etfs.keys().map(String::as_str).collect();
            let series = fetch_many(client.as_ref(), &symbols).await;
            let mut refreshed = 0;
            for (symbol, quote) in etfs.iter_mut() {
                if series.get(symbol).is_some_and(|s| apply_live_quote(quote, s)) {
                    refreshed += 1;
                }
            }
            refreshed
        }
        None => 0,
    };

    Ok(Json(json!({
        "etfs": etfs,
        "timestamp": state.clock.now(),
        "source": source_label(live, total),
        "country": query.country.unwrap_or_else(|| "USA".to_string()),
    })))
}

fn gauge_color(status: GaugeStatus) -> &'static str {
    match status {
        GaugeStatus::Normal => StressLevel::Normal.color(),
        GaugeStatus::Elevated => StressLevel::Extreme.color(),
    }
}

/// # GET /api/market-stress
pub async fn get_market_stress(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountryQuery>,
) -> Json<Value> {
    let snapshot = market_stress_snapshot();
    let assessment = assess_stress(&snapshot);

    Json(json!({
        "level": assessment.level,
        "vix": {
            "value": snapshot.vix,
            "status": assessment.vix_status,
            "threshold": snapshot.vix_threshold,
            "gauge": {
                "min": 0,
                "max": snapshot.vix_gauge_max,
                "color": gauge_color(assessment.vix_status),
            },
        },
        "hySpread": {
            "value": snapshot.hy_spread,
            "status": assessment.hy_status,
            "threshold": snapshot.hy_threshold,
            "gauge": {
                "min": 0,
                "max": snapshot.hy_gauge_max,
                "color": gauge_color(assessment.hy_status),
            },
        },
        "timestamp": state.clock.now(),
        "sources": { "vix": snapshot.vix_source, "hySpread": snapshot.hy_source },
        "country": query.country.unwrap_or_else(|| "USA".to_string()),
        "colors": {
            "normal": StressLevel::Normal.color(),
            "moderate": StressLevel::Moderate.color(),
            "extreme": StressLevel::Extreme.color(),
        },
    }))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::BadRequest(format!("{field} must be a YYYY-MM-DD date, got {value:?}: {e}"))
    })
}

/// # GET /api/backtesting
pub async fn get_backtesting(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BacktestQuery>,
) -> Result<Json<Value>, AppError> {
    let now = state.clock.now();
    let start = match &query.start_date {
        Some(value) => parse_date("startDate", value)?,
        None => NaiveDate::from_ymd_opt(2023, 1, 1)
            .ok_or_else(|| AppError::Internal("invalid default start date".to_string()))?,
    };
    let end = match &query.end_date {
        Some(value) => parse_date("endDate", value)?,
        None => now.date_naive(),
    };

    let snapshot = backtest_snapshot();
    let history: Vec<Value> = snapshot
        .history
        .iter()
        .map(|(date, value, ret)| json!({ "date": date, "value": value, "return": ret }))
        .collect();

    Ok(Json(json!({
        "status": "API OK",
        "performance": {
            "totalReturn": snapshot.total_return,
            "annualizedReturn": snapshot.annualized_return,
            "volatility": snapshot.volatility,
            "sharpeRatio": snapshot.sharpe_ratio,
            "maxDrawdown": snapshot.max_drawdown,
        },
        "period": {
            "start": start.format("%Y-%m-%d").to_string(),
            "end": end.format("%Y-%m-%d").to_string(),
            "days": (end - start).num_days(),
        },
        "historicalData": history,
        "metrics": {
            "rendement": format!("{:.2}%", snapshot.total_return),
            "volatilite": format!("{:.2}%", snapshot.volatility),
            "sharpe": format!("{:.2}", snapshot.sharpe_ratio),
            "maxDrawdown": format!("{:.2}%", snapshot.max_drawdown),
        },
        "timestamp": now,
        "country": query.country.unwrap_or_else(|| "France".to_string()),
    })))
}

pub(crate) fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    let (days, hours, minutes, seconds) = (
        secs / 86_400,
        secs % 86_400 / 3_600,
        secs % 3_600 / 60,
        secs % 60,
    );
    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// # GET /api/getSystemHealth
pub async fn get_system_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let now = state.clock.now();
    let cache = state.sector_cache.stats();
    let market_data = if state.market_data.is_some() { "operational" } else { "static" };

    Json(json!({
        "status": "healthy",
        "services": [
            { "name": "API Gateway", "status": "operational" },
            { "name": "Market Data", "status": market_data },
            { "name": "Cache", "status": "operational", "entries": cache.active_entries },
        ],
        "uptime": format_uptime(now - state.started_at),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": now,
    }))
}

/// # POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let session = state
        .credentials
        .verify(&request.username, &request.password, state.clock.now())
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(json!(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use core_types::PricePoint;

    #[test]
    fn uptime_is_human_readable() {
        assert_eq!(format_uptime(Duration::seconds(42)), "42s");
        assert_eq!(format_uptime(Duration::seconds(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::seconds(3_725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::seconds(90_061)), "1d 1h 1m 1s");
        assert_eq!(format_uptime(Duration::seconds(-5)), "0s");
    }

    #[test]
    fn source_labels() {
        assert_eq!(source_label(6, 6), "Yahoo Finance");
        assert_eq!(source_label(0, 6), "Yahoo Finance (fallback)");
        assert_eq!(source_label(3, 6), "Yahoo Finance (partial fallback)");
    }

    #[test]
    fn live_quote_uses_the_last_two_bars() {
        let at = |secs| DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
        let mut quote = etf_snapshot().remove("SPY").unwrap();
        let series = PriceSeries {
            symbol: "SPY".to_string(),
            points: vec![
                PricePoint { timestamp: at(0), close: 400.0, volume: Some(1) },
                PricePoint { timestamp: at(86_400), close: 396.0, volume: Some(2) },
            ],
        };

        assert!(apply_live_quote(&mut quote, &series));
        assert_eq!(quote.price, 396.0);
        assert_eq!(quote.change, -4.0);
        assert_eq!(quote.change_percent, -1.0);
        assert_eq!(quote.volume, 2);
        assert_eq!(quote.color, "red");
    }

    #[test]
    fn short_series_leaves_the_snapshot_alone() {
        let mut quote = etf_snapshot().remove("SPY").unwrap();
        let before = quote.clone();
        assert!(!apply_live_quote(&mut quote, &PriceSeries::default()));
        assert_eq!(quote, before);
    }
}
