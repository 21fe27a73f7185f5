//! Integration tests for the dashboard API endpoints.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use analytics::FixedRandom;
use api_client::error::ApiError;
use api_client::{IndicatorSource, IndicatorsResponse, MarketDataClient};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use cache::ManualClock;
use chrono::{DateTime, Duration, Utc};
use configuration::AppConfig;
use core_types::{Impact, IndicatorReading, PricePoint, PriceSeries, Trend};
use http_body_util::BodyExt;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tower::ServiceExt;
use web_server::auth::DigestCredentialVerifier;
use web_server::{create_router, AppState};

// ==============================================================================
// Test doubles
// ==============================================================================

/// Serves a rising 30-day series for every symbol except the failing ones.
struct StubMarketData {
    failing: HashSet<&'static str>,
    calls: AtomicUsize,
}

impl StubMarketData {
    fn new(failing: &[&'static str]) -> Self {
        Self {
            failing: failing.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MarketDataClient for StubMarketData {
    async fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(symbol) {
            return Err(ApiError::Status {
                status: 503,
                url: format!("stub://{symbol}"),
            });
        }
        let points = (0..30)
            .map(|day| PricePoint {
                timestamp: DateTime::<Utc>::from_timestamp(1_700_000_000 + day * 86_400, 0)
                    .unwrap(),
                close: 100.0 + day as f64,
                volume: Some(1_000 + day as u64),
            })
            .collect();
        Ok(PriceSeries {
            symbol: symbol.to_string(),
            points,
        })
    }
}

enum Upstream {
    Readings(Vec<(&'static str, f64)>),
    Down,
}

struct StubIndicators(Upstream);

#[async_trait]
impl IndicatorSource for StubIndicators {
    async fn fetch_breakdown(&self, country: &str) -> Result<IndicatorsResponse, ApiError> {
        match &self.0 {
            Upstream::Down => Err(ApiError::Status {
                status: 502,
                url: "stub://indicators".to_string(),
            }),
            Upstream::Readings(readings) => {
                let indicators_breakdown: BTreeMap<String, IndicatorReading> = readings
                    .iter()
                    .map(|(name, weight)| {
                        let reading = IndicatorReading {
                            current_value: 1.0,
                            weight: *weight,
                            confidence: 1.0,
                            trend: Trend::Up,
                            impact: Impact::Positive,
                            unit: "index".to_string(),
                            source: "stub".to_string(),
                        };
                        (name.to_string(), reading)
                    })
                    .collect();
                Ok(IndicatorsResponse {
                    country: Some(country.to_string()),
                    indicators_breakdown,
                })
            }
        }
    }
}

// ==============================================================================
// Helpers
// ==============================================================================

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc)
}

fn create_test_state() -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let state = AppState::new(AppConfig::default(), clock.clone(), Arc::new(FixedRandom(0.5)));
    (state, clock)
}

fn create_test_app() -> Router {
    let (state, _clock) = create_test_state();
    create_router(Arc::new(state))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn allocation_sum(sectors: &Value) -> f64 {
    sectors
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["metrics"]["allocation"].as_f64().unwrap())
        .sum()
}

// ==============================================================================
// Protocol: CORS, preflight, 405, 404
// ==============================================================================

#[tokio::test]
async fn test_options_returns_empty_200() {
    let app = create_test_app();
    let uris = [
        "/api/regime",
        "/api/sectors/USA",
        "/api/getIndicatorsBreakdown",
        "/api/auth/login",
    ];
    for uri in uris {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, Value::Null, "{uri}");
    }
}

#[tokio::test]
async fn test_non_get_methods_are_rejected() {
    let app = create_test_app();

    let (status, body) = call(&app, post_json("/api/regime", "{}")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let put = Request::builder()
        .method(Method::PUT)
        .uri("/api/sectors/USA")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(&app, put).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let (status, _) = call(&app, get("/api/auth/login")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_responses_allow_any_origin() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/regime")
        .header(header::ORIGIN, "https://dashboard.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_is_404_json() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

// ==============================================================================
// Regime & allocations
// ==============================================================================

#[tokio::test]
async fn test_unknown_country_gets_the_france_regime() {
    let app = create_test_app();

    let (_, france) = call(&app, get("/api/regime?country=France")).await;
    let (status, atlantis) = call(&app, get("/api/regime?country=Atlantis")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(atlantis["regime"], france["regime"]);
    assert_eq!(atlantis["confidence"], france["confidence"]);
    assert_eq!(atlantis["indicators"], france["indicators"]);
    assert_eq!(atlantis["country"], "Atlantis");
    assert_eq!(atlantis["source"], "Oracle Portfolio Analytics");
}

#[tokio::test]
async fn test_regime_defaults_to_france() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/regime")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"], "France");
    assert!(body["indicators"]["croissance"].is_number());
    assert!(body["badge_color"].is_string());
}

#[tokio::test]
async fn test_allocations_always_total_one_hundred() {
    let app = create_test_app();
    for country in ["France", "USA", "Allemagne", "DEU", "Atlantis"] {
        let (status, body) = call(&app, get(&format!("/api/allocations?country={country}"))).await;
        assert_eq!(status, StatusCode::OK, "{country}");

        let a = &body["allocations"];
        let sum: f64 = ["stocks", "bonds", "commodities", "cash"]
            .iter()
            .map(|leg| a[leg].as_f64().unwrap())
            .sum();
        assert_eq!(sum, 100.0, "{country}");
        assert_eq!(body["total"].as_f64(), Some(100.0), "{country}");
        assert_eq!(body["chartData"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_allocations_for_usa() {
    let app = create_test_app();
    let (_, body) = call(&app, get("/api/allocations?country=USA")).await;
    assert_eq!(body["allocations"]["stocks"].as_f64(), Some(70.0));
    assert_eq!(body["chartData"][0]["name"], "Actions");
    assert_eq!(body["chartData"][0]["color"], "#00d4ff");
    assert!(body["regime"].is_string());
}

// ==============================================================================
// Sectors
// ==============================================================================

#[tokio::test]
async fn test_sectors_allocations_sum_to_one_hundred() {
    let app = create_test_app();
    for country in ["USA", "FRA", "Japon", "Atlantis"] {
        let (status, body) = call(&app, get(&format!("/api/sectors/{country}"))).await;
        assert_eq!(status, StatusCode::OK, "{country}");
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 11);
        assert!((allocation_sum(&body["sectors"]) - 100.0).abs() <= 0.1, "{country}");
        assert!((body["stats"]["totalAllocation"].as_f64().unwrap() - 100.0).abs() <= 0.1);
    }
}

#[tokio::test]
async fn test_sectors_default_to_usa_with_every_sector() {
    let app = create_test_app();
    let (_, default) = call(&app, get("/api/sectors")).await;
    let (_, usa) = call(&app, get("/api/sectors/USA")).await;

    assert_eq!(default["country"], "USA");
    assert_eq!(default["sectors"], usa["sectors"]);
    assert_eq!(default["count"], 11);
    assert!((allocation_sum(&default["sectors"]) - 100.0).abs() <= 0.1);
    assert_eq!(default["pagination"]["page"], 1);
    assert_eq!(default["pagination"]["limit"], 11);
    assert_eq!(default["pagination"]["totalItems"], 11);
    assert_eq!(default["pagination"]["totalPages"], 1);
    assert_eq!(default["pagination"]["sort"], "allocation");
    assert_eq!(default["pagination"]["direction"], "desc");
    assert_eq!(default["source"], "Yahoo Finance (fallback)");

    let allocations: Vec<f64> = default["sectors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["metrics"]["allocation"].as_f64().unwrap())
        .collect();
    assert!(allocations.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_sectors_sort_and_paginate() {
    let app = create_test_app();

    let (_, body) = call(&app, get("/api/sectors/FRA?sort=name&direction=asc")).await;
    let names: Vec<String> = body["sectors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["metadata"]["name"].as_str().unwrap().to_lowercase())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let (status, body) = call(&app, get("/api/sectors/FRA?page=2&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
    assert_eq!(body["pagination"]["totalPages"], 3);

    let (status, body) = call(&app, get("/api/sectors/FRA?page=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["sectors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sectors_reject_bad_query() {
    let app = create_test_app();

    let (status, body) = call(&app, get("/api/sectors/USA?sort=colour")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request");

    let (status, body) = call(&app, get("/api/sectors/USA?page=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("page"));
}

#[tokio::test]
async fn test_live_sectors_fall_back_per_symbol() {
    let (state, _clock) = create_test_state();
    let stub = Arc::new(StubMarketData::new(&["XLK"]));
    let app = create_router(Arc::new(state.with_market_data(stub.clone())));

    let (status, body) = call(&app, get("/api/sectors/USA")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "Yahoo Finance (partial fallback)");

    let sectors = body["sectors"].as_array().unwrap();
    let by_id = |id: &str| sectors.iter().find(|s| s["metadata"]["id"] == id).unwrap().clone();

    let tech = by_id("technology");
    assert_eq!(tech["source"], "XLK (fallback)");
    assert!(tech["historicalData"].as_array().unwrap().is_empty());

    let finance = by_id("finance");
    assert_eq!(finance["source"], "Yahoo Finance");
    assert_eq!(finance["historicalData"].as_array().unwrap().len(), 30);
    assert_eq!(finance["metrics"]["trend"], "up");

    // Services and industry share XLI; it is fetched once.
    assert_eq!(by_id("services")["source"], "Yahoo Finance");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 10);

    assert!((allocation_sum(&body["sectors"]) - 100.0).abs() <= 0.1);
}

#[tokio::test]
async fn test_sector_listing_is_cached_until_ttl() {
    let (state, clock) = create_test_state();
    let stub = Arc::new(StubMarketData::new(&[]));
    let app = create_router(Arc::new(state.with_market_data(stub.clone())));

    let (_, first) = call(&app, get("/api/sectors/USA")).await;
    assert_eq!(first["cached"], false);
    let fetched = stub.calls.load(Ordering::SeqCst);

    clock.advance(Duration::seconds(299));
    let (_, second) = call(&app, get("/api/sectors/usa?sort=risk")).await;
    assert_eq!(second["cached"], true);
    assert_eq!(second["timestamp"], first["timestamp"]);
    assert_eq!(stub.calls.load(Ordering::SeqCst), fetched);

    clock.advance(Duration::seconds(1));
    let (_, third) = call(&app, get("/api/sectors/USA")).await;
    assert_eq!(third["cached"], false);
    assert_eq!(stub.calls.load(Ordering::SeqCst), fetched * 2);
}

#[tokio::test]
async fn test_expired_listings_are_evicted_on_miss() {
    let (state, clock) = create_test_state();
    let state = Arc::new(state);
    let app = create_router(state.clone());

    call(&app, get("/api/sectors/USA")).await;
    call(&app, get("/api/sectors/FRA")).await;
    assert_eq!(state.sector_cache.stats().total_entries, 2);

    clock.advance(Duration::seconds(300));
    call(&app, get("/api/sectors/DEU")).await;
    let stats = state.sector_cache.stats();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.expired_entries, 0);
}

#[tokio::test]
async fn test_oversized_ttl_does_not_break_sectors() {
    let mut config = AppConfig::default();
    config.cache.sector_ttl_secs = 100_000_000_000_000;
    let clock = Arc::new(ManualClock::new(t0()));
    let state = AppState::new(config, clock, Arc::new(FixedRandom(0.5)));
    let app = create_router(Arc::new(state));

    let (status, body) = call(&app, get("/api/sectors/USA")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 11);

    let (_, again) = call(&app, get("/api/sectors/USA")).await;
    assert_eq!(again["cached"], true);
}

// ==============================================================================
// Indicators
// ==============================================================================

#[tokio::test]
async fn test_indicators_fall_back_without_upstream() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/getIndicatorsBreakdown")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"], "FRA");
    assert_eq!(body["data_status"], "FALLBACK");
    assert_eq!(body["overall_score"].as_f64(), Some(0.82));
    assert_eq!(body["indicators_breakdown"].as_object().unwrap().len(), 7);
    assert_eq!(body["sources"]["fallback_reason"], "upstream not configured");
}

#[tokio::test]
async fn test_indicators_from_upstream() {
    let (state, _clock) = create_test_state();
    let upstream = StubIndicators(Upstream::Readings(vec![("pmi", 0.5), ("oil", 0.5)]));
    let app = create_router(Arc::new(state.with_indicators(Arc::new(upstream))));

    let (status, body) = call(&app, get("/api/getIndicatorsBreakdown?country=DEU")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data_status"], "LIVE");
    assert_eq!(body["country"], "DEU");
    assert_eq!(body["overall_score"].as_f64(), Some(1.0));
    assert!(body["sources"].get("fallback_reason").is_none());
}

#[tokio::test]
async fn test_indicators_upstream_failure_uses_fallback() {
    let (state, _clock) = create_test_state();
    let state = state.with_indicators(Arc::new(StubIndicators(Upstream::Down)));
    let app = create_router(Arc::new(state));

    let (status, body) = call(&app, get("/api/getIndicatorsBreakdown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data_status"], "FALLBACK");
    assert_eq!(body["overall_score"].as_f64(), Some(0.82));
    assert!(body["sources"]["fallback_reason"].as_str().unwrap().contains("502"));
}

#[tokio::test]
async fn test_indicators_empty_and_unscorable_upstream() {
    let (state, _clock) = create_test_state();
    let app = create_router(Arc::new(
        state.with_indicators(Arc::new(StubIndicators(Upstream::Readings(vec![])))),
    ));
    let (status, body) = call(&app, get("/api/getIndicatorsBreakdown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data_status"], "NO_DATA");
    assert_eq!(body["overall_score"].as_f64(), Some(0.0));

    let (state, _clock) = create_test_state();
    let app = create_router(Arc::new(
        state.with_indicators(Arc::new(StubIndicators(Upstream::Readings(vec![("pmi", 0.0)])))),
    ));
    let (status, body) = call(&app, get("/api/getIndicatorsBreakdown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data_status"], "ERROR");
    assert_eq!(body["overall_score"].as_f64(), Some(0.0));
    assert!(body["error"].is_string());
}

// ==============================================================================
// Market data & stress
// ==============================================================================

#[tokio::test]
async fn test_market_data_snapshot() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/market-data")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"], "USA");
    let etfs = body["etfs"].as_object().unwrap();
    assert_eq!(etfs.len(), 6);
    assert_eq!(etfs["SPY"]["price"].as_f64(), Some(445.67));
    assert_eq!(etfs["SPY"]["color"], "green");
    assert_eq!(etfs["TLT"]["color"], "red");
    assert_eq!(etfs["TLT"]["changePercent"].as_f64(), Some(-0.74));
}

#[tokio::test]
async fn test_market_data_live_refresh_per_symbol() {
    let (state, _clock) = create_test_state();
    let state = state.with_market_data(Arc::new(StubMarketData::new(&["GLD"])));
    let app = create_router(Arc::new(state));

    let (_, body) = call(&app, get("/api/market-data")).await;
    assert_eq!(body["source"], "Yahoo Finance (partial fallback)");
    assert_eq!(body["etfs"]["SPY"]["price"].as_f64(), Some(129.0));
    assert_eq!(body["etfs"]["SPY"]["change"].as_f64(), Some(1.0));
    assert_eq!(body["etfs"]["SPY"]["volume"].as_u64(), Some(1_029));
    // Failed symbol keeps its snapshot figures.
    assert_eq!(body["etfs"]["GLD"]["price"].as_f64(), Some(178.92));
}

#[tokio::test]
async fn test_market_stress_levels() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/market-stress")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "MODÉRÉ");
    assert_eq!(body["vix"]["value"].as_f64(), Some(16.52));
    assert_eq!(body["vix"]["status"], "NORMAL");
    assert_eq!(body["hySpread"]["threshold"].as_f64(), Some(10.0));
    assert_eq!(body["sources"]["hySpread"], "fred.stlouisfed.org");
    assert_eq!(body["colors"]["extreme"], "#ff0000");
}

// ==============================================================================
// Backtesting & health
// ==============================================================================

#[tokio::test]
async fn test_backtesting_defaults_and_period() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/backtesting")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "API OK");
    assert_eq!(body["period"]["start"], "2023-01-01");
    assert_eq!(body["period"]["end"], "2024-01-01");
    assert_eq!(body["period"]["days"], 365);
    assert_eq!(body["metrics"]["rendement"], "12.45%");
    assert_eq!(body["metrics"]["maxDrawdown"], "-8.45%");
    assert_eq!(body["historicalData"].as_array().unwrap().len(), 8);
    assert_eq!(body["country"], "France");

    let uri = "/api/backtesting?startDate=2024-01-01&endDate=2024-03-01";
    let (_, body) = call(&app, get(uri)).await;
    assert_eq!(body["period"]["days"], 60);
}

#[tokio::test]
async fn test_backtesting_rejects_malformed_dates() {
    let app = create_test_app();
    let (status, body) = call(&app, get("/api/backtesting?startDate=yesterday")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request");
    assert!(body["message"].as_str().unwrap().contains("startDate"));
}

#[tokio::test]
async fn test_system_health_reports_uptime_and_cache() {
    let (state, clock) = create_test_state();
    let app = create_router(Arc::new(state));

    call(&app, get("/api/sectors/USA")).await;
    clock.advance(Duration::seconds(65));

    let (status, body) = call(&app, get("/api/getSystemHealth")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["uptime"], "1m 5s");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let services = body["services"].as_array().unwrap();
    assert_eq!(services.len(), 3);
    let cache = services.iter().find(|s| s["name"] == "Cache").unwrap();
    assert_eq!(cache["entries"], 1);
}

// ==============================================================================
// Login
// ==============================================================================

#[tokio::test]
async fn test_login_disabled_by_default() {
    let app = create_test_app();
    let (status, body) = call(
        &app,
        post_json("/api/auth/login", r#"{"username":"admin","password":"admin"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_with_configured_credentials() {
    let (state, _clock) = create_test_state();
    let digest = hex::encode(Sha256::digest(b"correct horse"));
    let verifier =
        DigestCredentialVerifier::new("analyst", &digest, "test-key", Duration::hours(1))
            .unwrap();
    let app = create_router(Arc::new(state.with_credentials(Arc::new(verifier))));

    let (status, body) = call(
        &app,
        post_json("/api/auth/login", r#"{"username":"analyst","password":"correct horse"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().unwrap().starts_with("analyst."));
    assert_eq!(body["expiresAt"], "2024-01-01T01:00:00Z");

    let (status, _) = call(
        &app,
        post_json("/api/auth/login", r#"{"username":"analyst","password":"wrong"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let missing_password = post_json("/api/auth/login", r#"{"username":"analyst"}"#);
    let (status, body) = call(&app, missing_password).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request");
}
