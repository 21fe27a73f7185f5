use crate::error::ApiError;
use crate::responses::ChartResponse;
use async_trait::async_trait;
use configuration::settings::MarketDataSettings;
use core_types::PriceSeries;
use std::collections::HashMap;
use std::time::Duration;

pub mod error;
pub mod indicators;
pub mod responses;
// --- Public API ---
pub use indicators::{HttpIndicatorsClient, IndicatorSource};
pub use responses::IndicatorsResponse;

/// The interface for a daily price-series provider.
/// Handlers and the CLI hold this as a trait object so the live feed can be
/// swapped for a stub in tests.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetches the recent daily closes for one symbol.
    async fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, ApiError>;
}

/// A `MarketDataClient` backed by the public Yahoo Finance chart endpoint.
#[derive(Clone)]
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
    range: String,
    interval: String,
}

impl YahooClient {
    pub fn new(settings: &MarketDataSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            range: settings.range.clone(),
            interval: settings.interval.clone(),
        })
    }
}

#[async_trait]
impl MarketDataClient for YahooClient {
    async fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, ApiError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[("range", self.range.as_str()), ("interval", self.interval.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        let chart: ChartResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        chart.into_series(symbol)
    }
}

/// Fetches every symbol concurrently and keeps the ones that succeeded.
///
/// A failure only drops its own symbol; it is logged and never propagated,
/// so callers can substitute static figures per symbol.
pub async fn fetch_many(
    client: &dyn MarketDataClient,
    symbols: &[&str],
) -> HashMap<String, PriceSeries> {
    let mut unique: Vec<&str> = symbols.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let requests = unique.iter().map(|&symbol| async move {
        (symbol, client.fetch_series(symbol).await)
    });

    let mut series = HashMap::with_capacity(unique.len());
    for (symbol, result) in futures::future::join_all(requests).await {
        match result {
            Ok(s) => {
                tracing::debug!(symbol, points = s.points.len(), "Fetched price series.");
                series.insert(symbol.to_string(), s);
            }
            Err(e) => tracing::warn!(symbol, error = %e, "Price series unavailable, falling back."),
        }
    }
    series
}
