use crate::error::ApiError;
use crate::responses::IndicatorsResponse;
use async_trait::async_trait;
use configuration::settings::IndicatorSettings;
use std::time::Duration;

/// A remote source of indicator breakdowns.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    async fn fetch_breakdown(&self, country: &str) -> Result<IndicatorsResponse, ApiError>;
}

/// Calls the configured upstream indicators service over HTTP.
#[derive(Clone)]
pub struct HttpIndicatorsClient {
    client: reqwest::Client,
    url: String,
}

impl HttpIndicatorsClient {
    /// Returns `Ok(None)` when no upstream URL is configured.
    pub fn from_settings(settings: &IndicatorSettings) -> Result<Option<Self>, ApiError> {
        let Some(url) = settings.upstream_url.as_deref().filter(|u| !u.trim().is_empty()) else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            url: url.to_string(),
        }))
    }
}

#[async_trait]
impl IndicatorSource for HttpIndicatorsClient {
    async fn fetch_breakdown(&self, country: &str) -> Result<IndicatorsResponse, ApiError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("country", country)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response
            .json::<IndicatorsResponse>()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
