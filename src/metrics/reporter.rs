// Standard library
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// 3rd party crates
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

// Current module imports
use super::constants::{default_metrics_base, default_timestamp_offset};
use super::errors::{MetricsError, MetricsValidationError};
use super::traits::LatencySink;

/// Status page metric the poller reports latencies to.
#[derive(Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_metrics_base")]
    pub base_url: String,
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub metric_id: String,
    #[serde(default)]
    pub api_key: String,
    /// Seconds added to each data point's timestamp
    #[serde(default = "default_timestamp_offset")]
    pub timestamp_offset: u64,
}

/// Posts latency data points to a status page metric.
#[derive(Debug, Clone)]
pub struct StatusPageReporter {
    pub url: String,
    pub timestamp_offset: Duration,
    pub client: Client,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_metrics_base(),
            page_id: String::new(),
            metric_id: String::new(),
            api_key: String::new(),
            timestamp_offset: default_timestamp_offset(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsValidationError> {
        if !self.enabled {
            return Ok(());
        }

        if self.page_id.trim().is_empty() {
            return Err(MetricsValidationError::MissingPageId);
        }

        if self.metric_id.trim().is_empty() {
            return Err(MetricsValidationError::MissingMetricId);
        }

        if self.api_key.trim().is_empty() {
            return Err(MetricsValidationError::MissingApiKey);
        }

        Ok(())
    }
}

impl fmt::Debug for MetricsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsConfig")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("page_id", &self.page_id)
            .field("metric_id", &self.metric_id)
            .field("api_key", &"<redacted>")
            .field("timestamp_offset", &self.timestamp_offset)
            .finish()
    }
}

impl StatusPageReporter {
    pub fn new(config: &MetricsConfig, timeout: Duration) -> Result<Self, MetricsError> {
        let mut headers: HeaderMap = HeaderMap::new();

        // Mark security-sensitive headers with `set_sensitive`.
        let oauth_token: String = format!("OAuth {}", config.api_key);
        let mut auth_value: HeaderValue = HeaderValue::from_str(&oauth_token)
            .map_err(|e| MetricsError::PostFailed(format!("Invalid API key format: {}", e)))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client: Client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                MetricsError::HttpClientBuild(e)
            })?;

        Ok(Self {
            url: format!(
                "{}/pages/{}/metrics/{}/data.json",
                config.base_url.trim_end_matches('/'),
                config.page_id,
                config.metric_id
            ),
            timestamp_offset: Duration::from_secs(config.timestamp_offset),
            client,
        })
    }

    /// Builds the data point body for a latency observed at `now`.
    pub fn data_point(&self, latency_ms: f64, now: SystemTime) -> Value {
        let since_epoch: Duration = now.duration_since(UNIX_EPOCH).unwrap_or_default();
        let timestamp: f64 = (since_epoch + self.timestamp_offset).as_secs_f64();

        json!({
            "data": {
                "timestamp": timestamp,
                "value": latency_ms,
            }
        })
    }
}

#[async_trait]
impl LatencySink for StatusPageReporter {
    async fn record(&self, latency_ms: f64) -> Result<(), MetricsError> {
        let body: Value = self.data_point(latency_ms, SystemTime::now());

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MetricsError::PostFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MetricsError::Rejected {
                status: status.as_u16(),
                body: error_body,
            });
        }

        debug!(latency_ms, "Posted latency data point");
        Ok(())
    }
}
