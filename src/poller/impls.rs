// Standard library
use std::sync::Arc;
use std::time::{Duration, Instant};

// 3rd party crates
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

// Project imports
use crate::metrics::LatencySink;
use crate::utility::rotator::CredentialRotator;
use crate::utility::throttle::QueueThrottler;

// Current module imports
use super::errors::{PollError, PollValidationError};
use super::functions::parse_max_age;
use super::types::{ApiResponse, PassSummary, PollConfig, PollOutcome, Poller};

impl PollConfig {
    pub fn validate(&self) -> Result<(), PollValidationError> {
        if self.targets.is_empty() {
            return Err(PollValidationError::NoTargets);
        }

        if let Some(position) = self.targets.iter().position(|t| t.trim().is_empty()) {
            return Err(PollValidationError::EmptyTarget(position));
        }

        if self.interval == 0 {
            return Err(PollValidationError::InvalidInterval);
        }

        Ok(())
    }
}

impl ApiResponse {
    /// Minimal record for a fetch that produced no usable body.
    pub fn failure(status_code: Option<u16>) -> Self {
        Self {
            ok: false,
            status_code,
            max_age: 0,
            body: None,
        }
    }
}

impl PassSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

impl Poller {
    pub fn new(
        config: &PollConfig,
        timeout: Duration,
        throttler: QueueThrottler,
        rotator: CredentialRotator,
    ) -> Result<Self, PollError> {
        let base: Url = Url::parse(&config.api_base).map_err(|e| PollError::InvalidBaseUrl {
            url: config.api_base.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(PollError::InvalidBaseUrl {
                url: config.api_base.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client: Client = Client::builder().timeout(timeout).build()?;

        if rotator.is_empty() {
            warn!("Credential pool is empty, fetches will fail until a key is added");
        }

        Ok(Self {
            base,
            resource: config.resource.trim_matches('/').to_string(),
            client,
            throttler,
            rotator,
            sink: None,
        })
    }

    /// Reports every fetch latency to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn LatencySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// `{base}/{resource}/{target}` with the target escaped as a single path segment.
    pub fn target_url(&self, target: &str) -> Url {
        let mut url: Url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            if !self.resource.is_empty() {
                segments.extend(self.resource.split('/'));
            }
            segments.push(target);
        }
        url
    }

    /// One throttled fetch. The throttle turn is always handed back, whatever happens.
    pub async fn fetch(&self, target: &str) -> PollOutcome {
        let ticket = self.throttler.acquire_turn().await;

        let started: Instant = Instant::now();
        let response: ApiResponse = self.request(target).await;
        let latency: Duration = started.elapsed();

        self.report(target, latency).await;
        ticket.throttle().await;

        PollOutcome {
            target: target.to_string(),
            response,
            latency,
        }
    }

    /// Authenticated GET for `target`, normalized into an [`ApiResponse`].
    pub async fn request(&self, target: &str) -> ApiResponse {
        let Some(token) = self.rotator.next_token() else {
            warn!(tag = %target, "No credentials provisioned, skipping request");
            return ApiResponse::failure(None);
        };

        let response = match self
            .client
            .get(self.target_url(target))
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(tag = %target, error = %e, "Request failed");
                return ApiResponse::failure(None);
            }
        };

        let status: u16 = response.status().as_u16();
        let max_age: u64 = parse_max_age(
            response
                .headers()
                .get(CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
        );

        match response.json::<Value>().await {
            Ok(Value::Null) => ApiResponse::failure(Some(status)),
            Ok(body) => ApiResponse {
                ok: status == 200,
                status_code: Some(status),
                max_age,
                body: Some(body),
            },
            Err(e) => {
                debug!(tag = %target, status, error = %e, "Response body is not JSON");
                ApiResponse::failure(Some(status))
            }
        }
    }

    async fn report(&self, target: &str, latency: Duration) {
        let Some(sink) = &self.sink else {
            return;
        };

        let latency_ms: f64 = latency.as_secs_f64() * 1000.0;
        if let Err(e) = sink.record(latency_ms).await {
            warn!(tag = %target, error = %e, "Failed to report latency");
        }
    }

    /// Fetches every target once, in order. Per-target failures never stop the pass.
    pub async fn run_pass(&self, targets: &[String]) -> PassSummary {
        let started: Instant = Instant::now();
        let mut summary: PassSummary = PassSummary::default();

        for target in targets {
            let outcome: PollOutcome = self.fetch(target).await;
            if outcome.response.ok {
                summary.succeeded += 1;
                debug!(
                    tag = %outcome.target,
                    latency_ms = outcome.latency.as_millis() as u64,
                    max_age_ms = outcome.response.max_age,
                    "Fetched"
                );
            } else {
                summary.failed += 1;
                warn!(
                    tag = %outcome.target,
                    status = ?outcome.response.status_code,
                    "Fetch failed"
                );
            }
        }

        summary.elapsed = started.elapsed();
        summary
    }
}
