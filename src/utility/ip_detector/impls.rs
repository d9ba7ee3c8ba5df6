// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use tracing::{debug, info, warn};

// Current module imports
use super::constants::{default_request_timeout, default_services};
use super::errors::{IpDetectionError, IpDetectionValidationError};
use super::types::{IpDetection, IpDetector};

impl Default for IpDetection {
    fn default() -> Self {
        Self {
            services: default_services(),
            timeout: default_request_timeout(),
        }
    }
}

impl IpDetection {
    pub fn validate(&self) -> Result<(), IpDetectionValidationError> {
        if self.services.iter().all(|s| s.trim().is_empty()) {
            return Err(IpDetectionValidationError::NoServices);
        }

        if self.timeout == 0 {
            return Err(IpDetectionValidationError::InvalidTimeout(
                "timeout must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl IpDetector {
    pub fn new(config: IpDetection) -> Result<Self, IpDetectionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { config, client })
    }

    /// Detects the current public IP address, falling back through the configured services.
    pub async fn detect_ip(&self) -> Result<IpAddr, IpDetectionError> {
        for service in self.config.services.iter().filter(|s| !s.trim().is_empty()) {
            match self.query_ip_service(service).await {
                Ok(ip) => {
                    info!(service = %service, "Egress IP detected: {}", ip);
                    return Ok(ip);
                }
                Err(e) => {
                    warn!("Failed to query IP service {}: {}", service, e);
                }
            }
        }

        Err(IpDetectionError::NoServicesAvailable)
    }

    async fn query_ip_service(&self, service: &str) -> Result<IpAddr, IpDetectionError> {
        debug!(service = %service, "Querying IP lookup service");

        let response = self.client.get(service).send().await.map_err(|error| {
            IpDetectionError::NetworkError {
                service: service.to_string(),
                error,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpDetectionError::InvalidResponse {
                service: service.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| IpDetectionError::NetworkError {
                service: service.to_string(),
                error,
            })?;

        body.trim()
            .parse::<IpAddr>()
            .map_err(|e| IpDetectionError::ParseError {
                service: service.to_string(),
                error: format!("{} (body: {:?})", e, body.trim()),
            })
    }
}
