//! Itinerary service client
//!
//! This module provides the HTTP client for the itinerary-generation service.
//! A trip request is posted once to `{base_url}/generate-itinerary`; failures are
//! classified into service, transport and malformed-response errors. Requests
//! are never retried.

use crate::config::ServiceConfig;
use crate::error::SERVICE_FALLBACK_MESSAGE;
use crate::models::{ErrorPayload, ItineraryResponse, TripRequest};
use crate::{Result, TrippinError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Resource path of the itinerary endpoint
pub const GENERATE_ITINERARY_PATH: &str = "/generate-itinerary";

/// Source of generated itineraries
#[async_trait]
pub trait ItineraryApi: Send + Sync {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<ItineraryResponse>;
}

/// HTTP client for the itinerary service
pub struct ItineraryClient {
    /// HTTP client
    client: Client,
    /// Service base URL without trailing slash
    base_url: String,
    /// Request timeout
    timeout: Duration,
}

impl ItineraryClient {
    /// Create a new itinerary client
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Trippin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TrippinError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Full URL of the itinerary endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_ITINERARY_PATH)
    }

    fn transport_error(&self, err: &reqwest::Error) -> TrippinError {
        if err.is_timeout() {
            TrippinError::transport(format!(
                "Request timed out after {} seconds",
                self.timeout.as_secs()
            ))
        } else {
            TrippinError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl ItineraryApi for ItineraryClient {
    #[instrument(skip(self, request), fields(location = %request.location, days = request.days, budget = request.budget))]
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<ItineraryResponse> {
        let url = self.endpoint();
        info!("Requesting itinerary for '{}'", request.location);
        debug!("Itinerary service request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Network error after {:.3}s: {}", start_time.elapsed().as_secs_f64(), e);
                self.transport_error(&e)
            })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            self.transport_error(&e)
        })?;

        if !status.is_success() {
            let message = ErrorPayload::detail_from(&body)
                .unwrap_or_else(|| SERVICE_FALLBACK_MESSAGE.to_string());
            warn!("Itinerary service rejected request ({}): {}", status, message);
            return Err(TrippinError::service(status.as_u16(), message));
        }

        let parse_start = Instant::now();
        let itinerary: ItineraryResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse itinerary response: {}", e);
            TrippinError::malformed(e.to_string())
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Received itinerary with {} places in {} categories in {:.3}s (parse: {:.3}s)",
            itinerary.place_count(),
            itinerary.places.len(),
            total_duration.as_secs_f64(),
            parse_start.elapsed().as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow itinerary service response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = ServiceConfig {
            base_url: "https://trips.example.com/".to_string(),
            timeout_seconds: 5,
        };
        let client = ItineraryClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://trips.example.com/generate-itinerary"
        );
    }

    #[test]
    fn test_default_endpoint() {
        let client = ItineraryClient::new(&ServiceConfig::default()).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/generate-itinerary");
    }
}
