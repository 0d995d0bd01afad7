//! HTTP client for the trip calculation service.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::trip::TripResponse;

/// Environment variable overriding [`TripApiConfig::base_url`].
pub const BASE_URL_ENV: &str = "TRIP_API_URL";

const FALLBACK_ERROR: &str = "Failed to calculate trip. Please check your inputs and try again.";

#[derive(Debug, Clone)]
pub struct TripApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for TripApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TripApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset or blank keys
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

/// Trip inputs sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the current 70-hour/8-day cycle.
    pub current_cycle_used: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trip service returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct TripClient {
    config: TripApiConfig,
    client: reqwest::blocking::Client,
}

impl TripClient {
    pub fn new(config: TripApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &TripApiConfig {
        &self.config
    }

    pub fn calculate_trip(&self, request: &TripRequest) -> Result<TripResponse, ClientError> {
        let url = format!("{}/calculate-trip/", self.config.base_url);
        let response = self.client.post(url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            info!(status = status.as_u16(), %message, "trip calculation rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let trip = response.json::<TripResponse>()?;
        info!(days = trip.trip_plan.daily_logs.len(), "trip calculated");
        Ok(trip)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}
