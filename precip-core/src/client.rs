use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::debug;

use crate::error::ForecastError;
use crate::model::{ForecastInput, ForecastReport};

/// Default address of the forecast service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/weather";

/// Anything that can turn a completed form into a forecast report.
///
/// [`ForecastClient`] is the production implementation; session tests drive
/// the lifecycle with stubs instead.
#[async_trait]
pub trait ForecastService: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        input: &ForecastInput,
    ) -> Result<ForecastReport, ForecastError>;
}

/// HTTP client for the forecast service.
///
/// One POST per submission. No retry, no timeout: the call waits for a
/// response or a lower-level transport failure.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    endpoint: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Failure bodies are JSON objects with an optional `error` field.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Map a non-2xx response to an error. The body is parsed leniently: an
/// empty or non-JSON failure body falls back to the unknown-error message.
fn decode_failure(status: StatusCode, body: &str) -> ForecastError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error);

    ForecastError::api(status, message)
}

#[async_trait]
impl ForecastService for ForecastClient {
    async fn fetch_forecast(
        &self,
        input: &ForecastInput,
    ) -> Result<ForecastReport, ForecastError> {
        let payload = input.to_payload();

        debug!(endpoint = %self.endpoint, "sending forecast request");

        let res = self.http.post(&self.endpoint).json(&payload).send().await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(%status, "forecast response received");

        if !status.is_success() {
            return Err(decode_failure(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
