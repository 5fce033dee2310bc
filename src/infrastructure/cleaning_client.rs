// ============================================================
// CLEANING SERVICE CLIENT
// ============================================================
// Single HTTP POST exchange with the remote cleaning service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::clean_config::CleaningServiceConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{RawTable, Record};
use crate::domain::threshold::ThresholdPercent;

/// Request body sent to the cleaning endpoint, serialized verbatim
#[derive(Debug, Clone, Serialize)]
pub struct CleanRequest {
    pub data: RawTable,
    pub threshold: ThresholdPercent,
}

/// Normalized success payload of a cleaning exchange
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub cleaned_data: Vec<Record>,
    pub cleaned_row_count: usize,
}

/// Raw wire shape of the service response. The service answers with either
/// `{cleanedData, cleanedRowCount}` or `{error}`; error statuses (400/500)
/// still carry the JSON error body.
#[derive(Deserialize)]
struct CleanResponseBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "cleanedData", default)]
    cleaned_data: Option<Vec<Record>>,
    #[serde(rename = "cleanedRowCount", default)]
    cleaned_row_count: Option<usize>,
}

impl CleanResponseBody {
    /// Collapse the wire shape into a success outcome or a service error.
    /// A present, non-empty `error` field always wins, even when cleaned
    /// data rides along with it.
    fn normalize(self) -> Result<CleanOutcome> {
        if let Some(message) = self.error.filter(|m| !m.trim().is_empty()) {
            return Err(AppError::ServiceError(message));
        }

        let cleaned_data = self
            .cleaned_data
            .ok_or_else(|| AppError::ServiceError("invalid response format".to_string()))?;
        let cleaned_row_count = self.cleaned_row_count.unwrap_or(cleaned_data.len());

        Ok(CleanOutcome {
            cleaned_data,
            cleaned_row_count,
        })
    }
}

/// Seam for the cleaning exchange so the workflow can be driven by a mock
/// in tests
#[async_trait]
pub trait CleaningClient {
    async fn clean(
        &self,
        config: &CleaningServiceConfig,
        request: &CleanRequest,
    ) -> Result<CleanOutcome>;
}

pub struct HttpCleaningClient {
    client: reqwest::Client,
}

impl HttpCleaningClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpCleaningClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CleaningClient for HttpCleaningClient {
    async fn clean(
        &self,
        config: &CleaningServiceConfig,
        request: &CleanRequest,
    ) -> Result<CleanOutcome> {
        info!(
            endpoint = %config.endpoint,
            rows = request.data.row_count(),
            threshold = request.threshold.value(),
            "Submitting table to cleaning service"
        );

        let response = self
            .client
            .post(&config.endpoint)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("failed to read response: {}", e)))?;

        match serde_json::from_str::<CleanResponseBody>(&text) {
            Ok(body) => body.normalize(),
            Err(_) if !status.is_success() => Err(AppError::ServiceError(format!(
                "API error ({}): {}",
                status, text
            ))),
            Err(e) => Err(AppError::ServiceError(format!(
                "failed to parse response JSON: {}",
                e
            ))),
        }
    }
}
