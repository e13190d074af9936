//! Outbound scoring: the trait seam the form controller submits through and
//! the reqwest-backed client that talks to the real endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::ScoringConfig;

/// Request body: the feature vector under its fixed key.
#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub features: &'a [f64],
}

/// Successful response body from the scoring endpoint.
#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub predicted_interest_rate: f64,
}

/// Internal failure taxonomy for one prediction exchange. Callers collapse
/// all variants into the single user-facing failure message.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("network error: {message}")]
    Network { message: String },
    #[error("scoring endpoint returned status {status}")]
    Status { status: u16 },
    #[error("malformed prediction body: {message}")]
    MalformedBody { message: String },
}

/// Abstraction over the scoring exchange so the controller can be exercised
/// without a network.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn predict(&self, features: &[f64]) -> Result<f64, PredictionError>;
}

/// HTTP client for the remote scoring endpoint.
///
/// One POST per prediction; no retries, no auth, and deliberately no request
/// timeout: a hung endpoint suspends only the submission that issued it.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::from_url(config.endpoint.clone())
    }

    pub fn from_url(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringService for PredictionClient {
    async fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        debug!(endpoint = %self.endpoint, count = features.len(), "submitting feature vector");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&PredictionRequest { features })
            .send()
            .await
            .map_err(|err| PredictionError::Network {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "scoring endpoint rejected the request");
            return Err(PredictionError::Status {
                status: status.as_u16(),
            });
        }

        let body: PredictionResponse =
            response
                .json()
                .await
                .map_err(|err| PredictionError::MalformedBody {
                    message: err.to_string(),
                })?;

        Ok(body.predicted_interest_rate)
    }
}
