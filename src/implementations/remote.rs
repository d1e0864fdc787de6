use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{FactCheckError, FactCheckResult};
use crate::models::claim::Claim;
use crate::models::verdict::RemoteReport;

/// Request body sent to the fact-check backend
#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    claim: &'a str,
}

/// Error body returned by the backend on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the remote fact-check backend.
///
/// One POST per check, no retries. Any transport error or non-success status
/// becomes a `FactCheckError` that the pipeline either surfaces (strict mode)
/// or absorbs into the local fallback.
#[derive(Debug, Clone)]
pub struct RemoteBackendClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl RemoteBackendClient {
    pub fn new(endpoint: String, timeout: Duration) -> FactCheckResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FactCheckError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the claim and parse the backend's report
    pub async fn check_claim(&self, claim: &Claim) -> FactCheckResult<RemoteReport> {
        info!("Submitting claim to backend at {}", self.endpoint);
        debug!("Claim length: {} characters", claim.len());

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&CheckRequest { claim: claim.text() })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .error
                    .unwrap_or_else(|| "Backend rejected the request".to_string()),
                Err(_) => "Backend rejected the request".to_string(),
            };
            warn!("Backend returned {}: {}", status, message);
            return Err(FactCheckError::BackendError {
                status: status.as_u16(),
                message,
            });
        }

        let report = response.json::<RemoteReport>().await.map_err(|e| {
            FactCheckError::TransportError(format!("Failed to parse backend response: {}", e))
        })?;

        info!(
            "Backend report received: credibility {}, {} related articles",
            report.credibility_score,
            report.related_articles.len()
        );
        Ok(report)
    }
}
