// src/client.rs

use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;

use crate::config::BackendConfig;
use crate::errors::{GENERIC_FAILURE, PortalError, Result};
use crate::models::{Dataset, ExperimentRequest, ExperimentResult};

/// HTTP client for the QCaaS classification backend.
///
/// Owns the one external contract of the application: a single
/// `POST {api_base}/run_comparison` per submission, bounded by the
/// configured timeout, with failures classified into the user-facing
/// error taxonomy. No retries, no caching.
#[derive(Clone)]
pub struct QcaasClient {
    client: Client,
    config: BackendConfig,
}

/// Shape the backend uses for failure bodies. Both fields are optional;
/// anything unparseable degrades to the generic message.
#[derive(Deserialize)]
struct BackendErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl QcaasClient {
    /// Creates a new `QcaasClient`.
    pub fn new(client: Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// Runs the SVM-vs-VQC comparison for one dataset and returns the
    /// backend's verdict verbatim.
    pub async fn run_comparison(&self, dataset: Dataset) -> Result<ExperimentResult> {
        let url = format!("{}/run_comparison", self.config.api_base.trim_end_matches('/'));

        println!("📡 Submitting comparison: {} with dataset: {}", url, dataset);

        let body = ExperimentRequest {
            dataset_name: dataset,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        println!("📥 Backend response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let message = resp
                .json::<BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| {
                    // `error` wins over `message`; blank strings don't count.
                    body.error
                        .filter(|s| !s.is_empty())
                        .or(body.message.filter(|s| !s.is_empty()))
                })
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(PortalError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let result: ExperimentResult = resp.json().await.map_err(classify_transport_error)?;

        Ok(result)
    }
}

/// Timeout is checked first: a request that times out while connecting
/// reports both, and the user should see the timeout message.
fn classify_transport_error(err: reqwest::Error) -> PortalError {
    if err.is_timeout() {
        PortalError::Timeout
    } else if err.is_connect() {
        PortalError::Connection
    } else {
        PortalError::Unexpected(err)
    }
}
