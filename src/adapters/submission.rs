use crate::config::toml_config::{SiteConfig, SubmissionMode, DEFAULT_SUBMISSION_DELAY_MS};
use crate::domain::model::{ContactPayload, SubmissionOutcome};
use crate::domain::ports::SubmissionService;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Stand-in backend: waits, then accepts every message.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS))
    }
}

#[async_trait]
impl SubmissionService for SimulatedSubmission {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionOutcome> {
        tracing::debug!(
            "Simulating submission from {} ({:?} delay)",
            payload.email,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionOutcome::Accepted)
    }
}

/// Posts the payload as JSON to a real endpoint.
///
/// 2xx accepts, 4xx rejects; 5xx and transport failures are `SubmissionError`s.
#[derive(Debug, Clone)]
pub struct HttpSubmission {
    client: Client,
    endpoint: String,
}

impl HttpSubmission {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionService for HttpSubmission {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionOutcome> {
        tracing::debug!("Posting contact form to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SiteError::submission(format!("request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Contact endpoint responded with {}", status);

        if status.is_success() {
            Ok(SubmissionOutcome::Accepted)
        } else if status.is_client_error() {
            Ok(SubmissionOutcome::Rejected)
        } else {
            Err(SiteError::submission(format!(
                "endpoint returned {}",
                status
            )))
        }
    }
}

/// Picks the backend named by `[submission] mode`.
pub fn from_config(config: &SiteConfig) -> Result<Box<dyn SubmissionService>> {
    match config.submission_mode() {
        SubmissionMode::Simulated => Ok(Box::new(SimulatedSubmission::new(
            config.submission_delay(),
        ))),
        SubmissionMode::Http => {
            let endpoint = config
                .submission_endpoint()
                .ok_or_else(|| SiteError::MissingConfigError {
                    field: "submission.endpoint".to_string(),
                })?;
            Ok(Box::new(HttpSubmission::new(
                endpoint,
                config.submission_timeout(),
            )?))
        }
    }
}
