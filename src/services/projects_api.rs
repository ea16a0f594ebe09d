use async_trait::async_trait;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::ProjectSubmission;

/// External service that persists accepted submissions.
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    async fn create_project(&self, submission: &ProjectSubmission) -> AppResult<()>;
}

/// `POST {base_url}/projects` over HTTP with a JSON body.
#[derive(Clone, Debug)]
pub struct HttpProjectsApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProjectsApi {
    pub fn new(api: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self::with_client(client, &api.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}/projects", base_url.trim_end_matches('/'));
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProjectsApi for HttpProjectsApi {
    async fn create_project(&self, submission: &ProjectSubmission) -> AppResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        tracing::debug!(endpoint = %self.endpoint, status = %status, "Projects API accepted submission");
        Ok(())
    }
}
