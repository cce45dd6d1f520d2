use super::types::{MatchResult, ResumeFile, ServiceErrorBody};
use crate::config::MatcherConfig;
use crate::error::RequestError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, error, info};

const MATCH_CUSTOM_ENDPOINT: &str = "/match_custom";

/// Anything that can score a résumé against a job description.
#[async_trait]
pub trait MatchService: Send + Sync {
    async fn submit(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<MatchResult, RequestError>;
}

pub struct MatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl MatchClient {
    pub fn new(config: &MatcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, MATCH_CUSTOM_ENDPOINT)
    }

    fn build_form(resume: &ResumeFile, job_description: &str) -> Result<Form, RequestError> {
        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(resume.mime_type())?;

        Ok(Form::new()
            .part("resume", part)
            .text("job_description", job_description.to_string()))
    }
}

#[async_trait]
impl MatchService for MatchClient {
    async fn submit(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<MatchResult, RequestError> {
        let url = self.endpoint();
        let form = Self::build_form(resume, job_description)?;

        info!(
            "Submitting '{}' ({} bytes) to {}",
            resume.file_name,
            resume.len(),
            url
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Match service responded with {}", status);

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            error!("Match service error {}: {}", status, message);
            return Err(RequestError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let result: MatchResult = serde_json::from_str(&body).map_err(|e| {
            error!("Unexpected match response shape: {}", e);
            RequestError::MalformedResponse(e)
        })?;

        info!(
            "Match score {:.3} ({} matched, {} suggested)",
            result.match_score,
            result.matched_keywords.len(),
            result.suggested_keywords.len()
        );
        Ok(result)
    }
}
