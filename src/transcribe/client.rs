use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::{FetchError, TranscriptBatch, TranscriptSource};
use crate::Result;

/// NanoGPT YouTube transcript endpoint
pub const DEFAULT_ENDPOINT: &str = "https://nano-gpt.com/api/youtube-transcribe";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Serialize)]
struct TranscribeRequest<'a> {
    urls: &'a [String],
}

/// HTTP client for the batch transcript service
#[derive(Debug, Clone)]
pub struct TranscriptClient {
    endpoint: String,
    client: reqwest::Client,
}

impl TranscriptClient {
    /// Create a client against the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one batch request, surfacing any fault as a `FetchError`
    pub async fn try_fetch(
        &self,
        urls: &[String],
        api_key: &str,
    ) -> std::result::Result<TranscriptBatch, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .json(&TranscribeRequest { urls })
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Transcript API response status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Transcript API error: {} {}", status.as_u16(), body);
            return Err(FetchError::from_status(status.as_u16(), body));
        }

        let batch: TranscriptBatch = response.json().await?;
        Ok(batch)
    }
}

#[async_trait]
impl TranscriptSource for TranscriptClient {
    async fn fetch(&self, urls: &[String], api_key: &str) -> TranscriptBatch {
        tracing::info!(
            "Fetching transcripts for {} URLs: {}",
            urls.len(),
            urls.join(", ")
        );

        match self.try_fetch(urls, api_key).await {
            Ok(batch) => {
                tracing::info!(
                    "Fetched {}/{} transcripts. Cost: ${}",
                    batch.summary.successful,
                    batch.summary.requested,
                    batch.summary.total_cost
                );
                batch
            }
            Err(err) => {
                tracing::warn!("Failed to fetch transcripts: {}", err);
                err.into_batch(urls)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_nanogpt() {
        let client = TranscriptClient::new().unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn request_body_carries_urls() {
        let urls = vec!["https://youtu.be/a".to_string()];
        let body = serde_json::to_value(TranscribeRequest { urls: &urls }).unwrap();
        assert_eq!(body, serde_json::json!({ "urls": ["https://youtu.be/a"] }));
    }
}
