use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod client;

pub use client::TranscriptClient;

/// Outcome for a single requested URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// URL as it was submitted
    pub url: String,

    pub success: bool,

    /// Video title (if the service found one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Transcript text (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// Reason this URL failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranscriptResult {
    /// Build a failed entry for `url`
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: false,
            title: None,
            transcript: None,
            error: Some(error.into()),
        }
    }
}

/// Aggregate counters for one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub requested: usize,
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,

    /// Total charge for the batch, in service currency units
    pub total_cost: f64,
}

/// Everything one batch request produced: per-URL results plus the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptBatch {
    pub transcripts: Vec<TranscriptResult>,
    pub summary: BatchSummary,
}

impl TranscriptBatch {
    pub fn successful(&self) -> impl Iterator<Item = &TranscriptResult> {
        self.transcripts.iter().filter(|t| t.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &TranscriptResult> {
        self.transcripts.iter().filter(|t| !t.success)
    }
}

/// Reasons a whole batch request can fail
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Authentication failed (401): Invalid API key or insufficient permissions.")]
    Unauthorized,

    #[error("Payment required (402): Insufficient balance for YouTube transcript requests.")]
    PaymentRequired,

    #[error("Rate limit exceeded (429): Too many requests. Please wait before trying again.")]
    RateLimited,

    #[error("API error: {status} {body}")]
    Api { status: u16, body: String },

    /// No usable response: connection, timeout, or an undecodable body
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Map a non-success HTTP status and its body to a fault
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 => FetchError::Unauthorized,
            402 => FetchError::PaymentRequired,
            429 => FetchError::RateLimited,
            _ => FetchError::Api {
                status,
                body: body.into(),
            },
        }
    }

    /// Collapse this fault into a batch where every requested URL failed with the same message
    pub fn into_batch(self, urls: &[String]) -> TranscriptBatch {
        let message = self.to_string();
        let requested = urls.len();

        TranscriptBatch {
            transcripts: urls
                .iter()
                .map(|url| TranscriptResult::failed(url.as_str(), message.as_str()))
                .collect(),
            summary: BatchSummary {
                requested,
                processed: requested,
                successful: 0,
                failed: requested,
                total_cost: 0.0,
            },
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Something that can turn a batch of video URLs into transcripts.
///
/// Implementations make at most one request per call and never fail: every fault
/// must already be folded into the returned batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, urls: &[String], api_key: &str) -> TranscriptBatch;
}
