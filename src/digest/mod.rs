use serde::{Deserialize, Serialize};

use crate::extractors::{partition_urls, ClassifiedUrls};
use crate::transcribe::{TranscriptBatch, TranscriptSource};

pub mod formatters;

pub use formatters::{MAX_TRANSCRIPT_CHARS, TRUNCATION_MARKER};

/// Final text handed to the language model, plus its two summary scalars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    pub content: String,
    pub success_count: usize,
    pub cost: f64,
}

impl Digest {
    fn without_transcripts(content: String) -> Self {
        Self {
            content,
            success_count: 0,
            cost: 0.0,
        }
    }
}

/// URL list in, digest out: classify, fetch once, assemble
pub struct DigestPipeline<S> {
    source: S,
}

impl<S: TranscriptSource> DigestPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build a digest for `urls`.
    ///
    /// The transcript source is called at most once, and only when at least one
    /// URL is a supported video link. No failure escapes: every outcome is described
    /// in the returned digest's text.
    pub async fn process<U: AsRef<str>>(&self, urls: &[U], api_key: &str) -> Digest {
        if urls.is_empty() {
            return Digest::default();
        }

        tracing::info!("Processing {} YouTube URLs", urls.len());

        let classified = partition_urls(urls);
        if classified.valid.is_empty() {
            tracing::warn!("All {} URLs were invalid or unsupported", urls.len());
            return Digest::without_transcripts(formatters::format_all_invalid());
        }

        let batch = self.source.fetch(&classified.valid, api_key).await;
        assemble(&classified, &batch)
    }
}

/// Turn classifier output and a fetched batch into a digest
pub fn assemble(classified: &ClassifiedUrls, batch: &TranscriptBatch) -> Digest {
    if batch.summary.successful == 0 {
        let digest = Digest::without_transcripts(formatters::format_total_failure(batch));
        tracing::info!(
            "All transcripts failed. Main error: {}",
            batch
                .failed()
                .next()
                .and_then(|t| t.error.as_deref())
                .unwrap_or("Unknown error")
        );
        return digest;
    }

    Digest {
        content: formatters::format_transcripts(classified, batch),
        success_count: batch.summary.successful,
        cost: batch.summary.total_cost,
    }
}
