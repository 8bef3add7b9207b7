//! Transcript Digest - turn a list of YouTube links into one LLM-ready text block
//!
//! This library classifies user-supplied URLs, fetches machine-generated transcripts
//! for the supported ones in a single batch request, and assembles the results
//! (including partial failures) into a digest that can be dropped into a prompt.

pub mod cli;
pub mod config;
pub mod digest;
pub mod extractors;
pub mod output;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use digest::{Digest, DigestPipeline};
pub use extractors::{extract_video_id, partition_urls, ClassifiedUrls};
pub use transcribe::{
    BatchSummary, FetchError, TranscriptBatch, TranscriptClient, TranscriptResult,
    TranscriptSource,
};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the digest tool
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    #[error("No API key configured: pass --api-key, set NANOGPT_API_KEY, or add service.api_key to the config file")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
