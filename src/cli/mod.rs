use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "digest",
    about = "Transcript Digest - Turn YouTube links into one LLM-ready transcript digest",
    version,
    long_about = "Classifies the given URLs, fetches transcripts for every supported YouTube link in a single batch request, and prints a digest describing successes and failures, ready to paste into a language-model prompt."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ./digest.yaml or the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch transcripts for the given URLs and print the digest
    Run {
        /// YouTube URLs (unsupported entries are reported, not fatal)
        #[arg(value_name = "URL")]
        urls: Vec<String>,

        /// API key for the transcript service
        #[arg(long, env = "NANOGPT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Override the transcript service endpoint
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (defaults to app.default_output_format from the config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long, conflicts_with = "show")]
        init: bool,
    },

    /// List supported YouTube URL formats
    Formats,
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Digest text only
    Text,
    /// JSON with content, successCount and cost
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_multiple_urls() {
        let cli = Cli::try_parse_from([
            "digest",
            "run",
            "https://youtu.be/a",
            "https://youtu.be/b",
            "--api-key",
            "k",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                urls,
                api_key,
                format,
                ..
            } => {
                assert_eq!(urls.len(), 2);
                assert_eq!(api_key.as_deref(), Some("k"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn format_names_round_through_display() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_name(&format.to_string()), Some(format));
        }
        assert_eq!(OutputFormat::from_name("srt"), None);
    }
}
