use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_digest::cli::{Cli, Commands, OutputFormat};
use transcript_digest::config::Config;
use transcript_digest::extractors::youtube;
use transcript_digest::{output, utils, DigestPipeline, TranscriptClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the digest on stdout stays clean
    let default_filter = if cli.verbose {
        "transcript_digest=debug"
    } else {
        "transcript_digest=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Config { init: true, .. } = cli.command {
        let path = Config::default().save(cli.config.as_deref())?;
        println!("Configuration written to: {}", path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            urls,
            api_key,
            endpoint,
            output,
            format,
        } => {
            let api_key = config.resolve_api_key(api_key.as_deref())?;
            let endpoint = match endpoint {
                Some(endpoint) => utils::validate_endpoint(&endpoint)?,
                None => config.service.endpoint.clone(),
            };
            let format = format
                .or_else(|| OutputFormat::from_name(&config.app.default_output_format))
                .unwrap_or(OutputFormat::Text);

            let client = TranscriptClient::with_endpoint(endpoint, config.timeout())?;
            let pipeline = DigestPipeline::new(client);

            let progress = if cli.quiet {
                ProgressBar::hidden()
            } else {
                let progress = ProgressBar::new_spinner();
                progress.set_style(
                    ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
                );
                progress.enable_steady_tick(Duration::from_millis(120));
                progress
            };
            progress.set_message(format!("Fetching transcripts for {} URL(s)...", urls.len()));

            let digest = pipeline.process(&urls, &api_key).await;

            progress.finish_and_clear();

            match output {
                Some(path) => {
                    output::save_to_file(&digest, &path, &format)?;
                    eprintln!("Digest saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&digest, &format)?;
                }
            }

            if !cli.quiet {
                eprintln!("{}", output::summary_line(&digest));
            }
        }
        Commands::Config { show, .. } => {
            if show {
                config.display();
            } else {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                println!("Edit the config file to change settings:");
                println!("  {}", path.display());
            }
        }
        Commands::Formats => {
            println!("Supported YouTube URL formats:");
            for example in youtube::supported_formats() {
                println!("  • {}", example);
            }
        }
    }

    Ok(())
}
