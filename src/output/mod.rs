use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::digest::Digest;
use crate::utils::format_cost;

/// Render a digest in the requested format
pub fn render(digest: &Digest, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(digest.content.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(digest).context("Failed to serialize digest")
        }
    }
}

/// Save digest to file
pub fn save_to_file(digest: &Digest, path: &Path, format: &OutputFormat) -> Result<()> {
    let content = render(digest, format)?;
    fs_err::write(path, content)?;
    Ok(())
}

/// Print digest to console
pub fn print_to_console(digest: &Digest, format: &OutputFormat) -> Result<()> {
    let content = render(digest, format)?;
    println!("{}", content);
    Ok(())
}

/// One-line summary for stderr
pub fn summary_line(digest: &Digest) -> String {
    let count = format!("{} transcript(s)", digest.success_count);
    let count = if digest.success_count > 0 {
        style(count).green()
    } else {
        style(count).red()
    };

    format!("{} included, cost {}", count, format_cost(digest.cost))
}
