use crate::extractors::{youtube, ClassifiedUrls};
use crate::transcribe::{TranscriptBatch, TranscriptResult};
use crate::utils::truncate_chars;

/// Longest transcript body carried into a digest, in characters
pub const MAX_TRANSCRIPT_CHARS: usize = 15_000;

/// Appended to a transcript body that was cut at `MAX_TRANSCRIPT_CHARS`
pub const TRUNCATION_MARKER: &str = "\n\n[Transcript truncated...]";

/// Separator placed between transcript sections
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Closing directive of every successful digest
pub const USE_TRANSCRIPTS_INSTRUCTION: &str = "Instructions: Use the above YouTube video transcripts to answer the user's query. Reference specific content from the videos where relevant.";

const UNKNOWN_ERROR: &str = "Unknown error";
const UNKNOWN_TITLE: &str = "Unknown Title";

/// Digest text for input where no URL was a supported video link
pub fn format_all_invalid() -> String {
    let formats = youtube::supported_formats()
        .iter()
        .map(|example| format!("- {}", example))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "YouTube Video Processing Failed:\n\n\
         All provided YouTube URLs were invalid or not in a supported format.\n\n\
         Supported YouTube URL formats:\n\
         {}\n\n\
         Instructions: Let the user know they need to provide valid YouTube URLs.\n\n",
        formats
    )
}

/// Digest text for a batch in which nothing succeeded
pub fn format_total_failure(batch: &TranscriptBatch) -> String {
    let main_error = batch
        .failed()
        .next()
        .and_then(|t| t.error.as_deref())
        .unwrap_or(UNKNOWN_ERROR);

    format!(
        "YouTube Video Processing Failed:\n\n\
         YouTube URLs were detected but transcript extraction failed with the following error:\n\
         {}\n\n\
         Possible solutions:\n\
         1. Verify the API key has sufficient balance and transcript access permissions\n\
         2. Ensure the YouTube videos have available captions/transcripts\n\
         3. Check if the videos are public and not age-restricted or deleted\n\
         4. Try again later if you received a rate limit error\n\n\
         Instructions: Let the user know that YouTube transcript processing is currently unavailable.\n\n",
        main_error
    )
}

/// Digest text for a batch with at least one successful transcript
pub fn format_transcripts(classified: &ClassifiedUrls, batch: &TranscriptBatch) -> String {
    let sections = batch
        .successful()
        .enumerate()
        .map(|(index, result)| format_section(index + 1, result))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    format!(
        "YouTube Video Transcripts:\n\n{}{}\n{}\n\n",
        sections,
        format_failure_notes(classified, batch),
        USE_TRANSCRIPTS_INSTRUCTION
    )
}

/// One numbered transcript section
pub fn format_section(number: usize, result: &TranscriptResult) -> String {
    format!(
        "[YouTube Video {}] {}\nURL: {}\n\n{}",
        number,
        result.title.as_deref().unwrap_or(UNKNOWN_TITLE),
        result.url,
        truncate_transcript(result.transcript.as_deref().unwrap_or_default())
    )
}

/// Cap a transcript body at `MAX_TRANSCRIPT_CHARS`, marking any cut
pub fn truncate_transcript(transcript: &str) -> String {
    match truncate_chars(transcript, MAX_TRANSCRIPT_CHARS) {
        Some(head) => format!("{}{}", head, TRUNCATION_MARKER),
        None => transcript.to_string(),
    }
}

fn format_failure_notes(classified: &ClassifiedUrls, batch: &TranscriptBatch) -> String {
    let mut notes = String::new();

    let failed: Vec<&TranscriptResult> = batch.failed().collect();
    if !failed.is_empty() {
        notes.push_str(&format!(
            "\n\nNote: {} YouTube video(s) could not be processed:\n",
            failed.len()
        ));
        notes.push_str(
            &failed
                .iter()
                .map(|t| format!("- {}: {}", t.url, t.error.as_deref().unwrap_or(UNKNOWN_ERROR)))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        notes.push('\n');
    }

    if !classified.invalid.is_empty() {
        notes.push_str(&format!(
            "\n\nNote: {} URL(s) were invalid and skipped:\n",
            classified.invalid.len()
        ));
        notes.push_str(
            &classified
                .invalid
                .iter()
                .map(|url| format!("- {}", url))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        notes.push('\n');
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_transcript_is_cut_to_cap() {
        let body = "a".repeat(20_000);
        let truncated = truncate_transcript(&body);

        assert!(truncated.ends_with(TRUNCATION_MARKER));
        let head = truncated.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(head.chars().count(), MAX_TRANSCRIPT_CHARS);
    }

    #[test]
    fn transcript_at_cap_is_untouched() {
        let body = "b".repeat(MAX_TRANSCRIPT_CHARS);
        assert_eq!(truncate_transcript(&body), body);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let body = "é".repeat(MAX_TRANSCRIPT_CHARS + 1);
        let truncated = truncate_transcript(&body);
        let head = truncated.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(head.chars().count(), MAX_TRANSCRIPT_CHARS);
    }

    #[test]
    fn section_falls_back_to_unknown_title() {
        let result = TranscriptResult {
            url: "https://youtu.be/a".to_string(),
            success: true,
            title: None,
            transcript: Some("hello".to_string()),
            error: None,
        };

        assert_eq!(
            format_section(3, &result),
            "[YouTube Video 3] Unknown Title\nURL: https://youtu.be/a\n\nhello"
        );
    }

    #[test]
    fn all_invalid_lists_every_supported_shape() {
        let content = format_all_invalid();
        for shape in ["watch?v=", "youtu.be/", "/embed/", "/v/", "/live/"] {
            assert!(content.contains(shape), "missing {shape}");
        }
    }
}
