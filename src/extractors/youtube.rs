use once_cell::sync::Lazy;
use regex::Regex;

/// One recognized YouTube URL shape
pub struct UrlPattern {
    /// Short name of the shape, e.g. `watch`
    pub shape: &'static str,

    /// Example URL shown to users when their input is rejected
    pub example: &'static str,

    regex: Regex,
}

impl UrlPattern {
    fn new(shape: &'static str, example: &'static str, pattern: &str) -> Self {
        Self {
            shape,
            example,
            regex: Regex::new(pattern).expect("static URL pattern must compile"),
        }
    }

    /// Return the video ID captured by this pattern, if the URL matches
    pub fn capture<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.regex
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// Recognized shapes, tried in order. The first match decides.
pub static PATTERNS: Lazy<Vec<UrlPattern>> = Lazy::new(|| {
    vec![
        UrlPattern::new(
            "watch",
            "https://www.youtube.com/watch?v=VIDEO_ID",
            r"youtube\.com/watch\?v=([^&?#]+)",
        ),
        UrlPattern::new("short", "https://youtu.be/VIDEO_ID", r"youtu\.be/([^?&#]+)"),
        UrlPattern::new(
            "embed",
            "https://youtube.com/embed/VIDEO_ID",
            r"youtube\.com/embed/([^?&#]+)",
        ),
        UrlPattern::new("v", "https://youtube.com/v/VIDEO_ID", r"youtube\.com/v/([^?&#]+)"),
        UrlPattern::new(
            "live",
            "https://youtube.com/live/VIDEO_ID",
            r"youtube\.com/live/([^?&#]+)",
        ),
    ]
});

/// Find the first pattern that matches `url` and return it with the captured ID
pub fn match_url(url: &str) -> Option<(&'static UrlPattern, &str)> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.capture(url).map(|id| (pattern, id)))
}

/// Example URLs for every supported shape, in table order
pub fn supported_formats() -> Vec<&'static str> {
    PATTERNS.iter().map(|pattern| pattern.example).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_stops_at_query_delimiters() {
        let cases = [
            ("https://www.youtube.com/watch?v=abc123&t=42", "watch"),
            ("https://youtu.be/abc123?si=xyz", "short"),
            ("https://youtube.com/embed/abc123?autoplay=1", "embed"),
            ("https://youtube.com/v/abc123?version=3", "v"),
            ("https://youtube.com/live/abc123?feature=share", "live"),
            ("https://youtu.be/abc123&feature=share", "short"),
            ("https://youtube.com/live/abc123&x=1", "live"),
        ];

        for (url, shape) in cases {
            let (pattern, id) = match_url(url).unwrap_or_else(|| panic!("no match for {url}"));
            assert_eq!(pattern.shape, shape, "wrong shape for {url}");
            assert_eq!(id, "abc123", "wrong id for {url}");
        }
    }

    #[test]
    fn mobile_watch_links_match_watch_pattern() {
        let (pattern, id) = match_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(pattern.shape, "watch");
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn empty_id_does_not_match() {
        assert!(match_url("https://youtu.be/").is_none());
        assert!(match_url("https://www.youtube.com/watch?v=&t=1").is_none());
    }

    #[test]
    fn supported_formats_follow_table_order() {
        let formats = supported_formats();
        assert_eq!(formats.len(), 5);
        assert_eq!(formats[0], "https://www.youtube.com/watch?v=VIDEO_ID");
        assert_eq!(formats[4], "https://youtube.com/live/VIDEO_ID");
    }
}
