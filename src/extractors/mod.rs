use serde::{Deserialize, Serialize};

pub mod youtube;

/// Input URLs split by whether they name a supported video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedUrls {
    /// URLs that matched a supported shape, in input order
    pub valid: Vec<String>,

    /// URLs that matched nothing, in input order
    pub invalid: Vec<String>,
}

impl ClassifiedUrls {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Extract the YouTube video ID from any supported URL shape.
///
/// Never fails: input that matches no known shape yields `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    youtube::match_url(url).map(|(_, id)| id.to_string())
}

/// Check if the given URL is a supported YouTube video link
pub fn supports_url(url: &str) -> bool {
    youtube::match_url(url).is_some()
}

/// Partition raw URLs into supported and unsupported, keeping order and duplicates
pub fn partition_urls<S: AsRef<str>>(urls: &[S]) -> ClassifiedUrls {
    let mut classified = ClassifiedUrls::default();

    for url in urls {
        let url = url.as_ref();
        match youtube::match_url(url) {
            Some((pattern, id)) => {
                tracing::debug!("Accepted {} URL (video {}): {}", pattern.shape, id, url);
                classified.valid.push(url.to_string());
            }
            None => {
                tracing::debug!("Rejected unsupported URL: {}", url);
                classified.invalid.push(url.to_string());
            }
        }
    }

    classified
}
