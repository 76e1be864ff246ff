//! Source fetching: one blocking GET per call, classified as audio or JSON.
//!
//! The `Fetch` trait is what the resolver depends on; `CurlFetcher` is the
//! libcurl-backed implementation used in production.

mod curl_fetcher;
mod error;
mod extension;

pub use curl_fetcher::{CurlFetcher, BROWSER_USER_AGENT, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use extension::{extension_for, extension_from_content_type, extension_from_url_path};

/// Media marker that flags a response as a JSON wrapper rather than audio.
pub const JSON_CONTENT_MARKER: &str = "application/json";

/// Body and classification of a successful GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub payload: Vec<u8>,
    pub is_json: bool,
    /// File extension including the dot (e.g. `.mp3`). `None` for JSON
    /// responses; may be empty when nothing could be inferred.
    pub extension: Option<String>,
}

impl FetchResult {
    /// Builds a result from a response body and its declared content type.
    pub fn classify(url: &str, content_type: &str, payload: Vec<u8>) -> Self {
        let is_json = content_type.contains(JSON_CONTENT_MARKER);
        let extension = if is_json {
            None
        } else {
            Some(extension_for(content_type, url))
        };
        Self {
            payload,
            is_json,
            extension,
        }
    }
}

/// Performs a single GET for a resolved URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        (**self).fetch(url)
    }
}

/// Parses `raw` and accepts it only as an absolute `http`/`https` URL.
pub fn parse_http_url(raw: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(parsed),
        _ => Err(FetchError::InvalidUrl(raw.to_string())),
    }
}
