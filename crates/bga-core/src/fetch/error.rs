//! Fetch error type.

use thiserror::Error;

/// Why a single GET did not yield a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Not an absolute HTTP(S) URL.
    #[error("not an absolute http(s) URL: {0}")]
    InvalidUrl(String),
    /// No response: connection failure, timeout, DNS, etc.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response status other than 200.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// The request was redirected while redirects are disallowed.
    #[error("GET {url} was redirected")]
    Redirected { url: String },
}
