//! libcurl-backed fetcher.

use std::time::Duration;

use super::{parse_http_url, Fetch, FetchError, FetchResult};

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Identifies as a desktop browser; some providers refuse non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

const MAX_REDIRECTIONS: u32 = 10;

/// Blocking GET via a fresh curl easy handle per request.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    pub timeout: Duration,
    pub user_agent: String,
    /// When false, a response reached through any redirect is refused.
    pub allow_redirects: bool,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: BROWSER_USER_AGENT.to_string(),
            allow_redirects: true,
        }
    }
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_redirects(mut self, allow: bool) -> Self {
        self.allow_redirects = allow;
        self
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let parsed = parse_http_url(url)?;
        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(parsed.as_str()).map_err(transport)?;
        easy.get(true).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(MAX_REDIRECTIONS).map_err(transport)?;
        easy.useragent(&self.user_agent).map_err(transport)?;
        easy.connect_timeout(self.timeout).map_err(transport)?;
        easy.timeout(self.timeout).map_err(transport)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = easy.response_code().map_err(transport)?;
        if code != 200 {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        if !self.allow_redirects && easy.redirect_count().map_err(transport)? > 0 {
            return Err(FetchError::Redirected {
                url: url.to_string(),
            });
        }

        let content_type = easy
            .content_type()
            .map_err(transport)?
            .unwrap_or("")
            .to_string();

        tracing::trace!(url, %content_type, bytes = body.len(), "fetched");
        Ok(FetchResult::classify(url, &content_type, body))
    }
}
