use std::time::Duration;
use symscan_core::{Error, PageFetcher, Result};

pub mod catalog;
pub mod extract;
pub mod matches;
pub mod report;

/// Browser-identifying User-Agent sent on every request. Some encyclopedia
/// hosts reject unidentified clients, so the default mimics a desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const DEFAULT_TIMEOUT_S: u64 = 10;
const DEFAULT_MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Applies to both connect and the whole request.
    pub timeout: Duration,
    pub user_agent: String,
    /// Hard cap on bytes read from the response body.
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_S),
            user_agent: BROWSER_USER_AGENT.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Single-attempt page fetcher over reqwest. No retries and no cache: every
/// call is one GET, bounded by the configured timeout and body cap, and any
/// failure (network, timeout, non-2xx status) comes back as `Error::Fetch`.
#[derive(Debug, Clone)]
pub struct LocalFetcher {
    client: reqwest::Client,
    max_body_bytes: u64,
}

impl LocalFetcher {
    pub fn new(cfg: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&cfg.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .connect_timeout(cfg.timeout)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;
        Ok(Self {
            client,
            max_body_bytes: cfg.max_body_bytes,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(FetchConfig::default())
    }
}

#[async_trait::async_trait]
impl PageFetcher for LocalFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let fail = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("http status {status}")));
        }

        let max = self.max_body_bytes as usize;
        let mut bytes: Vec<u8> = Vec::new();
        let mut stream = resp.bytes_stream();
        use futures_util::StreamExt;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| fail(e.to_string()))?;
            if bytes.len().saturating_add(chunk.len()) > max {
                let can_take = max.saturating_sub(bytes.len());
                bytes.extend_from_slice(&chunk[..can_take]);
                break;
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&bytes).to_string())
    }
}
