use crate::config::HarvestConfig;
use crate::error::{ConfigError, FetchError};
use crate::fetchers::PageFetcher;
use async_trait::async_trait;
use flate2::read::GzDecoder;
use reqwest::Client;
use reqwest::header::{ACCEPT_ENCODING, CONTENT_ENCODING};
use reqwest::redirect::Policy;
use std::io::Read;
use std::time::Duration;
use url::Url;

/// Single-attempt HTTP page fetcher with gzip support
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from the run configuration
    pub fn new(config: &HarvestConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!("GET {}", url);
        let response = self
            .client
            .get(parsed)
            .header(ACCEPT_ENCODING, "gzip")
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            ::log::debug!("{} answered {}, keeping body", url, status);
        }

        let gzipped = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("gzip"));

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let body = if gzipped {
            gunzip(url, &bytes)?
        } else {
            bytes.to_vec()
        };

        ::log::trace!("Read {} bytes from {}", body.len(), url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: e,
        }
    }
}

fn gunzip(url: &str, compressed: &[u8]) -> Result<Vec<u8>, FetchError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut out = Vec::with_capacity(compressed.len() * 4);
    decoder
        .read_to_end(&mut out)
        .map_err(|source| FetchError::Decompress {
            url: url.to_string(),
            source,
        })?;
    Ok(out)
}
