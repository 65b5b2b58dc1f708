pub mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;

/// Downloads the raw body of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` once and return its body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
