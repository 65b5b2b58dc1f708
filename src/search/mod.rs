pub mod serpapi;

pub use serpapi::SerpApiProvider;

use crate::error::SearchError;
use async_trait::async_trait;

/// Source of the URLs a run processes
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return up to `num_results` result URLs for `query`, in provider order
    async fn top_urls(&self, query: &str, num_results: usize) -> Result<Vec<String>, SearchError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
