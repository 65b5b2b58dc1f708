use crate::error::CleanError;
use crate::fetchers::PageFetcher;
use crate::freshness::estimate_freshness;
use crate::parsers::Parser;
use crate::results::{PageResult, Stage};
use crate::sink::PageSink;
use std::sync::Arc;
use std::time::Instant;

/// Runs a single URL through fetch, clean and persist
///
/// Stages run in order and stop at the first failure. Nothing is retried.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<Parser>,
    sink: Arc<dyn PageSink>,
    fresh_years: Arc<[u16]>,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: Parser, sink: Arc<dyn PageSink>) -> Self {
        Self {
            fetcher,
            parser: Arc::new(parser),
            sink,
            fresh_years: Arc::from(Vec::new()),
        }
    }

    /// Set the years that mark a fetched page as fresh
    pub fn with_fresh_years(mut self, years: &[u16]) -> Self {
        self.fresh_years = Arc::from(years);
        self
    }

    /// Process one URL to completion or to its first failing stage
    pub async fn process(&self, url: String) -> PageResult {
        let mut result = PageResult::new(url.clone());

        ::log::debug!("Fetching {}", url);
        let start = Instant::now();
        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                ::log::warn!("Fetch failed for {}: {}", url, e);
                result.failed(Stage::Fetch, e);
                return result;
            }
        };
        let fresh = estimate_freshness(&url, &html, &self.fresh_years);
        result.fetched(html.clone(), fresh, start.elapsed());

        ::log::debug!("Cleaning {}", url);
        let start = Instant::now();
        let text = match self.clean(html).await {
            Ok(text) => text,
            Err(e) => {
                ::log::warn!("Clean failed for {}: {}", url, e);
                result.failed(Stage::Clean, e);
                return result;
            }
        };
        let text = result.cleaned(text, start.elapsed());

        ::log::debug!("Saving {}", url);
        let start = Instant::now();
        let saved = self.sink.save(&url, text).await;
        match saved {
            Ok(()) => result.persisted(start.elapsed()),
            Err(e) => {
                ::log::warn!("Save failed for {}: {}", url, e);
                result.failed(Stage::Persist, e);
            }
        }

        result
    }

    /// Parsing is CPU-bound, so it runs on the blocking pool
    async fn clean(&self, html: String) -> Result<String, CleanError> {
        let parser = Arc::clone(&self.parser);
        let text = tokio::task::spawn_blocking(move || parser.parse(&html)).await?;
        Ok(text)
    }
}
