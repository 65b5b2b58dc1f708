pub mod config;
pub mod error;
pub mod fetchers;
pub mod freshness;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod search;
pub mod sink;
pub mod utils;
pub mod workers;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use error::HarvestError;
pub use report::RunReport;
pub use results::{JobState, PageResult, Stage};

use crate::error::ConfigError;
use crate::fetchers::{HttpFetcher, PageFetcher};
use crate::parsers::Parser;
use crate::pipeline::Pipeline;
use crate::search::{SearchProvider, SerpApiProvider};
use crate::sink::FileSink;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Main builder for a search-fetch-clean-save run
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new Harvest builder from a configuration
    pub fn new(config: HarvestConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(HarvestConfig::from_file(path)?))
    }

    /// Set the search query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the number of search results to process
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.config.num_results = num_results;
        self
    }

    /// Set the directory cleaned text is written to
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    /// Set the maximum number of pages processed at the same time
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the per-page fetch timeout
    pub fn with_fetch_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.fetch_timeout_secs = timeout_seconds;
        self
    }

    /// Clean pages by stripping tags instead of extracting the main content
    pub fn with_strip_only(mut self, strip_only: bool) -> Self {
        self.config.strip_only = strip_only;
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Run against SerpApi and the live web
    pub async fn run(self, api_key: String) -> Result<RunReport, HarvestError> {
        let provider = SerpApiProvider::new(api_key, &self.config)?;
        let fetcher = Arc::new(HttpFetcher::new(&self.config)?);
        self.run_with(&provider, fetcher).await
    }

    /// Run with the given search provider and page fetcher
    ///
    /// Fails only on configuration or search errors; per-page failures are
    /// recorded in the report.
    pub async fn run_with(
        self,
        provider: &dyn SearchProvider,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<RunReport, HarvestError> {
        let start = Instant::now();
        let config = self.config;

        config.ensure_output_dir()?;
        let parser = Parser::from_config(&config)?;
        let sink = Arc::new(FileSink::new(&config.output_dir));
        let pipeline =
            Pipeline::new(fetcher, parser, sink).with_fresh_years(&config.fresh_years);

        ::log::info!("Searching {} for: {}", provider.name(), config.query);
        let search_start = Instant::now();
        let urls = provider
            .top_urls(&config.query, config.num_results)
            .await?;
        let search_time = search_start.elapsed();
        ::log::info!(
            "{} returned {} URL(s) in {:?}",
            provider.name(),
            urls.len(),
            search_time
        );

        let workers = config.worker_count(urls.len());
        let results = workers::run_all(pipeline, urls, workers).await;

        let report = RunReport {
            query: config.query,
            requested_results: config.num_results,
            search_time,
            total_time: start.elapsed(),
            results,
        };
        ::log::info!(
            "Run complete - {} of {} pages saved in {:.2} seconds",
            report.succeeded(),
            report.job_count(),
            report.total_time.as_secs_f64()
        );

        Ok(report)
    }
}
