use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the search API key
pub const API_KEY_VAR: &str = "SERP_API_KEY";

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Search query sent to the search provider
    #[serde(default = "default_query")]
    pub query: String,

    /// Number of results requested from the search provider
    #[serde(default = "default_num_results")]
    pub num_results: usize,

    /// Directory the cleaned text files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum number of pages processed at the same time
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Timeout for a single page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with page fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects followed per fetch
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Search API endpoint
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Search engine identifier passed to the search API
    #[serde(default = "default_search_engine")]
    pub search_engine: String,

    /// Main content selectors, highest priority first
    #[serde(default = "default_main_selectors")]
    pub main_selectors: Vec<String>,

    /// Years that mark a page as fresh
    #[serde(default = "default_fresh_years")]
    pub fresh_years: Vec<u16>,

    /// Clean pages by stripping tags instead of extracting the main content
    #[serde(default)]
    pub strip_only: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
            num_results: default_num_results(),
            output_dir: default_output_dir(),
            max_concurrency: default_max_concurrency(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            search_endpoint: default_search_endpoint(),
            search_engine: default_search_engine(),
            main_selectors: default_main_selectors(),
            fresh_years: default_fresh_years(),
            strip_only: false,
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the search API key, loading a local `.env` file first if there is one
    pub fn api_key_from_env() -> Result<String, ConfigError> {
        dotenv::dotenv().ok();
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
        }
    }

    /// Creates the output directory if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ConfigError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Number of workers for a run over `jobs` URLs
    pub fn worker_count(&self, jobs: usize) -> usize {
        self.max_concurrency.max(1).min(jobs.max(1))
    }
}

fn default_query() -> String {
    "site:upenn.edu tuition international students".to_string()
}

fn default_num_results() -> usize {
    3
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_max_concurrency() -> usize {
    4
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; WebScraper/1.0)".to_string()
}

fn default_max_redirects() -> usize {
    10
}

fn default_search_endpoint() -> String {
    "https://serpapi.com/search.json".to_string()
}

fn default_search_engine() -> String {
    "google".to_string()
}

fn default_main_selectors() -> Vec<String> {
    ["main", "article", ".content", "#content", ".main", "#main"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fresh_years() -> Vec<u16> {
    vec![2024, 2025]
}
