use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling the run configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The search API key is not present in the environment
    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a harvest config
    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),

    /// The output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the main content selectors does not parse
    #[error("invalid content selector '{0}'")]
    Selector(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors from the search provider. Fatal to the whole run.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("search API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The provider answered 200 but reported an error in the body
    #[error("search API error: {0}")]
    Provider(String),
}

/// Errors from a single page fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decompress gzip body of {url}: {source}")]
    Decompress {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the clean stage
#[derive(Debug, Error)]
pub enum CleanError {
    /// The extraction task panicked or was aborted
    #[error("content extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors from writing cleaned text to the output directory
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Fatal errors that abort a run before any job starts
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
