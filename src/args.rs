use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Fetches search results and saves their readable text")]
#[command(version)]
pub struct Args {
    /// Search query to send to the search API
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of search results to fetch
    #[arg(short = 'n', long)]
    pub results: Option<usize>,

    /// Directory to save the cleaned text to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of pages processed at the same time
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-page fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Strip tags instead of extracting the main content
    #[arg(long)]
    pub strip_only: bool,
}
