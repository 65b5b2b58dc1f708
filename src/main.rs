use clap::Parser;
use page_harvest::{Harvest, HarvestConfig};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut harvest = match args.config.as_ref() {
        Some(path) => match Harvest::from_config_file(path) {
            Ok(harvest) => harvest,
            Err(e) => fail(&e),
        },
        None => Harvest::new(HarvestConfig::default()),
    };

    // The key must be present before any network activity
    let api_key = match HarvestConfig::api_key_from_env() {
        Ok(key) => key,
        Err(e) => fail(&e),
    };

    if let Some(query) = args.query {
        harvest = harvest.with_query(query);
    }
    if let Some(results) = args.results {
        harvest = harvest.with_num_results(results);
    }
    if let Some(output) = args.output {
        harvest = harvest.with_output_dir(output);
    }
    if let Some(concurrency) = args.concurrency {
        harvest = harvest.with_max_concurrency(concurrency);
    }
    if let Some(timeout) = args.timeout {
        harvest = harvest.with_fetch_timeout(timeout);
    }
    if args.strip_only {
        harvest = harvest.with_strip_only(true);
    }

    ::log::info!("Starting harvest for query: {}", harvest.config().query);

    match harvest.run(api_key).await {
        Ok(report) => println!("{}", report),
        Err(e) => fail(&e),
    }
}

fn fail(error: &dyn std::error::Error) -> ! {
    ::log::error!("{}", error);
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
