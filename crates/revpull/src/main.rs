//! revpull - incremental reviews harvester

use anyhow::Result;
use clap::Parser;
use revpull::api::SerpApiClient;
use revpull::{driver, logging, store, Cli, Commands, RunConfig, RunOutcome};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed arguments.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Fetch {
            data_id,
            hl,
            max_pages,
            output,
            pause,
            retries,
            api_key,
            base_url,
        } => {
            if pause.is_nan() || pause < 0.0 {
                anyhow::bail!("pause must be a non-negative number of seconds");
            }

            let config = RunConfig {
                data_id,
                hl,
                max_pages,
                output: PathBuf::from(output),
                pause: Duration::from_secs_f64(pause),
                max_attempts: retries,
                api_key,
            };

            let client = SerpApiClient::new(&config)?.with_base_url(base_url);

            match driver::run(&config, &client).await? {
                RunOutcome::Completed { rows } => {
                    println!("READY: {} rows saved to {}", rows, config.output.display());
                }
                RunOutcome::NoData => {
                    println!("No reviews collected. Check the data_id and your SerpApi limits.");
                }
            }
        }

        Commands::Dedup { file } => {
            let path = PathBuf::from(file);
            let rows = store::dedup_file(&path)?;
            println!("Deduplicated: {} rows remain in {}", rows, path.display());
        }
    }

    Ok(())
}
