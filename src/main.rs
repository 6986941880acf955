use anyhow::Context;
use clap::Parser;
use colored::*;
use log::{error, info};
use lokalise_sync::cli::Cli;
use lokalise_sync::{LokaliseClient, RunOptions, SyncRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Starting Lokalise sync");

    let cli = Cli::parse();
    info!(
        "CLI arguments parsed: config={}, langs={:?}",
        cli.config.display(),
        cli.langs
    );

    let options = RunOptions {
        config_path: cli.config,
        langs: cli.langs,
        output_dir: cli.output_dir,
        quiet: cli.quiet,
    };

    let mut runner = SyncRunner::new(LokaliseClient::new(cli.api_url), options);
    match runner.run().await {
        Ok(summary) => {
            info!(
                "Synced {}: {} files, {:.2} KB in {:.2?}",
                summary.project_name,
                summary.extracted_files.len(),
                summary.bytes_downloaded as f64 / 1024.0,
                summary.total_duration
            );
            Ok(())
        }
        Err(e) if e.is_config_error() => {
            error!("Config error: {}", e);
            eprintln!("{}", e.to_string().red());
            Ok(())
        }
        Err(e) => {
            error!("Sync failed: {}", e);
            eprintln!("{}", "Sync failed".red());
            Err(e).context("Lokalise sync failed")
        }
    }
}
