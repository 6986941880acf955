use clap::Parser;
use std::path::PathBuf;

use crate::client::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma separated language codes to export (empty exports all languages)
    #[arg(long, default_value = "")]
    pub langs: String,

    /// Properties file holding lokalise.project.id and lokalise.token
    #[arg(short, long, default_value = "local.properties")]
    pub config: PathBuf,

    /// Directory the bundle is extracted into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Base URL of the Lokalise API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}
