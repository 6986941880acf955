use crate::archive;
use crate::client::LokaliseApi;
use crate::downloader::Downloader;
use crate::error::SyncError;
use crate::parser;
use crate::types::{BundleRequest, SyncSummary};
use colored::*;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

pub const ARCHIVE_NAME: &str = "lokalize.zip";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub langs: String,
    pub output_dir: PathBuf,
    pub quiet: bool,
}

/// Export, download, extract and clean up, in that order. Stops at the
/// first failure and leaves whatever was written so far in place.
pub struct SyncRunner<A: LokaliseApi> {
    api: A,
    downloader: Downloader,
    options: RunOptions,
}

impl<A: LokaliseApi> SyncRunner<A> {
    pub fn new(api: A, options: RunOptions) -> Self {
        Self {
            api,
            downloader: Downloader::new(options.quiet),
            options,
        }
    }

    pub async fn run(&mut self) -> Result<SyncSummary, SyncError> {
        let start_time = Instant::now();

        // Both keys must be present before anything touches the network.
        let credentials = parser::load_credentials(&self.options.config_path).await?;
        info!("Loaded credentials for project {}", credentials.project_id);

        self.api.authenticate(&credentials.token)?;
        let project = self.api.fetch_project(&credentials.project_id).await?;
        self.step(&format!("Found project {}", project.name));
        debug!(
            "Project {}: {}",
            project.project_id,
            project.description.as_deref().unwrap_or("no description")
        );

        self.step("Reading args...");
        let langs = parser::parse_langs(&self.options.langs);
        info!("Language filter: {:?}", langs);

        self.step("Generating bundle...");
        let request = BundleRequest::android_xml(langs.clone());
        let bundle = self
            .api
            .request_export(&credentials.project_id, &request)
            .await?;
        debug!(
            "Bundle for project {}: {}",
            bundle.project_id.as_deref().unwrap_or(&credentials.project_id),
            bundle.bundle_url
        );

        self.step("Downloading...");
        tokio::fs::create_dir_all(&self.options.output_dir).await?;
        let zip_path = self.options.output_dir.join(ARCHIVE_NAME);
        let bytes_downloaded = self.downloader.download(&bundle.bundle_url, &zip_path).await?;

        self.step("Unzipping...");
        let extracted_files = archive::extract(&zip_path, &self.options.output_dir).await?;

        self.step(&format!("Removing {}...", ARCHIVE_NAME));
        tokio::fs::remove_file(&zip_path).await?;

        info!("All done!");
        if !self.options.quiet {
            println!("{}", "All done!".green());
        }

        Ok(SyncSummary {
            project_name: project.name,
            langs,
            bytes_downloaded,
            extracted_files,
            total_duration: start_time.elapsed(),
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn step(&self, message: &str) {
        info!("{}", message);
        if !self.options.quiet {
            println!("{}", message);
        }
    }
}
