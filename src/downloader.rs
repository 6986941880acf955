use crate::error::SyncError;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub struct Downloader {
    client: reqwest::Client,
    quiet: bool,
}

impl Downloader {
    pub fn new(quiet: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            quiet,
        }
    }

    /// Streams `url` into `output_path`, truncating any existing file.
    /// Returns the number of bytes written.
    pub async fn download(&self, url: &str, output_path: &Path) -> Result<u64, SyncError> {
        info!("Starting download: {}", url);
        let pb = self.create_progress_bar(output_path);

        let result = self.download_to_file(url, output_path, &pb).await;
        match &result {
            Ok(bytes) => {
                pb.finish();
                info!("Downloaded {} bytes to {}", bytes, output_path.display());
            }
            Err(e) => {
                error!("Download failed for {}: {}", url, e);
                pb.finish_with_message("Download failed");
            }
        }
        result
    }

    async fn download_to_file(
        &self,
        url: &str,
        output_path: &Path,
        pb: &ProgressBar,
    ) -> Result<u64, SyncError> {
        let resp = self.client.get(url).send().await?;

        if !resp.status().is_success() {
            return Err(SyncError::DownloadError(format!(
                "HTTP error: {} for URL: {}",
                resp.status(),
                url
            )));
        }

        pb.set_length(resp.content_length().unwrap_or(0));

        let mut file = File::create(output_path).await?;
        let mut stream = resp.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| SyncError::DownloadError(e.to_string()))?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        file.flush().await?;
        Ok(downloaded)
    }

    fn create_progress_bar(&self, output_path: &Path) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message(
            output_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("bundle")
                .to_string(),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn download_overwrites_existing_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bundle.zip"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("lokalize.zip");
        std::fs::write(&target, b"stale content that is longer").unwrap();

        let bytes = Downloader::new(true)
            .download(&format!("{}/bundle.zip", server.uri()), &target)
            .await
            .unwrap();

        assert_eq!(bytes, 3);
        assert_eq!(std::fs::read(&target).unwrap(), b"new");
    }

    #[tokio::test]
    async fn http_error_is_download_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let err = Downloader::new(true)
            .download(&format!("{}/missing.zip", server.uri()), &dir.path().join("x.zip"))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::DownloadError(msg) if msg.contains("404")));
    }
}
