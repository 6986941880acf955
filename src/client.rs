use crate::error::SyncError;
use crate::types::{Bundle, BundleRequest, Project};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.lokalise.com/api2";

const TOKEN_HEADER: &str = "x-api-token";

/// The part of the Lokalise API the sync needs.
#[async_trait]
pub trait LokaliseApi: Send + Sync {
    fn authenticate(&mut self, token: &str) -> Result<(), SyncError>;

    async fn fetch_project(&self, project_id: &str) -> Result<Project, SyncError>;

    async fn request_export(
        &self,
        project_id: &str,
        request: &BundleRequest,
    ) -> Result<Bundle, SyncError>;
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct LokaliseClient {
    base_url: String,
    client: Option<reqwest::Client>,
}

impl LokaliseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: None,
        }
    }

    fn client(&self) -> Result<&reqwest::Client, SyncError> {
        self.client.as_ref().ok_or(SyncError::NotAuthenticated)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, SyncError> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(SyncError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LokaliseApi for LokaliseClient {
    fn authenticate(&mut self, token: &str) -> Result<(), SyncError> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(token)?;
        value.set_sensitive(true);
        headers.insert(TOKEN_HEADER, value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        self.client = Some(reqwest::Client::builder().default_headers(headers).build()?);
        info!("Authenticated Lokalise client for {}", self.base_url);
        Ok(())
    }

    async fn fetch_project(&self, project_id: &str) -> Result<Project, SyncError> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!("GET {}", url);
        let resp = self.client()?.get(&url).send().await?;
        Self::decode(resp).await
    }

    async fn request_export(
        &self,
        project_id: &str,
        request: &BundleRequest,
    ) -> Result<Bundle, SyncError> {
        let url = format!("{}/projects/{}/files/download", self.base_url, project_id);
        debug!("POST {} {:?}", url, request);
        let resp = self.client()?.post(&url).json(request).send().await?;
        Self::decode(resp).await
    }
}
