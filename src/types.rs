use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Layout the service uses inside the bundle, one directory per language.
pub const DIRECTORY_PREFIX: &str = "core/res/src/main/res/values-%LANG_ISO%/";

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub project_id: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleRequest {
    pub format: String,
    pub original_filenames: bool,
    pub directory_prefix: String,
    pub filter_data: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_langs: Vec<String>,
}

impl BundleRequest {
    /// Android XML export of translated strings, optionally limited to `langs`.
    pub fn android_xml(langs: Vec<String>) -> Self {
        Self {
            format: "xml".to_string(),
            original_filenames: true,
            directory_prefix: DIRECTORY_PREFIX.to_string(),
            filter_data: vec!["translated".to_string()],
            filter_langs: langs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub project_id: Option<String>,
    pub bundle_url: String,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub project_name: String,
    pub langs: Vec<String>,
    pub bytes_downloaded: u64,
    pub extracted_files: Vec<PathBuf>,
    pub total_duration: Duration,
}
