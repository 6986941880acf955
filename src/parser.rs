use crate::error::SyncError;
use crate::types::Credentials;
use log::debug;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

pub const PROJECT_ID_KEY: &str = "lokalise.project.id";
pub const TOKEN_KEY: &str = "lokalise.token";

/// Reads `lokalise.project.id` and `lokalise.token` from a properties file.
pub async fn load_credentials(path: &Path) -> Result<Credentials, SyncError> {
    let unreadable = |e: std::io::Error| SyncError::ConfigUnreadable(path.to_path_buf(), e);

    if !tokio::fs::try_exists(path).await.map_err(unreadable)? {
        return Err(SyncError::ConfigNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).await.map_err(unreadable)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .await
        .map_err(unreadable)?;

    credentials_from_properties(&parse_properties(&contents))
}

pub fn credentials_from_properties(
    properties: &HashMap<String, String>,
) -> Result<Credentials, SyncError> {
    let required = |key: &'static str| {
        properties
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or(SyncError::MissingKey(key))
    };

    Ok(Credentials {
        project_id: required(PROJECT_ID_KEY)?,
        token: required(TOKEN_KEY)?,
    })
}

/// Flat `key=value` parsing. Everything lives in one implicit section, so
/// header lines are skipped. Keys are lowercased.
pub fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with(['#', ';', '!'])
            || (line.starts_with('[') && line.ends_with(']'))
        {
            continue;
        }

        let (key, value) = match line.find(['=', ':']) {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };

        let key = key.trim().to_lowercase();
        debug!("Parsed property: {}", key);
        properties.insert(key, value.trim().to_string());
    }

    properties
}

/// Splits the `--langs` argument, dropping empty segments.
pub fn parse_langs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
