use crate::error::SyncError;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extracts every entry of `zip_path` under `output_dir`, keeping the
/// archive's directory structure. Returns the extracted file paths.
pub async fn extract(zip_path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let zip_path = zip_path.to_path_buf();
    let output_dir = output_dir.to_path_buf();
    tokio::task::spawn_blocking(move || extract_blocking(&zip_path, &output_dir))
        .await
        .map_err(|e| SyncError::IoError(io::Error::new(io::ErrorKind::Other, e)))?
}

fn extract_blocking(zip_path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    info!("Extracting {} into {}", zip_path.display(), output_dir.display());
    fs::create_dir_all(output_dir)?;

    let mut archive = ZipArchive::new(File::open(zip_path)?)?;
    let mut extracted = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let outpath = match entry.enclosed_name() {
            Some(path) => output_dir.join(path),
            None => {
                warn!("Skipping unsafe archive entry: {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&outpath)?;
        io::copy(&mut entry, &mut outfile)?;
        debug!("Extracted {}", outpath.display());
        extracted.push(outpath);
    }

    info!("Extracted {} files", extracted.len());
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, contents) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                zip.start_file(*name, FileOptions::default()).unwrap();
                zip.write_all(contents.as_bytes()).unwrap();
            }
        }
        zip.finish().unwrap();
    }

    #[tokio::test]
    async fn extracts_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("bundle.zip");
        write_zip(
            &zip_path,
            &[
                ("core/res/src/main/res/values-en/", ""),
                ("core/res/src/main/res/values-en/strings.xml", "<resources/>"),
                ("core/res/src/main/res/values-ru/strings.xml", "<resources></resources>"),
            ],
        );

        let out = dir.path().join("out");
        let files = extract(&zip_path, &out).await.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(
            fs::read_to_string(out.join("core/res/src/main/res/values-ru/strings.xml")).unwrap(),
            "<resources></resources>"
        );
        assert!(out.join("core/res/src/main/res/values-en/strings.xml").is_file());
    }

    #[tokio::test]
    async fn skips_entries_escaping_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("bundle.zip");
        write_zip(
            &zip_path,
            &[("../evil.xml", "x"), ("values-en/strings.xml", "ok")],
        );

        let out = dir.path().join("out");
        let files = extract(&zip_path, &out).await.unwrap();

        assert_eq!(files, vec![out.join("values-en/strings.xml")]);
        assert!(!dir.path().join("evil.xml").exists());
    }

    #[tokio::test]
    async fn corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("bundle.zip");
        fs::write(&zip_path, b"not a zip").unwrap();

        let err = extract(&zip_path, dir.path()).await.unwrap_err();
        assert!(matches!(err, SyncError::ZipError(_)));
    }
}
