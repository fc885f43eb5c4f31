//! Input resolution: load a listing record from a local path or a URL.
//!
//! Records are parsed leniently: every field is optional, so a hand-written
//! JSON file with only a title and a couple of images is a valid input.

use crate::error::ListingError;
use crate::model::ListingRecord;
use std::path::PathBuf;
use tracing::{debug, info};

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Load a record from `input`, a path or an HTTP(S) URL.
pub async fn load_record(input: &str, timeout_secs: u64) -> Result<ListingRecord, ListingError> {
    let raw = if is_url(input) {
        download(input, timeout_secs).await?
    } else {
        read_local(input).await?
    };
    parse_record(input, &raw)
}

/// Parse a JSON document into a record. `source_name` is used in errors.
pub fn parse_record(source_name: &str, raw: &str) -> Result<ListingRecord, ListingError> {
    serde_json::from_str(raw).map_err(|e| ListingError::InvalidListing {
        source_name: source_name.to_string(),
        detail: e.to_string(),
    })
}

async fn read_local(path_str: &str) -> Result<String, ListingError> {
    let path = PathBuf::from(path_str);

    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => {
            debug!("Read listing: {} ({} bytes)", path.display(), raw.len());
            Ok(raw)
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(ListingError::PermissionDenied { path })
        }
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            Err(ListingError::InvalidListing {
                source_name: path_str.to_string(),
                detail: "file is not valid UTF-8".into(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ListingError::FileNotFound { path })
        }
        Err(source) => Err(ListingError::ReadFailed { path, source }),
    }
}

async fn download(url: &str, timeout_secs: u64) -> Result<String, ListingError> {
    info!("Downloading listing from: {}", url);

    let failed = |reason: String| ListingError::DownloadFailed {
        url: url.to_string(),
        reason,
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| failed(e.to_string()))?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            ListingError::DownloadTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            failed(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(failed(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            ListingError::DownloadTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            failed(e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/listing.json"));
        assert!(is_url("http://example.com/listing.json"));
        assert!(!is_url("/tmp/listing.json"));
        assert!(!is_url("listing.json"));
        assert!(!is_url(""));
    }

    #[tokio::test]
    async fn missing_file() {
        let err = load_record("/definitely/not/here.json", 5).await.unwrap_err();
        assert!(matches!(err, ListingError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn directory_is_read_failure_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_record(dir.path().to_str().unwrap(), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::ReadFailed { .. }), "got {err}");
    }

    #[tokio::test]
    async fn local_file_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("l.json");
        std::fs::write(&path, r#"{"title":"Lamp","aboutItems":["A: b"]}"#).unwrap();
        let rec = load_record(path.to_str().unwrap(), 5).await.unwrap();
        assert_eq!(rec.title, "Lamp");
        assert_eq!(rec.about_items, vec!["A: b"]);
    }

    #[test]
    fn malformed_json_names_source() {
        let err = parse_record("bad.json", "{\"title\": ").unwrap_err();
        match err {
            ListingError::InvalidListing { source_name, .. } => assert_eq!(source_name, "bad.json"),
            other => panic!("unexpected: {other}"),
        }
    }
}
