//! Per-page metadata text files (`<host>.txt`).

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage;
use crate::url_model;

/// Written in place of a value the page did not provide.
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Error)]
#[error("cannot write {path}: {source}")]
pub struct SaveError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Renders the metadata file body.
pub fn render_metadata(page_url: &str, title: Option<&str>, description: Option<&str>) -> String {
    format!(
        "URL: {}\n\nTitle: {}\n\nDescription: {}\n",
        page_url,
        title.unwrap_or(NOT_FOUND),
        description.unwrap_or(NOT_FOUND)
    )
}

/// Writes `dest_dir/<host>.txt` for `page_url`, replacing any previous file.
/// The file is staged and renamed, so concurrent writers for one host leave
/// one complete record.
pub fn save_metadata(
    page_url: &str,
    title: Option<&str>,
    description: Option<&str>,
    dest_dir: &Path,
) -> Result<PathBuf, SaveError> {
    let path = dest_dir.join(url_model::metadata_filename(page_url));
    match storage::write_staged(&path, render_metadata(page_url, title, description).as_bytes()) {
        Ok(()) => Ok(path),
        Err(source) => {
            tracing::warn!(url = page_url, "failed to save metadata: {}", source);
            Err(SaveError { path, source })
        }
    }
}
