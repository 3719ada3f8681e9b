//! Preview image download.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::http::{FetchError, HttpClient, STREAM_CHUNK_SIZE};
use crate::storage::StagedFile;
use crate::url_model;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot finalize {path}: {source}")]
    Finalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Downloads `image_url` into `dest_dir`, named after the URL's last path
/// segment (or `image.jpg`). The body is streamed to disk in 8 KiB chunks.
///
/// An existing file of the same name is replaced only after the whole body
/// arrived. Failures are logged here; the caller just moves on.
pub fn fetch_image(http: &HttpClient, image_url: &str, dest_dir: &Path) -> Result<PathBuf, ImageError> {
    let result = download(http, image_url, dest_dir);
    if let Err(e) = &result {
        tracing::warn!(url = image_url, "failed to download image: {}", e);
    }
    result
}

fn download(http: &HttpClient, image_url: &str, dest_dir: &Path) -> Result<PathBuf, ImageError> {
    let final_path = dest_dir.join(url_model::image_filename(image_url));

    // Opened on the first chunk so a rejected request leaves nothing behind.
    let mut staged: Option<StagedFile> = None;
    let bytes = http.get_streaming(image_url, Some(STREAM_CHUNK_SIZE), |chunk| {
        let file = match staged.take() {
            Some(f) => f,
            None => StagedFile::create(&final_path)?,
        };
        staged.insert(file).write_chunk(chunk)
    })?;

    let staged = match staged {
        Some(f) => f,
        None => StagedFile::create(&final_path).map_err(|source| ImageError::Create {
            path: final_path.clone(),
            source,
        })?,
    };
    let path = staged.finalize().map_err(|source| ImageError::Finalize {
        path: final_path.clone(),
        source,
    })?;
    tracing::debug!(url = image_url, bytes, path = %path.display(), "image saved");
    Ok(path)
}
