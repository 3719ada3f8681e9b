//! The harvest run: read the URL list, then extract, fetch image, and write
//! metadata for each URL.
//!
//! Only setup (output directory, input file) can fail the run. Every per-URL
//! failure is logged and recorded in the outcome; the batch always continues.

mod outcome;
mod pool;

pub use outcome::{ImageOutcome, RunSummary, UrlOutcome};
pub use pool::run_parallel;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::HarvestConfig;
use crate::extract::extract_metadata;
use crate::http::HttpClient;
use crate::image::fetch_image;
use crate::metadata_file::save_metadata;

/// Reads the URL list: one URL per line, trimmed, blank lines dropped. Order
/// is kept and duplicates are not removed.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list {}", path.display()))?;
    Ok(parse_url_list(&data))
}

fn parse_url_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs the whole harvest described by `cfg`.
pub fn run(cfg: &HarvestConfig) -> Result<RunSummary> {
    fs::create_dir_all(&cfg.output_dir).with_context(|| {
        format!("failed to create output directory {}", cfg.output_dir.display())
    })?;
    let urls = read_url_list(&cfg.input_path)?;
    tracing::info!(
        "processing {} url(s) from {} into {}",
        urls.len(),
        cfg.input_path.display(),
        cfg.output_dir.display()
    );

    let http = HttpClient::new(cfg.http.clone());
    let outcomes = if cfg.jobs > 1 && urls.len() > 1 {
        run_parallel(&http, &urls, &cfg.output_dir, cfg.jobs)
    } else {
        let total = urls.len();
        urls.iter()
            .enumerate()
            .map(|(i, url)| process_url(&http, url, &cfg.output_dir, i, total))
            .collect()
    };

    let summary = RunSummary { outcomes };
    tracing::info!(
        processed = summary.processed(),
        pages_failed = summary.pages_failed(),
        images_saved = summary.images_saved(),
        images_failed = summary.images_failed(),
        metadata_written = summary.metadata_written(),
        "run complete"
    );
    Ok(summary)
}

/// Runs extractor → image fetcher (if og:image found) → metadata writer for
/// one URL. Never fails; problems end up in the outcome.
pub fn process_url(
    http: &HttpClient,
    url: &str,
    output_dir: &Path,
    index: usize,
    total: usize,
) -> UrlOutcome {
    tracing::info!("[{}/{}] processing {}", index + 1, total, url);

    let (meta, page_fetched) = match extract_metadata(http, url) {
        Ok(m) => (m, true),
        Err(_) => (Default::default(), false),
    };

    let image = match meta.og_image_url.as_deref() {
        Some(image_url) => {
            tracing::info!("found og:image: {}", image_url);
            match fetch_image(http, image_url, output_dir) {
                Ok(path) => {
                    tracing::info!("downloaded image from {} to {}", url, path.display());
                    ImageOutcome::Saved(path)
                }
                Err(_) => ImageOutcome::Failed,
            }
        }
        None => {
            if page_fetched {
                tracing::info!("no og:image found for {}", url);
            }
            ImageOutcome::NotFound
        }
    };

    let metadata_file = match save_metadata(
        url,
        meta.title.as_deref(),
        meta.description.as_deref(),
        output_dir,
    ) {
        Ok(path) => {
            tracing::info!("saved metadata for {} to {}", url, path.display());
            Some(path)
        }
        Err(_) => None,
    };

    UrlOutcome {
        url: url.to_string(),
        page_fetched,
        image,
        metadata_file,
    }
}
