//! Per-URL outcomes and the run-level tally.

use std::path::PathBuf;

/// What happened to a page's og:image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Page had no usable og:image (or could not be fetched).
    NotFound,
    Saved(PathBuf),
    Failed,
}

/// Result of running the pipeline for one input URL.
#[derive(Debug, Clone)]
pub struct UrlOutcome {
    pub url: String,
    /// False when the page fetch failed and empty metadata was recorded.
    pub page_fetched: bool,
    pub image: ImageOutcome,
    /// Path of the written `<host>.txt`, or None if the write failed.
    pub metadata_file: Option<PathBuf>,
}

/// Outcomes of a whole run, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<UrlOutcome>,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn pages_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.page_fetched).count()
    }

    pub fn images_saved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.image, ImageOutcome::Saved(_)))
            .count()
    }

    pub fn images_failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.image == ImageOutcome::Failed)
            .count()
    }

    pub fn metadata_written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.metadata_file.is_some())
            .count()
    }
}
