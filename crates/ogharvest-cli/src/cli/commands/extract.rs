//! `ogharvest extract <url>` – print one page's metadata.

use anyhow::Result;
use ogharvest_core::config::HarvestConfig;
use ogharvest_core::extract::extract_metadata;
use ogharvest_core::http::HttpClient;
use ogharvest_core::metadata_file::NOT_FOUND;

pub fn run_extract(cfg: &HarvestConfig, url: &str) -> Result<()> {
    let http = HttpClient::new(cfg.http.clone());
    let meta = extract_metadata(&http, url)?;
    println!("og:image:    {}", meta.og_image_url.as_deref().unwrap_or(NOT_FOUND));
    println!("Title:       {}", meta.title.as_deref().unwrap_or(NOT_FOUND));
    println!("Description: {}", meta.description.as_deref().unwrap_or(NOT_FOUND));
    Ok(())
}
