//! Bounded worker pool over independent URLs.
//!
//! Keeps up to `max_workers` URLs in flight; each worker pulls the next URL
//! from a shared queue and runs the full per-URL pipeline.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::http::HttpClient;

use super::outcome::UrlOutcome;
use super::process_url;

/// Runs every URL with at most `max_workers` threads. Outcomes are returned in
/// input order.
pub fn run_parallel(
    http: &HttpClient,
    urls: &[String],
    output_dir: &Path,
    max_workers: usize,
) -> Vec<UrlOutcome> {
    let total = urls.len();
    let work: Arc<Mutex<VecDeque<(usize, String)>>> =
        Arc::new(Mutex::new(urls.iter().cloned().enumerate().collect()));
    let (tx, rx) = mpsc::channel();
    let num_workers = max_workers.max(1).min(total);
    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let work = Arc::clone(&work);
        let tx = tx.clone();
        let http = http.clone();
        let dir = output_dir.to_path_buf();
        handles.push(std::thread::spawn(move || loop {
            let next = match work.lock() {
                Ok(mut queue) => queue.pop_front(),
                Err(_) => None,
            };
            let Some((index, url)) = next else {
                break;
            };
            let outcome = process_url(&http, &url, &dir, index, total);
            if tx.send((index, outcome)).is_err() {
                break;
            }
        }));
    }
    drop(tx);

    let mut results: Vec<(usize, UrlOutcome)> = rx.iter().collect();
    for h in handles {
        if h.join().is_err() {
            tracing::error!("url worker panicked");
        }
    }
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, outcome)| outcome).collect()
}
