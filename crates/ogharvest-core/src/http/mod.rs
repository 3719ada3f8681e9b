//! HTTP GET over libcurl (via the `curl` crate).
//!
//! One `Easy` handle per request. Redirects are followed; HTTP >= 400 fails the
//! transfer before any body bytes reach the consumer.

mod body;
mod error;

pub use body::FetchedBody;
pub use error::FetchError;

use crate::config::HttpConfig;
use std::io;
use std::time::Duration;
use url::Url;

/// Receive chunk size for streamed downloads.
pub const STREAM_CHUNK_SIZE: usize = 8 * 1024;

/// Blocking HTTP client configured from `[http]` settings. Cheap to clone and
/// safe to share across worker threads.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    cfg: HttpConfig,
}

impl HttpClient {
    pub fn new(cfg: HttpConfig) -> Self {
        Self { cfg }
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        check_url(url)?;
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.cfg.max_redirections)?;
        easy.fail_on_error(true)?;
        if let Some(secs) = self.cfg.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = self.cfg.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        if let (Some(limit), Some(secs)) =
            (self.cfg.low_speed_limit_bytes, self.cfg.low_speed_time_secs)
        {
            easy.low_speed_limit(limit)?;
            easy.low_speed_time(Duration::from_secs(secs))?;
        }
        if let Some(ua) = &self.cfg.user_agent {
            easy.useragent(ua)?;
        }
        Ok(easy)
    }

    /// GETs `url` and returns the whole body with its `Content-Type`.
    pub fn get_bytes(&self, url: &str) -> Result<FetchedBody, FetchError> {
        let mut bytes = Vec::new();
        let (_, content_type) = self.perform(url, None, |chunk| {
            bytes.extend_from_slice(chunk);
            Ok(())
        })?;
        Ok(FetchedBody {
            bytes,
            content_type,
        })
    }

    /// GETs `url`, handing each received chunk to `sink` as it arrives.
    /// `chunk_size` caps the receive buffer (None = libcurl default).
    /// Returns the number of body bytes delivered.
    ///
    /// Runs in the current thread.
    pub fn get_streaming<F>(
        &self,
        url: &str,
        chunk_size: Option<usize>,
        sink: F,
    ) -> Result<u64, FetchError>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        self.perform(url, chunk_size, sink).map(|(received, _)| received)
    }

    /// Runs the transfer; returns delivered byte count and final `Content-Type`.
    fn perform<F>(
        &self,
        url: &str,
        chunk_size: Option<usize>,
        mut sink: F,
    ) -> Result<(u64, Option<String>), FetchError>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        let mut easy = self.easy(url)?;
        if let Some(sz) = chunk_size {
            easy.buffer_size(sz)?;
        }

        let mut received = 0u64;
        let mut sink_error: Option<io::Error> = None;
        let performed;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink(data) {
                Ok(()) => {
                    received += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    sink_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            performed = transfer.perform();
        }

        if let Some(e) = sink_error {
            return Err(FetchError::Sink(e));
        }
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                if let Ok(code) = easy.response_code() {
                    return Err(FetchError::Http(code));
                }
            }
            return Err(FetchError::Curl(e));
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        let content_type = easy.content_type()?.map(str::to_string);
        tracing::debug!(url, bytes = received, content_type = ?content_type, "GET complete");
        Ok((received, content_type))
    }
}

/// Rejects anything but absolute http(s) URLs before libcurl sees them
/// (libcurl would otherwise guess a scheme for `example.com/page`).
fn check_url(url: &str) -> Result<(), FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme '{}'", other))),
    }
}
