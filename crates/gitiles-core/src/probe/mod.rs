//! HTTP GET probing of a candidate repository landing page.
//!
//! Uses the curl crate (libcurl) to stream the page body and look for text
//! that identifies the server software. The transfer stops as soon as the
//! text shows up, or after [`MAX_PAGE_BYTES`].

mod classify;
mod error;
mod scan;

pub use classify::{classify, classify_curl_error, classify_http_status, FailureKind};
pub use error::ProbeError;

use std::time::Duration;
use url::Url;

use scan::MarkerScan;

/// Bytes read from a landing page before giving up on finding the marker.
pub const MAX_PAGE_BYTES: u64 = 1024 * 1024;

/// Looks for text on a page. The validator depends on this rather than on
/// curl directly.
pub trait PageFetcher {
    /// True if `marker` occurs in the body served at `url`.
    fn find_text(&self, url: &Url, marker: &str) -> Result<bool, ProbeError>;
}

/// Transport knobs. `None` leaves libcurl's default in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Blocking libcurl GET.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    opts: ProbeOptions,
    max_bytes: u64,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(ProbeOptions::default())
    }
}

impl CurlFetcher {
    pub fn new(opts: ProbeOptions) -> Self {
        Self {
            opts,
            max_bytes: MAX_PAGE_BYTES,
        }
    }

    /// Overrides [`MAX_PAGE_BYTES`].
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl PageFetcher for CurlFetcher {
    fn find_text(&self, url: &Url, marker: &str) -> Result<bool, ProbeError> {
        let mut scan = MarkerScan::new(marker);
        let max_bytes = self.max_bytes;

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(d) = self.opts.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.opts.timeout {
            easy.timeout(d)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                let room = max_bytes.saturating_sub(scan.bytes_seen());
                let take = data.len().min(usize::try_from(room).unwrap_or(usize::MAX));
                if scan.feed(&data[..take]) || scan.bytes_seen() >= max_bytes {
                    // Short write: libcurl aborts with CURLE_WRITE_ERROR.
                    return Ok(0);
                }
                Ok(data.len())
            })?;
            transfer.perform()
        };
        let stopped_early = scan.found() || scan.bytes_seen() >= max_bytes;
        match performed {
            Ok(()) => {}
            Err(e) if e.is_write_error() && stopped_early => {}
            Err(e) => return Err(e.into()),
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(ProbeError::Http(code));
        }

        tracing::debug!(
            url = %url,
            bytes = scan.bytes_seen(),
            found = scan.found(),
            "scanned page"
        );
        Ok(scan.found())
    }
}
