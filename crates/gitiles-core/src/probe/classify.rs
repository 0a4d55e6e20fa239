//! Map fetch failures onto the two messages the validator can show.

use super::ProbeError;

/// Coarse kind of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Nothing usable at that address: host unreachable, or the page is gone.
    Connect,
    /// Reachable but failing (TLS, timeout, server error, forbidden, ...).
    Other,
}

/// Only "not there" statuses count as a connect failure; any other status
/// came from a live server.
pub fn classify_http_status(code: u32) -> FailureKind {
    match code {
        404 | 410 => FailureKind::Connect,
        _ => FailureKind::Other,
    }
}

pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_got_nothing()
    {
        return FailureKind::Connect;
    }
    FailureKind::Other
}

pub fn classify(e: &ProbeError) -> FailureKind {
    match e {
        ProbeError::Curl(ce) => classify_curl_error(ce),
        ProbeError::Http(code) => classify_http_status(*code),
    }
}
