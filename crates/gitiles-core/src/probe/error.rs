//! Landing page fetch error type.

use thiserror::Error;

/// Why a landing page could not be read.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// libcurl gave up before a usable response arrived.
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The server answered, but not with 2xx.
    #[error("HTTP {0}")]
    Http(u32),
}
