//! Error type for link construction.

use thiserror::Error;

/// A link could not be turned into a valid absolute URL.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The concatenated string is not a syntactically valid URL.
    #[error("malformed URL {url:?}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The URL has no hierarchical path to append segments to (e.g. `mailto:`).
    #[error("URL {0:?} cannot carry a path")]
    CannotBeABase(String),
    /// Links are appended to the path, so a query or fragment would end up
    /// in front of them.
    #[error("repository URL {0:?} must not have a query or fragment")]
    QueryOrFragment(String),
}

impl LinkError {
    pub(crate) fn malformed(url: impl Into<String>, source: url::ParseError) -> Self {
        LinkError::Malformed {
            url: url.into(),
            source,
        }
    }
}
