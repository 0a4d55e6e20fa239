//! Repository browser strategies.
//!
//! A browser turns change metadata into links on a particular web frontend.
//! Strategies are looked up by a short symbol through [`BrowserRegistry`].

mod gitiles;
mod registry;

pub use gitiles::GitilesBrowser;
pub use registry::{BrowserDescriptor, BrowserRegistry, RegistryError};

use url::Url;

use crate::link::LinkError;
use crate::model::{ChangeSet, ChangedPath};

/// Link capabilities of a repository web frontend.
pub trait RepositoryBrowser: Send + Sync {
    /// Base URL exactly as configured.
    fn repo_url(&self) -> &str;

    /// Base URL with a trailing slash.
    fn url(&self) -> Result<Url, LinkError> {
        normalize_to_end_with_slash(self.repo_url())
    }

    fn diff_link(&self, path: &ChangedPath) -> Result<Url, LinkError>;

    fn file_link(&self, path: &ChangedPath) -> Result<Url, LinkError>;

    fn changeset_link(&self, changeset: &ChangeSet) -> Result<Url, LinkError>;
}

/// Parses `raw` and appends `/` to its path when it does not already end
/// with one. Query and fragment are left alone.
pub fn normalize_to_end_with_slash(raw: &str) -> Result<Url, LinkError> {
    let mut url = Url::parse(raw).map_err(|e| LinkError::malformed(raw, e))?;
    if url.cannot_be_a_base() {
        return Err(LinkError::CannotBeABase(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
