//! Gitiles link construction.
//!
//! Gitiles exposes three views of a commit under a repository root:
//!
//! - `<base>+/<commit>%5E%21` renders the commit against its first parent
//!   (`^!`). It serves both as the changeset view and as the diff view for
//!   any single file of that commit.
//! - `<base>+blame/<commit>/<path>` renders the annotated source of a file at
//!   that commit.
//!
//! The builders concatenate onto `base` verbatim and never add a slash; use
//! [`crate::browser::RepositoryBrowser::url`] for a slash-terminated base.

mod encode;
mod error;

pub use encode::encode_url;
pub use error::LinkError;

use url::Url;

use crate::model::CommitId;

/// Encoded form of `^!` ("this commit versus its first parent").
pub const FIRST_PARENT_SUFFIX: &str = "%5E%21";

/// Diff view for one file of a commit.
///
/// Gitiles has no per-file diff page, so this is the whole-commit diff and
/// `path` does not influence the result.
pub fn diff_link(base: &Url, commit: &CommitId, _path: &str) -> Result<Url, LinkError> {
    changeset_link(base, commit)
}

/// Blame view of `path` as of `commit`, with `path` percent-encoded per segment.
///
/// `base` is also reparsed as part of the result, so any structural
/// characters in it are kept as they are.
pub fn file_link(base: &Url, commit: &CommitId, path: &str) -> Result<Url, LinkError> {
    let prefix = format!("{base}+blame/{commit}/");
    let url = encode_url(&prefix, path)?;
    tracing::debug!(link = %url, "built gitiles blame link");
    Ok(url)
}

/// Whole-commit view.
pub fn changeset_link(base: &Url, commit: &CommitId) -> Result<Url, LinkError> {
    let raw = format!("{base}+/{commit}{FIRST_PARENT_SUFFIX}");
    let url = Url::parse(&raw).map_err(|e| LinkError::malformed(raw, e))?;
    tracing::debug!(link = %url, "built gitiles changeset link");
    Ok(url)
}
