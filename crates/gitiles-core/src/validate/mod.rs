//! Configuration-time check that a base URL points at a Gitiles server.
//!
//! Gitiles prints clone instructions on every repository landing page, so a
//! successful GET whose body contains `git clone` is taken as proof. This is
//! only ever run on explicit request; link building does not call it.

pub mod messages;
mod verdict;

pub use verdict::FormValidation;

use url::Url;

use crate::probe::{classify, FailureKind, PageFetcher};

/// Text Gitiles renders on a repository landing page.
pub const GITILES_MARKER: &str = "git clone";

/// Who is asking for the check.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext {
    /// Whether the caller may configure the item that owns the URL.
    pub may_configure: bool,
}

impl Default for CheckContext {
    fn default() -> Self {
        Self {
            may_configure: true,
        }
    }
}

/// Decides whether a value is accepted without looking at it further.
pub trait InitialChecks {
    fn ok_without_checking(&self, ctx: &CheckContext, value: Option<&str>) -> bool;
}

/// Skips the check for absent values, for values with a `$` variable
/// reference, and for callers without configure permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInitialChecks;

impl InitialChecks for StandardInitialChecks {
    fn ok_without_checking(&self, ctx: &CheckContext, value: Option<&str>) -> bool {
        if !ctx.may_configure {
            return true;
        }
        match value {
            None => true,
            Some(v) => v.contains('$'),
        }
    }
}

/// Trims `value`; blank becomes `None`.
pub fn fix_empty_and_trim(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Absolute `http`/`https` URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(u) => {
            matches!(u.scheme(), "http" | "https")
                && u.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Validates a candidate repository URL.
///
/// Returns `Ok` early when `checks` accepts the value, an "invalid URL" error
/// without touching the network when it is blank or does not parse, and
/// otherwise the result of probing `<value>/` with `fetcher`.
pub fn check_repo_url(
    ctx: &CheckContext,
    repo_url: Option<&str>,
    checks: &dyn InitialChecks,
    fetcher: &dyn PageFetcher,
) -> FormValidation {
    let clean = fix_empty_and_trim(repo_url);
    if checks.ok_without_checking(ctx, clean) {
        tracing::debug!(value = ?clean, "repo url check skipped");
        return FormValidation::Ok;
    }
    let Some(clean) = clean else {
        tracing::info!("repo url rejected: empty");
        return FormValidation::error(messages::invalid_url());
    };
    if !is_valid_url(clean) {
        tracing::info!(value = clean, "repo url rejected: invalid URL");
        return FormValidation::error(messages::invalid_url());
    }

    let mut v = clean.to_string();
    if !v.ends_with('/') {
        v.push('/');
    }
    let url = match Url::parse(&v) {
        Ok(u) => u,
        Err(_) => return FormValidation::error(messages::invalid_url()),
    };

    match fetcher.find_text(&url, GITILES_MARKER) {
        Ok(found) => {
            if found {
                tracing::info!(url = %v, "repo url looks like gitiles");
                FormValidation::Ok
            } else {
                tracing::info!(url = %v, "repo url reachable but not gitiles");
                FormValidation::error(messages::not_gitiles())
            }
        }
        Err(e) => {
            tracing::warn!(url = %v, error = %e, "repo url fetch failed");
            match classify(&e) {
                FailureKind::Connect => {
                    FormValidation::error_with_cause(messages::unable_to_connect(&v), e)
                }
                FailureKind::Other => FormValidation::error_with_cause(e.to_string(), e),
            }
        }
    }
}
