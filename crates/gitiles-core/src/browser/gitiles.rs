//! Gitiles strategy.

use url::Url;

use super::{normalize_to_end_with_slash, RepositoryBrowser};
use crate::link::{self, LinkError};
use crate::model::{ChangeSet, ChangedPath};

/// Links into a Gitiles repository, e.g. `https://gwt.googlesource.com/gwt/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitilesBrowser {
    repo_url: String,
}

impl GitilesBrowser {
    pub const SYMBOL: &'static str = "gitiles";
    pub const DISPLAY_NAME: &'static str = "gitiles";

    /// Fails if `repo_url` is not an absolute hierarchical URL, or if it
    /// carries a query or fragment.
    pub fn new(repo_url: impl Into<String>) -> Result<Self, LinkError> {
        let repo_url = repo_url.into();
        let url = normalize_to_end_with_slash(&repo_url)?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(LinkError::QueryOrFragment(repo_url));
        }
        Ok(Self { repo_url })
    }
}

impl RepositoryBrowser for GitilesBrowser {
    fn repo_url(&self) -> &str {
        &self.repo_url
    }

    // https://gwt.googlesource.com/gwt/+/d556b611fef6df7bfe07682262b02309e6d41769%5E%21/#F3
    fn diff_link(&self, path: &ChangedPath) -> Result<Url, LinkError> {
        link::diff_link(&self.url()?, path.commit(), path.path())
    }

    // https://gwt.googlesource.com/gwt/+blame/d556b611fef6df7bfe07682262b02309e6d41769/dev/codeserver/java/com/google/gwt/dev/codeserver/ModuleState.java
    fn file_link(&self, path: &ChangedPath) -> Result<Url, LinkError> {
        link::file_link(&self.url()?, path.commit(), path.path())
    }

    fn changeset_link(&self, changeset: &ChangeSet) -> Result<Url, LinkError> {
        link::changeset_link(&self.url()?, changeset.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommitId, EditType};

    const COMMIT: &str = "d556b611fef6df7bfe07682262b02309e6d41769";

    fn changeset() -> ChangeSet {
        let mut cs = ChangeSet::new(CommitId::from(COMMIT));
        cs.add_path(
            "dev/codeserver/java/com/google/gwt/dev/codeserver/ModuleState.java",
            EditType::Edit,
        );
        cs
    }

    #[test]
    fn links_use_slash_terminated_base() {
        let browser = GitilesBrowser::new("https://gwt.googlesource.com/gwt").unwrap();
        let cs = changeset();
        assert_eq!(
            browser.changeset_link(&cs).unwrap().as_str(),
            "https://gwt.googlesource.com/gwt/+/d556b611fef6df7bfe07682262b02309e6d41769%5E%21"
        );
        assert_eq!(
            browser.diff_link(&cs.paths()[0]).unwrap(),
            browser.changeset_link(&cs).unwrap()
        );
        assert_eq!(
            browser.file_link(&cs.paths()[0]).unwrap().as_str(),
            "https://gwt.googlesource.com/gwt/+blame/d556b611fef6df7bfe07682262b02309e6d41769/dev/codeserver/java/com/google/gwt/dev/codeserver/ModuleState.java"
        );
    }

    #[test]
    fn file_link_escapes_path() {
        let browser = GitilesBrowser::new("https://example.com/repo/").unwrap();
        let mut cs = ChangeSet::new(CommitId::from("abc"));
        let p = cs.add_path("my dir/a#b.txt", EditType::Add).clone();
        assert_eq!(
            browser.file_link(&p).unwrap().as_str(),
            "https://example.com/repo/+blame/abc/my%20dir/a%23b.txt"
        );
    }

    #[test]
    fn rejects_malformed_repo_url() {
        assert!(GitilesBrowser::new("not a url").is_err());
    }

    #[test]
    fn rejects_query_or_fragment_in_repo_url() {
        for url in [
            "https://example.com/repo?x=1",
            "https://example.com/repo/#top",
            "https://example.com/repo/?",
        ] {
            assert!(
                matches!(GitilesBrowser::new(url), Err(LinkError::QueryOrFragment(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn keeps_configured_url_verbatim() {
        let browser = GitilesBrowser::new("https://example.com/repo").unwrap();
        assert_eq!(browser.repo_url(), "https://example.com/repo");
        assert_eq!(browser.url().unwrap().as_str(), "https://example.com/repo/");
    }
}
