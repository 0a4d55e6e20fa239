//! Named browser strategies, looked up by the `kind` in configuration.

use thiserror::Error;

use super::{GitilesBrowser, RepositoryBrowser};
use crate::link::LinkError;

type Factory = fn(&str) -> Result<Box<dyn RepositoryBrowser>, LinkError>;

fn gitiles_factory(repo_url: &str) -> Result<Box<dyn RepositoryBrowser>, LinkError> {
    Ok(Box::new(GitilesBrowser::new(repo_url)?))
}

/// One registered strategy.
#[derive(Clone, Copy)]
pub struct BrowserDescriptor {
    /// Short name used in configuration, e.g. `gitiles`.
    pub symbol: &'static str,
    pub display_name: &'static str,
    factory: Factory,
}

impl BrowserDescriptor {
    pub fn new(symbol: &'static str, display_name: &'static str, factory: Factory) -> Self {
        Self {
            symbol,
            display_name,
            factory,
        }
    }
}

impl std::fmt::Debug for BrowserDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserDescriptor")
            .field("symbol", &self.symbol)
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown repository browser {0:?}")]
    UnknownKind(String),
    #[error("symbol {0:?} is already registered")]
    Duplicate(&'static str),
    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Ordered set of strategies, unique by symbol.
#[derive(Debug, Default)]
pub struct BrowserRegistry {
    entries: Vec<BrowserDescriptor>,
}

impl BrowserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every strategy this crate ships.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        reg.entries.push(BrowserDescriptor::new(
            GitilesBrowser::SYMBOL,
            GitilesBrowser::DISPLAY_NAME,
            gitiles_factory,
        ));
        reg
    }

    pub fn register(&mut self, desc: BrowserDescriptor) -> Result<(), RegistryError> {
        if self.get(desc.symbol).is_some() {
            return Err(RegistryError::Duplicate(desc.symbol));
        }
        self.entries.push(desc);
        Ok(())
    }

    /// Looks up a strategy by symbol (case-insensitive).
    pub fn get(&self, kind: &str) -> Option<&BrowserDescriptor> {
        self.entries
            .iter()
            .find(|d| d.symbol.eq_ignore_ascii_case(kind))
    }

    pub fn descriptors(&self) -> &[BrowserDescriptor] {
        &self.entries
    }

    /// Builds the browser named by `kind` for `repo_url`.
    pub fn create(
        &self,
        kind: &str,
        repo_url: &str,
    ) -> Result<Box<dyn RepositoryBrowser>, RegistryError> {
        let desc = self
            .get(kind)
            .ok_or_else(|| RegistryError::UnknownKind(kind.to_string()))?;
        tracing::debug!(kind = desc.symbol, repo_url, "creating repository browser");
        Ok((desc.factory)(repo_url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeSet, CommitId};

    #[test]
    fn builtin_has_gitiles() {
        let reg = BrowserRegistry::with_builtin();
        let desc = reg.get("gitiles").unwrap();
        assert_eq!(desc.display_name, "gitiles");
        assert!(reg.get("GITILES").is_some());
    }

    #[test]
    fn create_builds_working_browser() {
        let reg = BrowserRegistry::with_builtin();
        let browser = reg.create("gitiles", "https://example.com/repo").unwrap();
        let cs = ChangeSet::new(CommitId::from("abc"));
        assert_eq!(
            browser.changeset_link(&cs).unwrap().as_str(),
            "https://example.com/repo/+/abc%5E%21"
        );
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let reg = BrowserRegistry::with_builtin();
        assert!(matches!(
            reg.create("cgit", "https://example.com/"),
            Err(RegistryError::UnknownKind(k)) if k == "cgit"
        ));
    }

    #[test]
    fn bad_url_surfaces_link_error() {
        let reg = BrowserRegistry::with_builtin();
        assert!(matches!(
            reg.create("gitiles", "not a url"),
            Err(RegistryError::Link(_))
        ));
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let mut reg = BrowserRegistry::with_builtin();
        let dup = BrowserDescriptor::new("gitiles", "another", gitiles_factory);
        assert!(matches!(
            reg.register(dup),
            Err(RegistryError::Duplicate("gitiles"))
        ));
        assert_eq!(reg.descriptors().len(), 1);
    }
}
