//! Change metadata consumed by the link builders.
//!
//! A changeset is identified by its commit id; each changed path keeps a
//! copy of the commit id it belongs to so links can be built from the path
//! alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque Git object id of a commit. Not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// How a path was touched by a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    Add,
    Delete,
    #[default]
    Edit,
}

/// A file changed by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedPath {
    commit: CommitId,
    path: String,
    #[serde(default)]
    edit_type: EditType,
}

impl ChangedPath {
    pub fn new(commit: CommitId, path: impl Into<String>, edit_type: EditType) -> Self {
        Self {
            commit,
            path: path.into(),
            edit_type,
        }
    }

    /// Commit this path belongs to.
    pub fn commit(&self) -> &CommitId {
        &self.commit
    }

    /// Repository-relative path, `/`-separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn edit_type(&self) -> EditType {
        self.edit_type
    }
}

/// A single commit and the paths it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    id: CommitId,
    #[serde(default)]
    paths: Vec<ChangedPath>,
}

impl ChangeSet {
    pub fn new(id: CommitId) -> Self {
        Self {
            id,
            paths: Vec::new(),
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// Records a changed path under this commit and returns it.
    pub fn add_path(&mut self, path: impl Into<String>, edit_type: EditType) -> &ChangedPath {
        self.paths
            .push(ChangedPath::new(self.id.clone(), path, edit_type));
        let last = self.paths.len() - 1;
        &self.paths[last]
    }

    pub fn paths(&self) -> &[ChangedPath] {
        &self.paths
    }
}
