//! `gitiles changeset|diff|file` – print links.

use anyhow::{Context, Result};
use gitiles_core::browser::RepositoryBrowser;
use gitiles_core::model::{ChangeSet, CommitId, EditType};

pub fn run_changeset(browser: &dyn RepositoryBrowser, commit: &str) -> Result<()> {
    let cs = ChangeSet::new(CommitId::from(commit));
    let url = browser
        .changeset_link(&cs)
        .with_context(|| format!("changeset link for {commit}"))?;
    println!("{url}");
    Ok(())
}

pub fn run_diff(browser: &dyn RepositoryBrowser, commit: &str, path: &str) -> Result<()> {
    let mut cs = ChangeSet::new(CommitId::from(commit));
    let changed = cs.add_path(path, EditType::Edit);
    let url = browser
        .diff_link(changed)
        .with_context(|| format!("diff link for {path} at {commit}"))?;
    println!("{url}");
    Ok(())
}

pub fn run_file(browser: &dyn RepositoryBrowser, commit: &str, path: &str) -> Result<()> {
    let mut cs = ChangeSet::new(CommitId::from(commit));
    let changed = cs.add_path(path, EditType::Edit);
    let url = browser
        .file_link(changed)
        .with_context(|| format!("file link for {path} at {commit}"))?;
    println!("{url}");
    Ok(())
}
