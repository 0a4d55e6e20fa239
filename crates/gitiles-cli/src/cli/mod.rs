//! CLI for the Gitiles repository browser.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitiles_core::browser::BrowserRegistry;
use gitiles_core::config::{self, BrowserConfig, GitilesConfig};

use commands::{run_browsers, run_changeset, run_check, run_diff, run_file};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gitiles")]
#[command(about = "Gitiles links for commits and changed files", long_about = None)]
pub struct Cli {
    /// Repository root URL; overrides `[browser].repo_url` from config.toml.
    #[arg(long, global = true, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Repository browser kind; overrides `[browser].kind` from config.toml.
    #[arg(long, global = true, value_name = "KIND")]
    pub kind: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the whole-commit link.
    Changeset {
        /// Commit id.
        commit: String,
    },

    /// Print the diff link for a file changed by a commit.
    Diff {
        /// Commit id.
        commit: String,
        /// Repository-relative path of the changed file.
        path: String,
    },

    /// Print the blame link for a file as of a commit.
    File {
        /// Commit id.
        commit: String,
        /// Repository-relative path of the changed file.
        path: String,
    },

    /// Check that a URL points at a Gitiles server (fetches its landing page).
    Check {
        /// URL to check; defaults to the configured repository URL.
        url: Option<String>,
        /// Act as a caller without configure permission (the check is skipped).
        #[arg(long)]
        no_permission: bool,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List registered repository browsers.
    Browsers,
}

/// Config file browser section, with command-line overrides applied.
pub(crate) fn resolve_browser(
    cfg: &GitilesConfig,
    repo_url: Option<String>,
    kind: Option<String>,
) -> Result<BrowserConfig> {
    let mut browser = match (cfg.browser.clone(), repo_url) {
        (_, Some(url)) => BrowserConfig::new(url),
        (Some(b), None) => b,
        (None, None) => {
            let path = config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string());
            anyhow::bail!("no repository URL: pass --repo-url or set [browser].repo_url in {path}");
        }
    };
    if let Some(k) = kind.or_else(|| cfg.browser.as_ref().map(|b| b.kind.clone())) {
        browser.kind = k;
    }
    Ok(browser)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = BrowserRegistry::with_builtin();

        match cli.command {
            CliCommand::Changeset { commit } => {
                let browser = resolve_browser(&cfg, cli.repo_url, cli.kind)?.build(&registry)?;
                run_changeset(browser.as_ref(), &commit)?;
            }
            CliCommand::Diff { commit, path } => {
                let browser = resolve_browser(&cfg, cli.repo_url, cli.kind)?.build(&registry)?;
                run_diff(browser.as_ref(), &commit, &path)?;
            }
            CliCommand::File { commit, path } => {
                let browser = resolve_browser(&cfg, cli.repo_url, cli.kind)?.build(&registry)?;
                run_file(browser.as_ref(), &commit, &path)?;
            }
            CliCommand::Check {
                url,
                no_permission,
                json,
            } => {
                let url = url.or_else(|| {
                    cli.repo_url
                        .or_else(|| cfg.browser.as_ref().map(|b| b.repo_url.clone()))
                });
                let ok = run_check(url, !no_permission, json, cfg.probe.options())
                    .await
                    .context("check")?;
                if !ok {
                    std::process::exit(2);
                }
            }
            CliCommand::Browsers => run_browsers(&registry),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
