//! CLI parse and option resolution tests.

use super::{resolve_browser, Cli, CliCommand};
use clap::Parser;
use gitiles_core::config::{BrowserConfig, GitilesConfig};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_changeset() {
    match parse(&["gitiles", "changeset", "abc123"]).command {
        CliCommand::Changeset { commit } => assert_eq!(commit, "abc123"),
        _ => panic!("expected Changeset"),
    }
}

#[test]
fn cli_parse_diff_and_file() {
    match parse(&["gitiles", "diff", "abc", "src/lib.rs"]).command {
        CliCommand::Diff { commit, path } => {
            assert_eq!(commit, "abc");
            assert_eq!(path, "src/lib.rs");
        }
        _ => panic!("expected Diff"),
    }
    match parse(&["gitiles", "file", "abc", "dir with space/x.md"]).command {
        CliCommand::File { path, .. } => assert_eq!(path, "dir with space/x.md"),
        _ => panic!("expected File"),
    }
}

#[test]
fn cli_parse_global_repo_url_after_subcommand() {
    let cli = parse(&[
        "gitiles",
        "changeset",
        "abc",
        "--repo-url",
        "https://gwt.googlesource.com/gwt",
    ]);
    assert_eq!(
        cli.repo_url.as_deref(),
        Some("https://gwt.googlesource.com/gwt")
    );
}

#[test]
fn cli_parse_check() {
    match parse(&["gitiles", "check", "https://example.com/", "--json"]).command {
        CliCommand::Check {
            url,
            no_permission,
            json,
        } => {
            assert_eq!(url.as_deref(), Some("https://example.com/"));
            assert!(!no_permission);
            assert!(json);
        }
        _ => panic!("expected Check"),
    }
    match parse(&["gitiles", "check", "--no-permission"]).command {
        CliCommand::Check {
            url, no_permission, ..
        } => {
            assert!(url.is_none());
            assert!(no_permission);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_browsers() {
    assert!(matches!(
        parse(&["gitiles", "browsers"]).command,
        CliCommand::Browsers
    ));
}

#[test]
fn cli_diff_requires_path() {
    assert!(Cli::try_parse_from(["gitiles", "diff", "abc"]).is_err());
}

#[test]
fn resolve_prefers_flag_over_config() {
    let cfg = GitilesConfig {
        browser: Some(BrowserConfig::new("https://configured.example/repo")),
        ..GitilesConfig::default()
    };
    let b = resolve_browser(&cfg, Some("https://flag.example/repo".into()), None).unwrap();
    assert_eq!(b.repo_url, "https://flag.example/repo");
    assert_eq!(b.kind, "gitiles");

    let b = resolve_browser(&cfg, None, Some("other".into())).unwrap();
    assert_eq!(b.repo_url, "https://configured.example/repo");
    assert_eq!(b.kind, "other");
}

#[test]
fn resolve_without_any_url_fails() {
    assert!(resolve_browser(&GitilesConfig::default(), None, None).is_err());
}
