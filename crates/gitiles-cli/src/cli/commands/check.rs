//! `gitiles check [url]` – validate a repository URL.

use anyhow::{Context, Result};
use gitiles_core::probe::{CurlFetcher, ProbeOptions};
use gitiles_core::validate::{check_repo_url, CheckContext, FormValidation, StandardInitialChecks};

fn verdict_json(v: &FormValidation) -> serde_json::Value {
    match v {
        FormValidation::Ok => serde_json::json!({ "kind": "ok" }),
        FormValidation::Error { message, cause } => serde_json::json!({
            "kind": "error",
            "message": message,
            "cause": cause.as_ref().map(|c| c.to_string()),
        }),
    }
}

/// Runs the check and prints the verdict. Returns whether it was `Ok`.
pub async fn run_check(
    url: Option<String>,
    may_configure: bool,
    json: bool,
    opts: ProbeOptions,
) -> Result<bool> {
    let verdict = tokio::task::spawn_blocking(move || {
        let ctx = CheckContext { may_configure };
        check_repo_url(
            &ctx,
            url.as_deref(),
            &StandardInitialChecks,
            &CurlFetcher::new(opts),
        )
    })
    .await
    .context("check task join")?;

    if json {
        println!("{}", verdict_json(&verdict));
    } else {
        println!("{}", verdict);
    }
    Ok(verdict.is_ok())
}
