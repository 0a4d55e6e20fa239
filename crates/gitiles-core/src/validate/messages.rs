//! User-facing validation messages.

/// Shown when the candidate is not an absolute http(s) URL.
pub fn invalid_url() -> &'static str {
    "Invalid URL"
}

/// Shown when the landing page was fetched but lacks the Gitiles marker.
pub fn not_gitiles() -> &'static str {
    "This is a valid URL but it doesn't look like Gitiles"
}

/// Shown when the server could not be reached at all.
pub fn unable_to_connect(url: &str) -> String {
    format!("Unable to connect {}", url)
}
