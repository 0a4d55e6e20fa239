//! Path-segment-safe URL encoding.

use url::Url;

use super::LinkError;

/// Parses `prefix` and appends `path` to it one segment at a time.
///
/// Each `/`-separated segment of `path` is percent-encoded on its own, so
/// characters such as space, `#`, `?`, `%` and non-ASCII text end up escaped
/// while the delimiters of `prefix` (`/`, `+`, scheme and host) survive.
/// A trailing empty segment of `prefix` (i.e. a trailing `/`) is replaced by
/// the first segment of `path`.
pub fn encode_url(prefix: &str, path: &str) -> Result<Url, LinkError> {
    let mut url = Url::parse(prefix).map_err(|e| LinkError::malformed(prefix, e))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| LinkError::CannotBeABase(prefix.to_string()))?;
        segments.pop_if_empty();
        segments.extend(path.trim_start_matches('/').split('/'));
    }
    Ok(url)
}
