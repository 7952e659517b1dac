//! Syntactic URL validation.

use url::Url;

/// Returns `true` if `candidate` parses as an absolute URL with a non-empty
/// scheme and a non-empty host.
///
/// This is a purely syntactic check: no reachability test, no scheme
/// allow-list. Anything that fails to parse is simply invalid.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}
