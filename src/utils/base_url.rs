//! Base URL resolution for building short URLs.

use axum::http::{HeaderMap, header};

/// Base URL used when neither configuration nor the request names a host.
pub const FALLBACK_BASE_URL: &str = "http://localhost/";

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Appends a trailing `/` if missing.
pub fn ensure_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

/// Resolves the base URL (ending in `/`) that short codes are appended to.
///
/// Priority:
/// 1. The configured `BASE_URL`, if any
/// 2. `http://<Host>/` from the request, with the scheme taken from
///    `X-Forwarded-Proto` when `behind_proxy` is set
/// 3. [`FALLBACK_BASE_URL`]
///
/// The port in `Host` is kept so the short URL points back at the exact
/// authority the client used.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8000".parse().unwrap());
///
/// assert_eq!(resolve_base_url(None, &headers, false), "http://localhost:8000/");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap, behind_proxy: bool) -> String {
    if let Some(base) = configured {
        return ensure_trailing_slash(base);
    }

    let Some(host) = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
    else {
        return FALLBACK_BASE_URL.to_string();
    };

    let scheme = if behind_proxy {
        forwarded_scheme(headers).unwrap_or("http")
    } else {
        "http"
    };

    format!("{}://{}/", scheme, host)
}

/// Reads the first `X-Forwarded-Proto` value if it is `http` or `https`.
fn forwarded_scheme(headers: &HeaderMap) -> Option<&'static str> {
    let raw = headers.get(FORWARDED_PROTO)?.to_str().ok()?;
    let first = raw.split(',').next()?.trim();

    if first.eq_ignore_ascii_case("https") {
        Some("https")
    } else if first.eq_ignore_ascii_case("http") {
        Some("http")
    } else {
        None
    }
}
