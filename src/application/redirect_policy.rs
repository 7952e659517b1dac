//! Response-shape policy for redirect requests.
//!
//! Interactive API documentation clients (Swagger UI and friends) follow
//! redirects transparently, which hides the target from the person exploring
//! the API. For those clients the redirect endpoint answers with a JSON
//! descriptor instead of a `307`.
//!
//! The rule is a fixed, case-insensitive substring match and nothing more:
//!
//! - `User-Agent` contains `swagger`, or
//! - `Accept` contains `application/json`
//!
//! It is not general content negotiation: `Accept: */*` or `text/html` still
//! get the redirect, and quality values are ignored.

/// How a resolved short link should be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// `307 Temporary Redirect` with a `Location` header.
    Redirect,
    /// `200 OK` with `{"message", "target_url"}`.
    Describe,
}

const SWAGGER_MARKER: &str = "swagger";
const JSON_MEDIA_TYPE: &str = "application/json";

/// Picks the response shape from the request's `User-Agent` and `Accept`.
pub fn choose_response(user_agent: Option<&str>, accept: Option<&str>) -> RedirectKind {
    let contains = |value: Option<&str>, needle: &str| {
        value.is_some_and(|v| v.to_ascii_lowercase().contains(needle))
    };

    if contains(user_agent, SWAGGER_MARKER) || contains(accept, JSON_MEDIA_TYPE) {
        RedirectKind::Describe
    } else {
        RedirectKind::Redirect
    }
}
