//! Per-client, per-endpoint rate limiting.
//!
//! Each limited route group gets its own keyed GCRA limiter from `governor`,
//! keyed by client IP. The client IP is extracted with `tower_governor`'s key
//! extractors: the socket peer address by default, or forwarding headers
//! (`X-Forwarded-For`, `X-Real-IP`, `Forwarded`) when running behind a proxy.
//!
//! A quota of `n` per minute allows a burst of `n` requests and replenishes one
//! slot every `60 / n` seconds.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroU32;
use std::sync::Arc;
use tower_governor::key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor};
use tracing::warn;

use crate::error::AppError;

/// Tracked clients above which stale limiter entries are purged.
const RETAIN_THRESHOLD: usize = 10_000;

/// Rate limiter state shared by all requests of one route group.
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
    per_minute: u32,
    behind_proxy: bool,
}

impl RateLimit {
    /// Creates a limiter allowing `per_minute` requests per client IP.
    ///
    /// A zero quota is raised to one.
    pub fn per_minute(per_minute: u32, behind_proxy: bool) -> Self {
        let rate = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(rate))),
            per_minute: rate.get(),
            behind_proxy,
        }
    }

    /// Extracts the client IP, falling back to loopback when no address is
    /// available (e.g. in-process test transports).
    fn client_ip<B>(&self, req: &axum::http::Request<B>) -> IpAddr {
        let extracted = if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        };

        extracted.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    /// Consumes one slot of `ip`'s quota.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] if the quota is exhausted.
    pub fn check(&self, ip: IpAddr) -> Result<(), AppError> {
        if self.limiter.len() > RETAIN_THRESHOLD {
            self.limiter.retain_recent();
        }

        self.limiter.check_key(&ip).map_err(|_| {
            warn!("Rate limit exceeded for {} ({}/minute)", ip, self.per_minute);
            AppError::RateLimited {
                per_minute: self.per_minute,
            }
        })
    }
}

/// Rejects requests over quota with `429 Too Many Requests` before they
/// reach the handler.
///
/// # Example
///
/// ```rust,ignore
/// let limited = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(
///         RateLimit::per_minute(10, false),
///         rate_limit::layer,
///     ));
/// ```
pub async fn layer(
    State(limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = limit.client_ip(&req);
    limit.check(ip)?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;

    #[test]
    fn test_allows_quota_then_rejects() {
        let limit = RateLimit::per_minute(3, false);
        let ip: IpAddr = "10.0.0.1".parse().unwrap();

        for _ in 0..3 {
            assert!(limit.check(ip).is_ok());
        }

        let err = limit.check(ip).unwrap_err();
        assert!(matches!(err, AppError::RateLimited { per_minute: 3 }));
    }

    #[test]
    fn test_quota_is_per_client() {
        let limit = RateLimit::per_minute(1, false);
        let first: IpAddr = "10.0.0.1".parse().unwrap();
        let second: IpAddr = "10.0.0.2".parse().unwrap();

        assert!(limit.check(first).is_ok());
        assert!(limit.check(first).is_err());
        assert!(limit.check(second).is_ok());
    }

    #[test]
    fn test_zero_quota_raised_to_one() {
        let limit = RateLimit::per_minute(0, false);
        let ip: IpAddr = "10.0.0.3".parse().unwrap();

        assert!(limit.check(ip).is_ok());
        assert!(limit.check(ip).is_err());
    }

    #[test]
    fn test_client_ip_from_peer_address() {
        let limit = RateLimit::per_minute(5, false);
        let addr: SocketAddr = "192.168.1.7:4321".parse().unwrap();

        let mut req = axum::http::Request::new(());
        req.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(limit.client_ip(&req), addr.ip());
    }

    #[test]
    fn test_client_ip_from_forwarded_header_behind_proxy() {
        let limit = RateLimit::per_minute(5, true);

        let req = axum::http::Request::builder()
            .header("x-forwarded-for", "203.0.113.9")
            .body(())
            .unwrap();

        assert_eq!(limit.client_ip(&req), "203.0.113.9".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_client_ip_fallback_to_loopback() {
        let limit = RateLimit::per_minute(5, false);
        let req = axum::http::Request::new(());

        assert_eq!(limit.client_ip(&req), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
