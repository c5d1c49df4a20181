//! Rate limiting for review submission using governor and `tower_governor`.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// How often idle per-IP limiter entries are pruned.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Client IP key extractor.
///
/// Keys on the socket peer address. With `trust_proxy_headers` set, the
/// client IP comes from `CF-Connecting-IP`, the last `X-Forwarded-For` hop
/// (the one our proxy appended) or `X-Real-IP`, in that order, before falling
/// back to the peer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientIpKeyExtractor {
    trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    #[must_use]
    pub const fn new(trust_proxy_headers: bool) -> Self {
        Self {
            trust_proxy_headers,
        }
    }
}

fn proxy_client_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    let parse = |s: &str| s.trim().parse::<IpAddr>().ok();

    header("cf-connecting-ip")
        .and_then(parse)
        .or_else(|| {
            header("x-forwarded-for")
                .and_then(|v| v.rsplit(',').next())
                .and_then(parse)
        })
        .or_else(|| header("x-real-ip").and_then(parse))
}

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let from_proxy = if self.trust_proxy_headers {
            proxy_client_ip(req.headers())
        } else {
            None
        };

        from_proxy
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for review submission: burst of 5, then one every 12 seconds per IP.
///
/// Spawns a background thread that drops entries for clients whose quota has
/// fully replenished.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers, which are always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn review_rate_limiter(trust_proxy_headers: bool) -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor::new(trust_proxy_headers))
        .per_second(12)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(12) and burst_size(5) is valid");

    let limiter = Arc::clone(config.limiter());
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(CLEANUP_INTERVAL);
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    });

    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    fn request(headers: &[(&str, &str)], peer: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri("/reviews");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let mut req = builder.body(()).unwrap();
        if let Some(peer) = peer {
            let addr: SocketAddr = peer.parse().unwrap();
            req.extensions_mut().insert(ConnectInfo(addr));
        }
        req
    }

    const TRUSTED: ClientIpKeyExtractor = ClientIpKeyExtractor::new(true);
    const UNTRUSTED: ClientIpKeyExtractor = ClientIpKeyExtractor::new(false);

    #[test]
    fn test_untrusted_ignores_proxy_headers() {
        let req = request(
            &[
                ("cf-connecting-ip", "203.0.113.7"),
                ("x-forwarded-for", "198.51.100.1"),
                ("x-real-ip", "198.51.100.2"),
            ],
            Some("192.0.2.10:4242"),
        );
        assert_eq!(UNTRUSTED.extract(&req).unwrap().to_string(), "192.0.2.10");
    }

    #[test]
    fn test_untrusted_without_peer_is_an_error() {
        let req = request(&[("x-forwarded-for", "198.51.100.1")], None);
        assert!(UNTRUSTED.extract(&req).is_err());
    }

    #[test]
    fn test_trusted_prefers_cloudflare_header() {
        let req = request(
            &[
                ("cf-connecting-ip", "203.0.113.7"),
                ("x-forwarded-for", "198.51.100.1"),
            ],
            None,
        );
        assert_eq!(TRUSTED.extract(&req).unwrap().to_string(), "203.0.113.7");
    }

    #[test]
    fn test_trusted_uses_last_forwarded_hop() {
        let req = request(&[("x-forwarded-for", "10.9.9.9, 198.51.100.1")], None);
        assert_eq!(TRUSTED.extract(&req).unwrap().to_string(), "198.51.100.1");
    }

    #[test]
    fn test_trusted_falls_back_to_peer_address() {
        let req = request(&[("x-forwarded-for", "garbage")], Some("192.0.2.10:4242"));
        assert_eq!(TRUSTED.extract(&req).unwrap().to_string(), "192.0.2.10");
    }
}
