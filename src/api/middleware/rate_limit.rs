//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

type IpGovernorConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for public endpoints such as `/health`.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> IpGovernorLayer {
    GovernorLayer::new(public_config())
}

/// Creates the rate limiter for the authenticated dictionary API.
///
/// # Limits
///
/// - **Rate**: 10 requests per second
/// - **Burst**: 50 requests
///
/// # Example
///
/// ```rust,ignore
/// let api = api::routes::protected_routes()
///     .layer(rate_limit::secure_layer());
/// ```
pub fn secure_layer() -> IpGovernorLayer {
    GovernorLayer::new(secure_config())
}

fn public_config() -> Arc<IpGovernorConfig> {
    build(Duration::from_millis(500), 100)
}

fn secure_config() -> Arc<IpGovernorConfig> {
    build(Duration::from_millis(100), 50)
}

/// `replenish_every` is the time needed to earn back one request of the burst.
fn build(replenish_every: Duration, burst_size: u32) -> Arc<IpGovernorConfig> {
    Arc::new(
        GovernorConfigBuilder::default()
            .period(replenish_every)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    )
}
