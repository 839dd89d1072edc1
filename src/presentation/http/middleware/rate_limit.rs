// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP token bucket refilled by one request every
/// `replenish_interval_ms`, allowing bursts of `burst_size`. Needs the server
/// to run with `into_make_service_with_connect_info::<SocketAddr>()` when no
/// proxy headers are present.
#[must_use]
pub fn rate_limit_layer(
    replenish_interval_ms: u64,
    burst_size: u32,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_interval_ms);
    builder.burst_size(burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
