// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimit;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Milliseconds between two replenished requests for a per-second budget.
fn replenish_interval_ms(per_second: u64) -> u64 {
    (1000 / per_second.max(1)).max(1)
}

/// Per-client limiter for the scoring endpoints, which the editor calls on
/// every keystroke. Returns `None` when the limits cannot form a valid
/// configuration.
#[must_use]
pub fn rate_limit_layer(limit: RateLimit) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    // The builder counts the replenish interval, not the request rate.
    builder.per_millisecond(replenish_interval_ms(limit.per_second));
    builder.burst_size(limit.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
