// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ClientRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Token bucket per client IP: `burst` requests up front, then one more
/// every `1s / per_second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub per_second: u32,
    pub burst: u32,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

impl RateLimitPolicy {
    /// Time governor waits before handing a spent slot back.
    pub fn replenish_interval(&self) -> Option<Duration> {
        (self.per_second > 0).then(|| Duration::from_secs(1) / self.per_second)
    }
}

/// Build a limiter with its own bucket state. The client key comes from
/// `X-Forwarded-For`/`X-Real-Ip`/`Forwarded`, then the peer address, so the
/// server must be started with connect info.
pub fn rate_limit_layer(policy: RateLimitPolicy) -> Option<ClientRateLimitLayer> {
    let Some(interval) = policy.replenish_interval() else {
        tracing::warn!(?policy, "rate limit disabled: zero requests per second");
        return None;
    };

    let mut builder = GovernorConfigBuilder::default();
    builder.period(interval);
    builder.burst_size(policy.burst);
    match builder.key_extractor(SmartIpKeyExtractor).finish() {
        Some(config) => Some(GovernorLayer::new(config)),
        None => {
            tracing::warn!(?policy, "rate limit disabled: burst must be positive");
            None
        }
    }
}
