//! Per-client rate limiting for the dashboard API.
//!
//! Clients are keyed by the first address in `X-Forwarded-For`, falling back to the
//! socket address. Requests whose client cannot be determined share a single bucket.
//! When the budget is spent the request is answered with HTTP 200 and the
//! `err-rate-limit` sentinel, like every other dashboard failure.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroU32,
    sync::Arc,
    time::Duration,
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;
use governor::{clock::DefaultClock, state::keyed::DashMapStateStore, Quota, RateLimiter};

use crate::{
    model::api::Sentinel,
    server::error::{config::ConfigError, dashboard::sentinel_response},
};

/// Rate limiter keyed by client IP address.
pub type IpRateLimiter = Arc<RateLimiter<IpAddr, DashMapStateStore<IpAddr>, DefaultClock>>;

/// Bucket shared by requests without a known client address.
const UNKNOWN_CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Creates a limiter allowing `max_requests` per `window` for each client.
///
/// # Returns
/// - `Ok(IpRateLimiter)` - Limiter ready to be shared with the middleware
/// - `Err(ConfigError::InvalidEnvVar)` - Zero requests or a zero window
pub fn create_ip_rate_limiter(
    max_requests: u32,
    window: Duration,
) -> Result<IpRateLimiter, ConfigError> {
    Ok(Arc::new(RateLimiter::dashmap(window_quota(max_requests, window)?)))
}

/// Quota admitting at most `max_requests` within any span of length `window`.
///
/// The whole budget is available at once and a single request is replenished per
/// `window`, so a spent budget only recovers one request after a full window.
fn window_quota(max_requests: u32, window: Duration) -> Result<Quota, ConfigError> {
    let burst = NonZeroU32::new(max_requests).ok_or_else(|| ConfigError::InvalidEnvVar {
        name: "RATE_LIMIT_MAX_REQUESTS".to_string(),
        reason: "must be greater than zero".to_string(),
    })?;

    let quota = Quota::with_period(window).ok_or_else(|| ConfigError::InvalidEnvVar {
        name: "RATE_LIMIT_WINDOW_SECS".to_string(),
        reason: "must be greater than zero".to_string(),
    })?;

    Ok(quota.allow_burst(burst))
}

/// Middleware enforcing the per-client request budget.
pub async fn ip_rate_limit_middleware(
    State(limiter): State<IpRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_ip(&request).unwrap_or(UNKNOWN_CLIENT);

    match limiter.check_key(&client) {
        Ok(_) => next.run(request).await,
        Err(_) => {
            tracing::warn!("Rate limit exceeded for client {}", client);
            sentinel_response(Sentinel::RateLimit)
        }
    }
}

fn client_ip(request: &Request) -> Option<IpAddr> {
    let forwarded_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse::<IpAddr>().ok());

    forwarded_ip.or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    })
}
