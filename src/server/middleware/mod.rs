//! Request guards and tower middleware.
//!
//! - `auth` - Per-guild access check run by every gated dashboard endpoint
//! - `rate_limit` - Per-client request budget for the dashboard API
//! - `session` - Typed access to the caller's cookie session

pub mod auth;
pub mod rate_limit;
pub mod session;
