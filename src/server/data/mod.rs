//! Repository layer over the three stores the dashboard reads from.
//!
//! - `guild_config` - Config store, one sea-orm row per guild
//! - `session` - Session store written by the auth flow, read-only here
//! - `guild_cache` - The bot's in-memory guild cache, read-only here
//!
//! Repositories return parameter models to keep entity models, session records and
//! cache entries out of the service layer.

pub mod guild_cache;
pub mod guild_config;
pub mod session;

pub use guild_cache::GuildCache;
pub use guild_config::GuildConfigRepository;
pub use session::DashboardSessionRepository;

#[cfg(test)]
mod test;
