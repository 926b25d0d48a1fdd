//! Discord bot integration.
//!
//! The bot's gateway connection owns the guild cache the dashboard API reads from:
//! which guilds the bot is on, and their members, roles and channels. The bot is
//! initialized during server startup and runs in a separate tokio task to avoid
//! blocking the HTTP server; its cache is shared with the API through `AppState`.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, role and channel events that keep the cache current
//! - `GUILD_MEMBERS` - Member events and member chunks for user search (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
