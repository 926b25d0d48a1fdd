//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake, before the guild create
//! events that populate the cache.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Logs the connected bot account and how many guilds it is about to receive.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord, {} guilds pending",
        ready.user.name,
        ready.guilds.len()
    );
}
