//! Guild event handler.
//!
//! `guild_create` fires for every guild on startup and whenever the bot joins a new
//! guild. Serenity has already put the guild into the cache by the time the handler
//! runs; the handler seeds a default config for guilds that have none and requests
//! the full member list for large guilds, whose create payload only carries a subset.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{ChunkGuildFilter, Context, Guild};

use crate::server::service::guild_config::GuildConfigService;

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `db` - Database connection for seeding the config
/// - `ctx` - Discord context used to request member chunks
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, cached_members: {}, new: {}",
        guild.name,
        guild_id,
        guild.member_count,
        guild.members.len(),
        is_new.unwrap_or(false)
    );

    if let Err(e) = GuildConfigService::new(db).ensure_default(guild_id).await {
        tracing::error!("Failed to seed config for guild {}: {}", guild_id, e);
    }

    if guild.large {
        ctx.shard
            .chunk_guild(guild.id, None, false, ChunkGuildFilter::None, None);
    }
}
