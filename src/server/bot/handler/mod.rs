use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Ready};
use serenity::async_trait;

pub mod guild;
pub mod ready;

/// Discord bot event handler
///
/// Cache maintenance is done by serenity itself; the handler only reacts to events
/// that need a database write or a log line.
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }
}
