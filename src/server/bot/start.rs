use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    cache::Cache,
};

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client.
///
/// The client is created but not connected, so its cache can be handed to the API
/// before the gateway connection starts filling it.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection used to seed configs for new guilds
///
/// # Returns
/// - `Ok((Client, Arc<Cache>))` - Client ready for `start_bot` and its guild cache
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Cache>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db))
        .await?;

    let cache = client.cache.clone();

    Ok((client, cache))
}

/// Connects the bot to the gateway.
///
/// Blocks until the connection shuts down, so it should be run inside `tokio::spawn`.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
