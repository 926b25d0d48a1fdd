use sea_orm::DatabaseConnection;

use crate::server::{
    data::GuildCache,
    error::{dashboard::DashboardError, AppError},
    model::{
        guild::GuildInfoParam,
        guild_config::{GuildConfigParam, GuildConfigPatchParam},
    },
    service::guild_config::GuildConfigService,
    util::parse::parse_snowflake,
};

/// Operations behind the `/api/servers` endpoints.
pub struct ServerService<'a, C: GuildCache> {
    db: &'a DatabaseConnection,
    guild_cache: &'a C,
}

impl<'a, C: GuildCache> ServerService<'a, C> {
    pub fn new(db: &'a DatabaseConnection, guild_cache: &'a C) -> Self {
        Self { db, guild_cache }
    }

    /// Keeps the guilds the bot is on, in input order.
    ///
    /// IDs that are not snowflakes can never match a guild and are dropped.
    pub fn list(&self, servers: Vec<String>) -> Vec<String> {
        servers
            .into_iter()
            .filter(|server| {
                parse_snowflake(server).is_some_and(|id| self.guild_cache.contains_guild(id))
            })
            .collect()
    }

    /// Reads a guild's live info and stored config.
    ///
    /// The guild is resolved from the cache first; either piece missing yields
    /// `err-server-not-found` with no partial payload.
    pub async fn info(&self, guild_id: u64) -> Result<(GuildConfigParam, GuildInfoParam), AppError> {
        let Some(info) = self
            .guild_cache
            .with_guild(guild_id, GuildInfoParam::from_guild)
        else {
            return Err(DashboardError::ServerNotFound(guild_id.to_string()).into());
        };

        let config_service = GuildConfigService::new(self.db);

        let Some(config) = config_service.get(guild_id).await? else {
            return Err(DashboardError::ServerNotFound(guild_id.to_string()).into());
        };

        Ok((config, info))
    }

    pub async fn save_changes(
        &self,
        guild_id: u64,
        patch: GuildConfigPatchParam,
    ) -> Result<GuildConfigParam, AppError> {
        GuildConfigService::new(self.db).save(guild_id, patch).await
    }
}
