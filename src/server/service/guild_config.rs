use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::{dashboard::DashboardError, AppError},
    model::guild_config::{GuildConfigParam, GuildConfigPatchParam},
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.find_by_guild_id(guild_id).await?)
    }

    /// Applies a patch to a guild's config and stores the result.
    ///
    /// A guild without a stored config is patched over the defaults. Concurrent saves are
    /// not coordinated; the last write wins.
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)` - The config as stored
    /// - `Err(DashboardError::SaveFailed)` - The config store rejected the write
    /// - `Err(AppError::DbErr)` - The current config could not be read
    pub async fn save(
        &self,
        guild_id: u64,
        patch: GuildConfigPatchParam,
    ) -> Result<GuildConfigParam, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let mut config = repo
            .find_by_guild_id(guild_id)
            .await?
            .unwrap_or_else(|| GuildConfigParam::default_for(guild_id));

        config.apply(patch);

        let stored = repo
            .upsert(&config)
            .await
            .map_err(|source| DashboardError::SaveFailed {
                guild_id: guild_id.to_string(),
                source,
            })?;

        tracing::info!("Saved config for guild {}", guild_id);

        Ok(stored)
    }

    /// Seeds the default config for a guild that does not have one yet.
    pub async fn ensure_default(&self, guild_id: u64) -> Result<(), AppError> {
        let repo = GuildConfigRepository::new(self.db);

        if repo.create_default_if_missing(guild_id).await? {
            tracing::info!("Created default config for guild {}", guild_id);
        }

        Ok(())
    }
}
