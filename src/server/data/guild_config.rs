use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::guild_config::GuildConfigParam;

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the config of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfigParam))` - Config found
    /// - `Ok(None)` - The guild has no config
    /// - `Err(DbErr)` - Database error or a stored value could not be parsed
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(GuildConfigParam::from_entity)
            .transpose()
    }

    /// Inserts or replaces the config of a guild.
    ///
    /// Keyed by `guild_id`; an existing row has every column overwritten.
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)` - The stored config as read back from the database
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, config: &GuildConfigParam) -> Result<GuildConfigParam, DbErr> {
        let trusted_users: Vec<String> =
            config.trusted_users.iter().map(u64::to_string).collect();

        let model = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(config.guild_id.to_string()),
            prefix: ActiveValue::Set(config.prefix.clone()),
            trusted_users: ActiveValue::Set(serde_json::json!(trusted_users)),
            mute_role: ActiveValue::Set(config.mute_role.map(|id| id.to_string())),
            join_log_channel: ActiveValue::Set(config.join_log_channel.map(|id| id.to_string())),
            exit_log_channel: ActiveValue::Set(config.exit_log_channel.map(|id| id.to_string())),
            mod_log_channel: ActiveValue::Set(config.mod_log_channel.map(|id| id.to_string())),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::Prefix,
                    entity::guild_config::Column::TrustedUsers,
                    entity::guild_config::Column::MuteRole,
                    entity::guild_config::Column::JoinLogChannel,
                    entity::guild_config::Column::ExitLogChannel,
                    entity::guild_config::Column::ModLogChannel,
                    entity::guild_config::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildConfigParam::from_entity(model)
    }

    /// Inserts the default config for a guild unless one exists.
    ///
    /// # Returns
    /// - `Ok(true)` - A default config was created
    /// - `Ok(false)` - The guild already had a config
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_default_if_missing(&self, guild_id: u64) -> Result<bool, DbErr> {
        let default = GuildConfigParam::default_for(guild_id);

        let inserted = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(default.guild_id.to_string()),
            prefix: ActiveValue::Set(default.prefix),
            trusted_users: ActiveValue::Set(serde_json::json!([])),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }
}
