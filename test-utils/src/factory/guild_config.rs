//! Guild config factory for creating test configuration rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test guild configuration rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .prefix("?")
///     .trusted_users(vec!["1".to_string()])
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    prefix: String,
    trusted_users: Vec<String>,
    mute_role: Option<String>,
    join_log_channel: Option<String>,
    exit_log_channel: Option<String>,
    mod_log_channel: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented counter value
    /// - prefix: `"!"`
    /// - no trusted users, mute role or log channels
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildConfigFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            prefix: "!".to_string(),
            trusted_users: Vec::new(),
            mute_role: None,
            join_log_channel: None,
            exit_log_channel: None,
            mod_log_channel: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn trusted_users(mut self, trusted_users: Vec<String>) -> Self {
        self.trusted_users = trusted_users;
        self
    }

    pub fn mute_role(mut self, mute_role: Option<String>) -> Self {
        self.mute_role = mute_role;
        self
    }

    pub fn join_log_channel(mut self, channel_id: Option<String>) -> Self {
        self.join_log_channel = channel_id;
        self
    }

    pub fn exit_log_channel(mut self, channel_id: Option<String>) -> Self {
        self.exit_log_channel = channel_id;
        self
    }

    pub fn mod_log_channel(mut self, channel_id: Option<String>) -> Self {
        self.mod_log_channel = channel_id;
        self
    }

    /// Builds and inserts the guild config entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created config entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            prefix: ActiveValue::Set(self.prefix),
            trusted_users: ActiveValue::Set(serde_json::json!(self.trusted_users)),
            mute_role: ActiveValue::Set(self.mute_role),
            join_log_channel: ActiveValue::Set(self.join_log_channel),
            exit_log_channel: ActiveValue::Set(self.exit_log_channel),
            mod_log_channel: ActiveValue::Set(self.mod_log_channel),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values for the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the config belongs to
///
/// # Returns
/// - `Ok(entity::guild_config::Model)` - Created config entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).guild_id(guild_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_config_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = create_guild_config(db, "123456789").await?;

        assert_eq!(config.guild_id, "123456789");
        assert_eq!(config.prefix, "!");
        assert_eq!(config.trusted_users, serde_json::json!([]));
        assert!(config.mute_role.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_config_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = GuildConfigFactory::new(db)
            .prefix("?")
            .trusted_users(vec!["111".to_string()])
            .mod_log_channel(Some("222".to_string()))
            .build()
            .await?;

        assert_eq!(config.prefix, "?");
        assert_eq!(config.trusted_users, serde_json::json!(["111"]));
        assert_eq!(config.mod_log_channel, Some("222".to_string()));

        Ok(())
    }
}
