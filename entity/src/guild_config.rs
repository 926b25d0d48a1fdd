use sea_orm::entity::prelude::*;

/// Per-guild bot configuration document.
///
/// One row per Discord guild. Snowflake IDs are stored as strings, matching the
/// representation used by the dashboard API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub prefix: String,
    /// JSON array of trusted user IDs.
    pub trusted_users: Json,
    pub mute_role: Option<String>,
    pub join_log_channel: Option<String>,
    pub exit_log_channel: Option<String>,
    pub mod_log_channel: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
