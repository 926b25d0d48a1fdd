//! In-memory guild config models.

use chrono::Utc;

/// Creates a guild config model with default values without touching a database.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the config belongs to
pub fn entity(guild_id: &str) -> entity::guild_config::Model {
    entity::guild_config::Model {
        id: 1,
        guild_id: guild_id.to_string(),
        prefix: "!".to_string(),
        trusted_users: serde_json::json!([]),
        mute_role: None,
        join_log_channel: None,
        exit_log_channel: None,
        mod_log_channel: None,
        updated_at: Utc::now(),
    }
}
