//! Server snapshot entries as the auth flow stores them in a session.

/// The Discord permission flag that grants dashboard access.
pub const MANAGE_GUILD: &str = "MANAGE_GUILD";

/// Builds a server snapshot entry.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `is_bot_on_server` - Whether the bot was on the server at login
/// - `flags` - Permission flag names the user holds on the server
pub fn server(guild_id: &str, is_bot_on_server: bool, flags: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": guild_id,
        "name": format!("Guild {}", guild_id),
        "isBotOnServer": is_bot_on_server,
        "permissionsFlags": flags,
    })
}

/// A server the user manages and the bot is on.
pub fn managed_server(guild_id: &str) -> serde_json::Value {
    server(guild_id, true, &["VIEW_CHANNEL", MANAGE_GUILD])
}

/// A server the bot is on but where the user lacks `MANAGE_GUILD`.
pub fn member_server(guild_id: &str) -> serde_json::Value {
    server(guild_id, true, &["VIEW_CHANNEL", "SEND_MESSAGES"])
}

/// A server the user manages but the bot has not joined.
pub fn botless_server(guild_id: &str) -> serde_json::Value {
    server(guild_id, false, &[MANAGE_GUILD])
}
