use serde::Deserialize;
use tower_sessions::session::Record;

use crate::server::error::internal::InternalError;

/// Session data key holding the authenticated user's Discord ID.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Session data key holding the server snapshot taken at login.
pub const SESSION_AUTH_SERVERS: &str = "auth:servers";

/// Permission flag required to manage a guild from the dashboard.
pub const MANAGE_GUILD: &str = "MANAGE_GUILD";

/// The `user` object clients send to identify their session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUserParam {
    /// Discord user ID.
    pub user_id: String,
    /// Session ID issued at login.
    pub session_id: String,
}

/// One guild from the snapshot the auth flow stored in the session at login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionServerParam {
    #[serde(rename = "id")]
    pub guild_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_bot_on_server: bool,
    #[serde(default)]
    pub permissions_flags: Vec<String>,
}

impl SessionServerParam {
    /// Whether the snapshot grants dashboard access: the bot must be on the guild and
    /// the user must hold `MANAGE_GUILD`.
    pub fn can_manage(&self) -> bool {
        self.is_bot_on_server && self.permissions_flags.iter().any(|f| f == MANAGE_GUILD)
    }
}

/// A live dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSessionParam {
    pub user_id: String,
    pub session_id: String,
    pub servers: Vec<SessionServerParam>,
}

impl DashboardSessionParam {
    /// Converts a session store record at the repository boundary.
    ///
    /// Records without an authenticated user are not dashboard sessions and yield
    /// `None`. A missing server snapshot is treated as empty.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardSessionParam))` - Record belongs to an authenticated user
    /// - `Ok(None)` - Record holds no authenticated user
    /// - `Err(InternalError::MalformedSession)` - Server snapshot has an unexpected shape
    pub fn from_record(record: Record) -> Result<Option<Self>, InternalError> {
        let session_id = record.id.to_string();
        let mut data = record.data;

        let user_id = match data.remove(SESSION_AUTH_USER_ID) {
            Some(serde_json::Value::String(id)) => id,
            Some(serde_json::Value::Number(id)) => id.to_string(),
            _ => return Ok(None),
        };

        let servers = match data.remove(SESSION_AUTH_SERVERS) {
            Some(value) => serde_json::from_value(value).map_err(|source| {
                InternalError::MalformedSession {
                    session_id: session_id.clone(),
                    source,
                }
            })?,
            None => Vec::new(),
        };

        Ok(Some(Self {
            user_id,
            session_id,
            servers,
        }))
    }

    /// Finds the snapshot entry for a guild.
    pub fn server(&self, guild_id: &str) -> Option<&SessionServerParam> {
        self.servers.iter().find(|s| s.guild_id == guild_id)
    }
}
