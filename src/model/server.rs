use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    config::{GuildConfigDto, GuildConfigPatchDto},
    guild::GuildInfoDto,
};

/// Identifies a dashboard session: the Discord user ID plus the session ID issued at
/// login.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SessionUserDto {
    pub id: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ListServersDto {
    pub servers: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerInfoRequestDto {
    pub server: String,
    pub user: SessionUserDto,
}

/// Payload of a successful `info` request.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerInfoDto {
    pub config: GuildConfigDto,
    pub info: GuildInfoDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SaveChangesDto {
    pub user: SessionUserDto,
    /// Sections to replace. Absent sections keep their stored value.
    pub config: GuildConfigPatchDto,
    pub server: String,
}

/// Acknowledgement of a persisted `save-changes`, carrying the stored document.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SaveChangesAckDto {
    pub success: bool,
    pub config: GuildConfigDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_accepts_partial_config() {
        let request: SaveChangesDto = serde_json::from_value(serde_json::json!({
            "user": { "id": "42", "sessionID": "abc" },
            "config": { "Prefix": "?" },
            "server": "1",
        }))
        .unwrap();

        assert_eq!(request.config.prefix.as_deref(), Some("?"));
        assert!(request.config.channels.is_none());
    }
}
