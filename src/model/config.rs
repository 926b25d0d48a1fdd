use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A guild's bot configuration document as exchanged with the dashboard.
///
/// Field names follow the stored document layout (`Prefix`, `Users.Trusted`, ...).
/// Equality is structural, so two documents compare equal only if every nested
/// section matches.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct GuildConfigDto {
    #[serde(rename = "ServerID")]
    pub server_id: String,
    pub prefix: String,
    #[serde(default)]
    pub users: UsersConfigDto,
    #[serde(default)]
    pub roles: RolesConfigDto,
    #[serde(default)]
    pub channels: ChannelsConfigDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct UsersConfigDto {
    /// User IDs allowed to run trusted-only commands.
    #[serde(default)]
    pub trusted: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct RolesConfigDto {
    #[serde(default)]
    pub mute_role: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct ChannelsConfigDto {
    #[serde(default)]
    pub join_log: Option<String>,
    #[serde(default)]
    pub exit_log: Option<String>,
    #[serde(default)]
    pub mod_log: Option<String>,
}

/// Partial configuration accepted by `save-changes`.
///
/// Each section that is present replaces the stored section; absent sections are
/// left untouched. `ServerID` is not part of a patch.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct GuildConfigPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<UsersConfigDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<RolesConfigDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<ChannelsConfigDto>,
}

impl From<GuildConfigDto> for GuildConfigPatchDto {
    fn from(config: GuildConfigDto) -> Self {
        Self {
            prefix: Some(config.prefix),
            users: Some(config.users),
            roles: Some(config.roles),
            channels: Some(config.channels),
        }
    }
}
