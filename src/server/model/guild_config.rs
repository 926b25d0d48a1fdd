use sea_orm::DbErr;

use crate::{
    model::config::{
        ChannelsConfigDto, GuildConfigDto, GuildConfigPatchDto, RolesConfigDto, UsersConfigDto,
    },
    server::{error::dashboard::DashboardError, util::parse::parse_snowflake},
};

/// Command prefix given to guilds that have never saved a config.
pub const DEFAULT_PREFIX: &str = "!";

/// Longest prefix accepted from the dashboard.
pub const MAX_PREFIX_LENGTH: usize = 16;

/// A guild's bot configuration.
///
/// Used by the service layer to work with configs without depending on the database
/// entity. IDs are parsed at the repository boundary so the rest of the server only
/// deals with well formed snowflakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfigParam {
    pub guild_id: u64,
    pub prefix: String,
    /// Users allowed to run trusted-only commands, in the order they were added.
    pub trusted_users: Vec<u64>,
    pub mute_role: Option<u64>,
    pub join_log_channel: Option<u64>,
    pub exit_log_channel: Option<u64>,
    pub mod_log_channel: Option<u64>,
}

impl GuildConfigParam {
    /// Config a guild starts out with.
    pub fn default_for(guild_id: u64) -> Self {
        Self {
            guild_id,
            prefix: DEFAULT_PREFIX.to_string(),
            trusted_users: Vec::new(),
            mute_role: None,
            join_log_channel: None,
            exit_log_channel: None,
            mod_log_channel: None,
        }
    }

    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - A stored ID could not be parsed or the trusted user list
    ///   is not an array of IDs
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, DbErr> {
        let guild_id = parse_stored_id("guild_id", &entity.guild_id)?;

        let trusted: Vec<String> = serde_json::from_value(entity.trusted_users)
            .map_err(|e| DbErr::Custom(format!("Failed to parse trusted_users: {}", e)))?;
        let trusted_users = trusted
            .iter()
            .map(|id| parse_stored_id("trusted_users", id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guild_id,
            prefix: entity.prefix,
            trusted_users,
            mute_role: parse_stored_opt("mute_role", entity.mute_role)?,
            join_log_channel: parse_stored_opt("join_log_channel", entity.join_log_channel)?,
            exit_log_channel: parse_stored_opt("exit_log_channel", entity.exit_log_channel)?,
            mod_log_channel: parse_stored_opt("mod_log_channel", entity.mod_log_channel)?,
        })
    }

    /// Replaces every section named by the patch.
    pub fn apply(&mut self, patch: GuildConfigPatchParam) {
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
        if let Some(trusted_users) = patch.trusted_users {
            self.trusted_users = trusted_users;
        }
        if let Some(mute_role) = patch.mute_role {
            self.mute_role = mute_role;
        }
        if let Some(channels) = patch.log_channels {
            self.join_log_channel = channels.join;
            self.exit_log_channel = channels.exit;
            self.mod_log_channel = channels.moderation;
        }
    }

    /// Converts the param model to the document layout sent to the dashboard.
    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            server_id: self.guild_id.to_string(),
            prefix: self.prefix,
            users: UsersConfigDto {
                trusted: self.trusted_users.iter().map(u64::to_string).collect(),
            },
            roles: RolesConfigDto {
                mute_role: self.mute_role.map(|id| id.to_string()),
            },
            channels: ChannelsConfigDto {
                join_log: self.join_log_channel.map(|id| id.to_string()),
                exit_log: self.exit_log_channel.map(|id| id.to_string()),
                mod_log: self.mod_log_channel.map(|id| id.to_string()),
            },
        }
    }
}

fn parse_stored_id(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

fn parse_stored_opt(column: &str, value: Option<String>) -> Result<Option<u64>, DbErr> {
    value.map(|v| parse_stored_id(column, &v)).transpose()
}

/// Log channel section of a patch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogChannelsParam {
    pub join: Option<u64>,
    pub exit: Option<u64>,
    pub moderation: Option<u64>,
}

/// Validated `save-changes` patch. `None` leaves the stored section as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuildConfigPatchParam {
    pub prefix: Option<String>,
    pub trusted_users: Option<Vec<u64>>,
    pub mute_role: Option<Option<u64>>,
    pub log_channels: Option<LogChannelsParam>,
}

impl GuildConfigPatchParam {
    /// Validates a patch received from the dashboard.
    ///
    /// Rejects an empty or overlong prefix and any ID that is not a snowflake. Duplicate
    /// trusted users are collapsed, keeping the first occurrence.
    pub fn from_dto(dto: GuildConfigPatchDto) -> Result<Self, DashboardError> {
        let prefix = match dto.prefix {
            Some(prefix) => {
                let prefix = prefix.trim().to_string();
                if prefix.is_empty() {
                    return Err(DashboardError::invalid("config", "Prefix must not be empty"));
                }
                if prefix.chars().count() > MAX_PREFIX_LENGTH {
                    return Err(DashboardError::invalid(
                        "config",
                        format!("Prefix is longer than {} characters", MAX_PREFIX_LENGTH),
                    ));
                }
                Some(prefix)
            }
            None => None,
        };

        let trusted_users = match dto.users {
            Some(users) => {
                let mut ids: Vec<u64> = Vec::with_capacity(users.trusted.len());
                for raw in &users.trusted {
                    let id = patch_id("Users.Trusted", raw)?;
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                Some(ids)
            }
            None => None,
        };

        let mute_role = dto
            .roles
            .map(|roles| patch_opt("Roles.MuteRole", roles.mute_role))
            .transpose()?;

        let log_channels = dto
            .channels
            .map(|channels| {
                Ok::<_, DashboardError>(LogChannelsParam {
                    join: patch_opt("Channels.JoinLog", channels.join_log)?,
                    exit: patch_opt("Channels.ExitLog", channels.exit_log)?,
                    moderation: patch_opt("Channels.ModLog", channels.mod_log)?,
                })
            })
            .transpose()?;

        Ok(Self {
            prefix,
            trusted_users,
            mute_role,
            log_channels,
        })
    }

    /// Parses and validates the raw `config` body parameter.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DashboardError> {
        if !value.is_object() {
            return Err(DashboardError::invalid("config", "expected an object"));
        }

        let dto: GuildConfigPatchDto = serde_json::from_value(value.clone())
            .map_err(|e| DashboardError::invalid("config", e.to_string()))?;

        Self::from_dto(dto)
    }
}

fn patch_id(field: &str, raw: &str) -> Result<u64, DashboardError> {
    parse_snowflake(raw)
        .ok_or_else(|| DashboardError::invalid("config", format!("{} is not an ID: '{}'", field, raw)))
}

/// An empty string clears the value, the same as `null`.
fn patch_opt(field: &str, raw: Option<String>) -> Result<Option<u64>, DashboardError> {
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => patch_id(field, raw).map(Some),
    }
}
