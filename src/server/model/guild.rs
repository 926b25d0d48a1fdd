use serenity::all::Guild;

use crate::model::guild::GuildInfoDto;

/// Summary of a guild read from the live guild cache.
///
/// Never persisted; built fresh for each request so counts reflect the current cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfoParam {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
    pub member_count: u64,
    pub large: bool,
    pub owner_id: u64,
    pub emoji_count: usize,
    pub channel_count: usize,
    pub role_count: usize,
}

impl GuildInfoParam {
    pub fn from_guild(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_hash: guild.icon.map(|hash| hash.to_string()),
            member_count: guild.member_count,
            large: guild.large,
            owner_id: guild.owner_id.get(),
            emoji_count: guild.emojis.len(),
            channel_count: guild.channels.len(),
            role_count: guild.roles.len(),
        }
    }

    pub fn into_dto(self) -> GuildInfoDto {
        GuildInfoDto {
            id: self.guild_id.to_string(),
            name: self.name,
            icon: self.icon_hash,
            member_count: self.member_count,
            large: self.large,
            owner_id: self.owner_id.to_string(),
            emoji_count: self.emoji_count,
            channel_count: self.channel_count,
            role_count: self.role_count,
        }
    }
}
