use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Summary of a guild taken from the bot's live guild cache.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuildInfoDto {
    pub id: String,
    pub name: String,
    /// Icon hash, used to build the CDN URL.
    pub icon: Option<String>,
    pub member_count: u64,
    pub large: bool,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    pub emoji_count: usize,
    pub channel_count: usize,
    pub role_count: usize,
}

impl GuildInfoDto {
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }
}
