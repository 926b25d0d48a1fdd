//! Test factory for creating Serenity Guild objects.

use serenity::{all::Guild, model::event::GuildCreateEvent};

/// Owner used when a test does not set one explicitly.
const DEFAULT_OWNER_ID: u64 = 100000000000000000;

/// Builder for Serenity guilds with roles, channels, members and emojis.
///
/// The guild is assembled as a gateway JSON payload and deserialized, so the resulting
/// `Guild` has its maps keyed the same way a live cache entry would be.
pub struct TestGuildBuilder {
    guild_id: u64,
    name: String,
    icon_hash: Option<String>,
    owner_id: u64,
    member_count: u64,
    large: bool,
    roles: Vec<serde_json::Value>,
    channels: Vec<serde_json::Value>,
    members: Vec<serde_json::Value>,
    emojis: Vec<serde_json::Value>,
}

impl TestGuildBuilder {
    /// Creates a builder with no roles, channels, members or emojis.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID (snowflake)
    /// - `name` - Guild name
    pub fn new(guild_id: u64, name: &str) -> Self {
        Self {
            guild_id,
            name: name.to_string(),
            icon_hash: None,
            owner_id: DEFAULT_OWNER_ID,
            member_count: 100,
            large: false,
            roles: Vec::new(),
            channels: Vec::new(),
            members: Vec::new(),
            emojis: Vec::new(),
        }
    }

    /// Sets the icon hash, padded to Discord's 32 character format (34 for animated).
    pub fn icon_hash(mut self, icon_hash: Option<&str>) -> Self {
        self.icon_hash = icon_hash.map(|hash| {
            if hash.starts_with("a_") {
                format!("{:0<34}", hash)
            } else {
                format!("{:0<32}", hash)
            }
        });
        self
    }

    pub fn owner_id(mut self, owner_id: u64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn member_count(mut self, member_count: u64) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    /// Adds a role with no permissions.
    pub fn role(mut self, role_id: u64, name: &str) -> Self {
        let position = self.roles.len();
        self.roles.push(serde_json::json!({
            "id": role_id.to_string(),
            "guild_id": self.guild_id.to_string(),
            "name": name,
            "color": 0,
            "hoist": false,
            "icon": null,
            "unicode_emoji": null,
            "position": position,
            "permissions": "0",
            "managed": false,
            "mentionable": false,
        }));
        self
    }

    /// Adds a text channel.
    pub fn text_channel(self, channel_id: u64, name: &str) -> Self {
        self.channel(channel_id, name, 0)
    }

    /// Adds a voice channel.
    pub fn voice_channel(self, channel_id: u64, name: &str) -> Self {
        self.channel(channel_id, name, 2)
    }

    fn channel(mut self, channel_id: u64, name: &str, kind: u8) -> Self {
        let position = self.channels.len();
        self.channels.push(serde_json::json!({
            "id": channel_id.to_string(),
            "guild_id": self.guild_id.to_string(),
            "type": kind,
            "name": name,
            "position": position,
            "permission_overwrites": [],
            "nsfw": false,
            "parent_id": null,
            "topic": null,
            "last_message_id": null,
            "rate_limit_per_user": 0,
            "flags": 0,
        }));
        self
    }

    /// Adds a member with the given username and optional server nickname.
    pub fn member(mut self, user_id: u64, username: &str, nick: Option<&str>) -> Self {
        self.members.push(serde_json::json!({
            "guild_id": self.guild_id.to_string(),
            "user": {
                "id": user_id.to_string(),
                "username": username,
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": false,
            },
            "nick": nick,
            "avatar": null,
            "roles": [],
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
        }));
        self
    }

    /// Adds a custom emoji.
    pub fn emoji(mut self, emoji_id: u64, name: &str) -> Self {
        self.emojis.push(serde_json::json!({
            "id": emoji_id.to_string(),
            "name": name,
            "roles": [],
            "require_colons": true,
            "managed": false,
            "animated": false,
            "available": true,
        }));
        self
    }

    /// Deserializes the assembled payload into a Serenity `Guild`.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
    pub fn build(self) -> Guild {
        serde_json::from_value(self.payload())
            .expect("Failed to create test guild - invalid JSON structure")
    }

    /// Deserializes the assembled payload into a `GUILD_CREATE` gateway event.
    ///
    /// Feed it to `Cache::update` to put the guild in a real Serenity cache.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into the event (indicates invalid test data)
    pub fn build_create_event(self) -> GuildCreateEvent {
        serde_json::from_value(self.payload())
            .expect("Failed to create guild create event - invalid JSON structure")
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.guild_id.to_string(),
            "name": self.name,
            "icon": self.icon_hash,
            "icon_hash": self.icon_hash,
            "owner_id": self.owner_id.to_string(),
            "afk_timeout": 300,
            "verification_level": 0,
            "default_message_notifications": 0,
            "explicit_content_filter": 0,
            "roles": self.roles,
            "emojis": self.emojis,
            "stickers": [],
            "features": [],
            "mfa_level": 0,
            "system_channel_flags": 0,
            "premium_tier": 0,
            "premium_subscription_count": 0,
            "premium_progress_bar_enabled": false,
            "preferred_locale": "en-US",
            "nsfw_level": 0,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "large": self.large,
            "member_count": self.member_count,
            "voice_states": [],
            "channels": self.channels,
            "threads": [],
            "presences": [],
            "max_presences": 25000,
            "max_members": 100000,
            "unavailable": false,
            "members": self.members,
            "stage_instances": [],
            "guild_scheduled_events": [],
        })
    }
}

/// Creates a test Serenity Guild with no roles, channels or members.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    TestGuildBuilder::new(guild_id, name)
        .icon_hash(icon_hash)
        .build()
}
