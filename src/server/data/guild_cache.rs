use serenity::all::{Guild, GuildId};
use serenity::cache::Cache;

/// Read access to the guilds the bot is currently a member of.
///
/// The production implementation is serenity's gateway cache. Lookups with an ID that
/// cannot be a guild ID return nothing rather than panicking.
pub trait GuildCache: Send + Sync {
    /// Whether the bot is on the guild.
    fn contains_guild(&self, guild_id: u64) -> bool;

    /// Runs `f` against the cached guild while the cache entry is borrowed.
    ///
    /// Returns `None` when the guild is not cached.
    fn with_guild<R>(&self, guild_id: u64, f: impl FnOnce(&Guild) -> R) -> Option<R>;
}

impl GuildCache for Cache {
    fn contains_guild(&self, guild_id: u64) -> bool {
        self.with_guild(guild_id, |_| ()).is_some()
    }

    fn with_guild<R>(&self, guild_id: u64, f: impl FnOnce(&Guild) -> R) -> Option<R> {
        // GuildId::new panics on zero
        if guild_id == 0 {
            return None;
        }

        let guild = self.guild(GuildId::new(guild_id))?;

        Some(f(&guild))
    }
}

#[cfg(test)]
impl GuildCache for std::collections::HashMap<u64, Guild> {
    fn contains_guild(&self, guild_id: u64) -> bool {
        self.contains_key(&guild_id)
    }

    fn with_guild<R>(&self, guild_id: u64, f: impl FnOnce(&Guild) -> R) -> Option<R> {
        self.get(&guild_id).map(f)
    }
}
