use serenity::all::{ChannelType, Guild};

use crate::server::{
    data::GuildCache,
    error::{dashboard::DashboardError, AppError},
    model::option::{SelectOptionParam, MAX_SEARCH_RESULTS},
    util::parse::parse_snowflake,
};

/// Searches a cached guild's members, roles and channels for the dashboard selectors.
pub struct SearchService<'a, C: GuildCache> {
    guild_cache: &'a C,
}

impl<'a, C: GuildCache> SearchService<'a, C> {
    pub fn new(guild_cache: &'a C) -> Self {
        Self { guild_cache }
    }

    /// Members whose user name, global name or nickname contains the query.
    pub fn users(&self, guild_id: u64, query: &str) -> Result<Vec<SelectOptionParam>, AppError> {
        let needle = query.to_lowercase();

        self.search(guild_id, |guild| {
            guild
                .members
                .values()
                .filter(|member| {
                    let user = &member.user;
                    [
                        Some(user.name.as_str()),
                        user.global_name.as_deref(),
                        member.nick.as_deref(),
                    ]
                    .into_iter()
                    .flatten()
                    .any(|name| name.to_lowercase().contains(&needle))
                })
                .map(|member| SelectOptionParam::new(member.user.id.get(), member.user.name.clone()))
                .collect()
        })
    }

    /// Roles whose name contains the query, excluding `@everyone`.
    pub fn roles(&self, guild_id: u64, query: &str) -> Result<Vec<SelectOptionParam>, AppError> {
        let needle = query.to_lowercase();

        self.search(guild_id, |guild| {
            guild
                .roles
                .values()
                // @everyone shares the guild's ID
                .filter(|role| role.id.get() != guild.id.get())
                .filter(|role| role.name.to_lowercase().contains(&needle))
                .map(|role| SelectOptionParam::new(role.id.get(), role.name.clone()))
                .collect()
        })
    }

    /// Text channels whose name contains the query, labelled `#name`.
    pub fn channels(&self, guild_id: u64, query: &str) -> Result<Vec<SelectOptionParam>, AppError> {
        let needle = query.trim_start_matches('#').to_lowercase();

        self.search(guild_id, |guild| {
            guild
                .channels
                .values()
                .filter(|channel| channel.kind == ChannelType::Text)
                .filter(|channel| channel.name.to_lowercase().contains(&needle))
                .map(|channel| {
                    SelectOptionParam::new(channel.id.get(), format!("#{}", channel.name))
                })
                .collect()
        })
    }

    /// Options for specific members, in label order. IDs of users that are not cached
    /// members of the guild are skipped.
    pub fn resolve_users(
        &self,
        guild_id: u64,
        user_ids: &[String],
    ) -> Result<Vec<SelectOptionParam>, AppError> {
        let ids: Vec<u64> = user_ids.iter().filter_map(|id| parse_snowflake(id)).collect();

        self.search(guild_id, |guild| {
            guild
                .members
                .values()
                .filter(|member| ids.contains(&member.user.id.get()))
                .map(|member| SelectOptionParam::new(member.user.id.get(), member.user.name.clone()))
                .collect()
        })
    }

    /// Runs a search against the cached guild, then sorts and caps the results.
    fn search(
        &self,
        guild_id: u64,
        find: impl FnOnce(&Guild) -> Vec<SelectOptionParam>,
    ) -> Result<Vec<SelectOptionParam>, AppError> {
        let Some(mut options) = self.guild_cache.with_guild(guild_id, find) else {
            return Err(DashboardError::ServerNotFound(guild_id.to_string()).into());
        };

        options.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        options.truncate(MAX_SEARCH_RESULTS);

        Ok(options)
    }
}
