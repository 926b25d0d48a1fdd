use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    data::{session::DashboardSessionRepository, GuildCache},
    error::{dashboard::DashboardError, AppError},
    model::session::{DashboardSessionParam, SessionUserParam},
    util::parse::parse_snowflake,
};

pub enum Permission {
    /// The bot is on the guild and the user holds `MANAGE_GUILD` there.
    ManageGuild,
}

/// A guild the caller has been cleared to work on.
#[derive(Debug)]
pub struct AuthorizedGuild {
    pub guild_id: u64,
    pub session: DashboardSessionParam,
}

/// Gate shared by every endpoint that reads or writes a guild's config.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. A live session matching the user and session ID, else `err-session-expired`
/// 2. The guild in the session's server snapshot, else `err-server-not-found`
/// 3. The requested permissions on that snapshot entry, else `err-no-permissions`
/// 4. The guild in the bot's live guild cache, else `err-server-not-found`
pub struct GuildAccessGuard<'a, C: GuildCache> {
    session_store: &'a SqliteStore,
    guild_cache: &'a C,
}

impl<'a, C: GuildCache> GuildAccessGuard<'a, C> {
    pub fn new(session_store: &'a SqliteStore, guild_cache: &'a C) -> Self {
        Self {
            session_store,
            guild_cache,
        }
    }

    pub async fn require(
        &self,
        user: &SessionUserParam,
        server: &str,
        permissions: &[Permission],
    ) -> Result<AuthorizedGuild, AppError> {
        let session_repo = DashboardSessionRepository::new(self.session_store);

        let Some(session) = session_repo.find(user).await? else {
            return Err(DashboardError::SessionExpired(user.user_id.clone()).into());
        };

        let Some(entry) = session.server(server) else {
            return Err(DashboardError::ServerNotFound(server.to_string()).into());
        };

        for permission in permissions {
            match permission {
                Permission::ManageGuild => {
                    if !entry.can_manage() {
                        return Err(DashboardError::NoPermissions {
                            user_id: user.user_id.clone(),
                            guild_id: server.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        let Some(guild_id) = parse_snowflake(server) else {
            return Err(DashboardError::ServerNotFound(server.to_string()).into());
        };

        if !self.guild_cache.contains_guild(guild_id) {
            return Err(DashboardError::ServerNotFound(server.to_string()).into());
        }

        Ok(AuthorizedGuild { guild_id, session })
    }
}

#[cfg(test)]
mod test;
