use std::str::FromStr;

use tower_sessions::{session::Id, SessionStore};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    error::AppError,
    model::session::{DashboardSessionParam, SessionUserParam},
};

/// Read-only access to dashboard sessions written by the auth flow.
///
/// A session is addressed by the pair of user ID and session ID. The store is keyed by
/// session ID alone, so the user ID held in the record must match as well.
pub struct DashboardSessionRepository<'a> {
    store: &'a SqliteStore,
}

impl<'a> DashboardSessionRepository<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Finds a live session for the given user.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardSessionParam))` - Session exists, has not expired and belongs
    ///   to the user
    /// - `Ok(None)` - Unknown or malformed session ID, expired session, or a session that
    ///   belongs to another user
    /// - `Err(AppError)` - Session store error or unreadable server snapshot
    pub async fn find(
        &self,
        user: &SessionUserParam,
    ) -> Result<Option<DashboardSessionParam>, AppError> {
        let Ok(id) = Id::from_str(&user.session_id) else {
            return Ok(None);
        };

        let Some(record) = self.store.load(&id).await? else {
            return Ok(None);
        };

        let session = DashboardSessionParam::from_record(record)?;

        Ok(session.filter(|s| s.user_id == user.user_id))
    }
}
