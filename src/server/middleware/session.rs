//! Type-safe wrapper around the caller's cookie session.
//!
//! Sessions are issued by the external login flow, which stores the user's Discord ID
//! under `auth:user`. The dashboard only reads it back, together with the session ID,
//! to build the `user` object it sends with every API request.

use tower_sessions::Session;

use crate::server::{error::AppError, model::session::SESSION_AUTH_USER_ID};

/// Authentication session access.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_ID).await?)
    }

    /// ID of the stored session record, `None` until the session has been saved.
    pub fn session_id(&self) -> Option<String> {
        self.session.id().map(|id| id.to_string())
    }
}
