//! Session factory for writing dashboard session records into the session store.
//!
//! Sessions are issued by the external auth flow in production. Tests use this factory to
//! simulate that flow: the record carries the authenticated user ID and the snapshot of
//! servers the user administers, keyed the same way the auth flow writes them.

use std::collections::HashMap;

use time::{Duration, OffsetDateTime};
use tower_sessions::{
    session::{Id, Record},
    SessionStore,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{error::TestError, factory::helpers::next_id};

/// Session data key holding the authenticated user's Discord ID.
pub const SESSION_USER_KEY: &str = "auth:user";

/// Session data key holding the server snapshot taken at login.
pub const SESSION_SERVERS_KEY: &str = "auth:servers";

/// Factory for creating dashboard session records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{factory::session::SessionFactory, fixture};
///
/// let session_id = SessionFactory::new(store)
///     .user_id("42")
///     .server(fixture::session::managed_server("123"))
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    store: &'a SqliteStore,
    user_id: String,
    servers: Vec<serde_json::Value>,
    expires_in: Duration,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented counter value
    /// - servers: empty
    /// - expires_in: 7 days
    pub fn new(store: &'a SqliteStore) -> Self {
        Self {
            store,
            user_id: next_id().to_string(),
            servers: Vec::new(),
            expires_in: Duration::days(7),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Appends a server entry to the session's server snapshot.
    pub fn server(mut self, server: serde_json::Value) -> Self {
        self.servers.push(server);
        self
    }

    /// Sets how long from now the session stays valid. A negative duration writes an
    /// already expired record.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Writes the session record to the store.
    ///
    /// # Returns
    /// - `Ok(String)` - The session ID as the client would send it
    /// - `Err(TestError::SessionStore)` - Failed to write the record
    pub async fn build(self) -> Result<String, TestError> {
        let data = HashMap::from([
            (
                SESSION_USER_KEY.to_string(),
                serde_json::Value::String(self.user_id),
            ),
            (
                SESSION_SERVERS_KEY.to_string(),
                serde_json::Value::Array(self.servers),
            ),
        ]);

        let mut record = Record {
            id: Id::default(),
            data,
            expiry_date: OffsetDateTime::now_utc() + self.expires_in,
        };

        self.store.create(&mut record).await?;

        Ok(record.id.to_string())
    }
}

/// Creates a session for `user_id` that manages `guild_id`.
///
/// # Returns
/// - `Ok(String)` - The session ID
/// - `Err(TestError::SessionStore)` - Failed to write the record
pub async fn create_session(
    store: &SqliteStore,
    user_id: &str,
    guild_id: &str,
) -> Result<String, TestError> {
    SessionFactory::new(store)
        .user_id(user_id)
        .server(crate::fixture::session::managed_server(guild_id))
        .build()
        .await
}
