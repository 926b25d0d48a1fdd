use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::Sentinel;

/// Expected request failures of the dashboard API.
///
/// Each variant maps onto a response sentinel. The variants carry context for the
/// server log only; the client never sees more than the sentinel literal.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A required body parameter is absent, null or empty.
    #[error("Missing required parameter '{0}'")]
    MissingParam(&'static str),

    /// A body parameter has the wrong type or an unusable value.
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParam {
        /// Name of the offending parameter
        param: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// No live session matches the supplied user and session IDs.
    #[error("No active session for user {0}")]
    SessionExpired(String),

    /// The guild is absent from the session snapshot, the live guild cache or the
    /// config store.
    #[error("Server {0} not found")]
    ServerNotFound(String),

    /// The bot is not on the guild or the user lacks the manage guild permission.
    #[error("User {user_id} lacks permission to manage server {guild_id}")]
    NoPermissions {
        /// User attempting the operation
        user_id: String,
        /// Guild the operation targets
        guild_id: String,
    },

    /// The config store rejected a write.
    #[error("Failed to save config for server {guild_id}: {source}")]
    SaveFailed {
        /// Guild whose config was being written
        guild_id: String,
        /// The underlying database error
        #[source]
        source: DbErr,
    },
}

impl DashboardError {
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            param,
            reason: reason.into(),
        }
    }

    pub fn sentinel(&self) -> Sentinel {
        match self {
            Self::MissingParam(_) => Sentinel::MissingParams,
            Self::InvalidParam { .. } => Sentinel::InvalidParams,
            Self::SessionExpired(_) => Sentinel::SessionExpired,
            Self::ServerNotFound(_) => Sentinel::ServerNotFound,
            Self::NoPermissions { .. } => Sentinel::NoPermissions,
            Self::SaveFailed { .. } => Sentinel::SaveFailed,
        }
    }
}

/// Converts dashboard errors into sentinel responses.
///
/// Always HTTP 200 with the sentinel literal as the body. Write failures are reported
/// at error level since they indicate a problem with the config store; everything else
/// is an ordinary rejection and logged at debug level.
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match &self {
            Self::SaveFailed { .. } => tracing::error!("{}", self),
            _ => tracing::debug!("Rejected dashboard request: {}", self),
        }

        sentinel_response(self.sentinel())
    }
}

/// Builds the HTTP 200 response carrying a sentinel body.
pub fn sentinel_response(sentinel: Sentinel) -> Response {
    (StatusCode::OK, sentinel.as_str()).into_response()
}
