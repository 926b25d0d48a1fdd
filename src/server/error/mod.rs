//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into sentinel responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`
//! for automatic error handling in API endpoints.

pub mod config;
pub mod dashboard;
pub mod internal;

use axum::response::{IntoResponse, Response};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::Sentinel,
    server::error::{
        config::ConfigError,
        dashboard::{sentinel_response, DashboardError},
        internal::InternalError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Expected
/// request failures live in `DashboardError` and map to their own sentinel; every other
/// variant is unexpected, gets reported, and is masked as `err-internal-error`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Expected request failure.
    ///
    /// Delegates to `DashboardError::into_response()` for the sentinel mapping.
    #[error(transparent)]
    DashboardErr(#[from] DashboardError),

    /// Internal inconsistency, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cookie session operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session store backend error.
    #[error(transparent)]
    SessionStoreErr(#[from] tower_sessions::session_store::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Dashboard errors produce their own sentinel. Anything else is reported through
/// `report_error` and answered with `err-internal-error` so that no detail leaks to the
/// client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::DashboardErr(err) => err.into_response(),
            err => {
                report_error(&err);
                sentinel_response(Sentinel::InternalError)
            }
        }
    }
}

/// Out-of-band reporter for unexpected errors.
///
/// Logs the full error chain for operators.
pub fn report_error(err: &(dyn std::error::Error + 'static)) {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    tracing::error!("{}", message);
}
