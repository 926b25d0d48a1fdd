use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::server::SessionUserDto,
    server::{
        error::{dashboard::DashboardError, AppError},
        middleware::session::AuthSession,
    },
};

pub static AUTH_TAG: &str = "auth";

/// GET /api/auth/user - Identify the caller's dashboard session
///
/// Reads the cookie session written at login and returns the user ID together with
/// the session ID, which the dashboard sends as `user` with every API request.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's user and session ID, or a sentinel: err-session-expired, err-internal-error", body = SessionUserDto),
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(user_id) = auth_session.get_user_id().await? else {
        return Err(DashboardError::SessionExpired("anonymous".to_string()).into());
    };

    let Some(session_id) = auth_session.session_id() else {
        return Err(DashboardError::SessionExpired(user_id).into());
    };

    Ok((
        StatusCode::OK,
        Json(SessionUserDto {
            id: user_id,
            session_id,
        }),
    ))
}
