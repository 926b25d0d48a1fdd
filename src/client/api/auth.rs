use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::server::SessionUserDto,
};

/// Identifies the logged in user from the session cookie.
pub async fn get_user() -> Result<SessionUserDto, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}
