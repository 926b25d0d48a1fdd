use crate::{
    client::{api::helper::post_json, model::error::ApiError},
    model::{
        lookup::LookupKind,
        search::{ResolveUsersRequestDto, SearchRequestDto, SelectOptionDto},
        server::SessionUserDto,
    },
};

/// Runs one of the member, role or channel searches.
pub async fn search(
    kind: LookupKind,
    query: &str,
    guild_id: u64,
    user: &SessionUserDto,
) -> Result<Vec<SelectOptionDto>, ApiError> {
    let payload = SearchRequestDto {
        query: query.to_string(),
        server: guild_id.to_string(),
        user: user.clone(),
    };

    post_json(kind.endpoint(), &payload).await
}

/// Fetches labels for already selected users.
pub async fn resolve_users(
    users: Vec<String>,
    guild_id: u64,
    user: &SessionUserDto,
) -> Result<Vec<SelectOptionDto>, ApiError> {
    let payload = ResolveUsersRequestDto {
        users,
        server: guild_id.to_string(),
        user: user.clone(),
    };

    post_json("/api/users/info", &payload).await
}
