use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::search::{ResolveUsersRequestDto, SearchRequestDto, SelectOptionDto},
    server::{
        error::AppError,
        middleware::auth::{GuildAccessGuard, Permission},
        model::{
            option::SelectOptionParam,
            request::{ResolveUsersParam, SearchParam},
        },
        service::search::SearchService,
        state::AppState,
        util::params::parse_body,
    },
};

pub static SEARCH_TAG: &str = "search";

/// Which of the guild's collections a search runs against.
enum SearchTarget {
    Users,
    Roles,
    Channels,
}

/// Shared body of the three search endpoints: parse, gate, search the live cache.
async fn search(
    state: AppState,
    body: Bytes,
    target: SearchTarget,
) -> Result<Vec<SelectOptionDto>, AppError> {
    let body = parse_body(&body)?;
    let param = SearchParam::from_body(&body)?;

    let guild = GuildAccessGuard::new(&state.session_store, &*state.guild_cache)
        .require(&param.user, &param.server, &[Permission::ManageGuild])
        .await?;

    let search_service = SearchService::new(&*state.guild_cache);
    let options = match target {
        SearchTarget::Users => search_service.users(guild.guild_id, &param.query)?,
        SearchTarget::Roles => search_service.roles(guild.guild_id, &param.query)?,
        SearchTarget::Channels => search_service.channels(guild.guild_id, &param.query)?,
    };

    Ok(options.into_iter().map(SelectOptionParam::into_dto).collect())
}

#[utoipa::path(
    post,
    path = "/api/users/search",
    tag = SEARCH_TAG,
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Members matching the query by name or nickname, or a sentinel as for server info", body = Vec<SelectOptionDto>),
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let options = search(state, body, SearchTarget::Users).await?;

    Ok((StatusCode::OK, Json(options)))
}

#[utoipa::path(
    post,
    path = "/api/roles/search",
    tag = SEARCH_TAG,
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Roles matching the query, or a sentinel as for server info", body = Vec<SelectOptionDto>),
    ),
)]
pub async fn search_roles(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let options = search(state, body, SearchTarget::Roles).await?;

    Ok((StatusCode::OK, Json(options)))
}

#[utoipa::path(
    post,
    path = "/api/channels/search",
    tag = SEARCH_TAG,
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Text channels matching the query, or a sentinel as for server info", body = Vec<SelectOptionDto>),
    ),
)]
pub async fn search_channels(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let options = search(state, body, SearchTarget::Channels).await?;

    Ok((StatusCode::OK, Json(options)))
}

#[utoipa::path(
    post,
    path = "/api/users/info",
    tag = SEARCH_TAG,
    request_body = ResolveUsersRequestDto,
    responses(
        (status = 200, description = "Options for the given member IDs, or a sentinel as for server info", body = Vec<SelectOptionDto>),
    ),
)]
pub async fn resolve_users(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body)?;
    let param = ResolveUsersParam::from_body(&body)?;

    let guild = GuildAccessGuard::new(&state.session_store, &*state.guild_cache)
        .require(&param.user, &param.server, &[Permission::ManageGuild])
        .await?;

    let options: Vec<SelectOptionDto> = SearchService::new(&*state.guild_cache)
        .resolve_users(guild.guild_id, &param.users)?
        .into_iter()
        .map(SelectOptionParam::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(options)))
}
