use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::server::{
        ListServersDto, SaveChangesAckDto, SaveChangesDto, ServerInfoDto, ServerInfoRequestDto,
    },
    server::{
        error::AppError,
        middleware::auth::{GuildAccessGuard, Permission},
        model::request::{ListServersParam, SaveChangesParam, ServerInfoParam},
        service::server::ServerService,
        state::AppState,
        util::params::parse_body,
    },
};

pub static SERVER_TAG: &str = "server";

/// POST /api/servers/list - Filter guild IDs down to the ones the bot is on
///
/// Also routed for GET with the same JSON body.
#[utoipa::path(
    post,
    path = "/api/servers/list",
    tag = SERVER_TAG,
    request_body = ListServersDto,
    responses(
        (status = 200, description = "IDs of the given guilds the bot is on, in request order, or a sentinel: err-missing-params, err-invalid-params, err-rate-limit, err-internal-error", body = Vec<String>),
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body)?;
    let param = ListServersParam::from_body(&body)?;

    let servers = ServerService::new(&state.db, &*state.guild_cache).list(param.servers);

    Ok((StatusCode::OK, Json(servers)))
}

/// POST /api/servers/info - Stored config and live info for a managed guild
///
/// Also routed for GET with the same JSON body. Requires a live session whose
/// snapshot grants MANAGE_GUILD on the guild.
#[utoipa::path(
    post,
    path = "/api/servers/info",
    tag = SERVER_TAG,
    request_body = ServerInfoRequestDto,
    responses(
        (status = 200, description = "Stored config and live guild info, or a sentinel: err-missing-params, err-invalid-params, err-session-expired, err-server-not-found, err-no-permissions, err-rate-limit, err-internal-error", body = ServerInfoDto),
    ),
)]
pub async fn get_server_info(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body)?;
    let param = ServerInfoParam::from_body(&body)?;

    let guild = GuildAccessGuard::new(&state.session_store, &*state.guild_cache)
        .require(&param.user, &param.server, &[Permission::ManageGuild])
        .await?;

    let (config, info) = ServerService::new(&state.db, &*state.guild_cache)
        .info(guild.guild_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServerInfoDto {
            config: config.into_dto(),
            info: info.into_dto(),
        }),
    ))
}

/// POST /api/servers/save-changes - Apply a partial config to a managed guild
#[utoipa::path(
    post,
    path = "/api/servers/save-changes",
    tag = SERVER_TAG,
    request_body = SaveChangesDto,
    responses(
        (status = 200, description = "Stored config after applying the patch, or a sentinel: err-missing-params, err-invalid-params, err-session-expired, err-server-not-found, err-no-permissions, err-save-failed, err-rate-limit, err-internal-error", body = SaveChangesAckDto),
    ),
)]
pub async fn save_changes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body)?;
    let param = SaveChangesParam::from_body(&body)?;

    let guild = GuildAccessGuard::new(&state.session_store, &*state.guild_cache)
        .require(&param.user, &param.server, &[Permission::ManageGuild])
        .await?;

    let config = ServerService::new(&state.db, &*state.guild_cache)
        .save_changes(guild.guild_id, param.patch)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SaveChangesAckDto {
            success: true,
            config: config.into_dto(),
        }),
    ))
}

