use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        config::{
            ChannelsConfigDto, GuildConfigDto, GuildConfigPatchDto, RolesConfigDto,
            UsersConfigDto,
        },
        guild::GuildInfoDto,
        search::{ResolveUsersRequestDto, SearchRequestDto, SelectOptionDto},
        server::{
            ListServersDto, SaveChangesAckDto, SaveChangesDto, ServerInfoDto,
            ServerInfoRequestDto, SessionUserDto,
        },
    },
    server::{
        controller::{
            auth::{self, get_user},
            search::{self, resolve_users, search_channels, search_roles, search_users},
            server::{self, get_server_info, list_servers, save_changes},
        },
        middleware::rate_limit::{ip_rate_limit_middleware, IpRateLimiter},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_user,
        server::list_servers,
        server::get_server_info,
        server::save_changes,
        search::search_users,
        search::search_roles,
        search::search_channels,
        search::resolve_users,
    ),
    components(schemas(
        ChannelsConfigDto,
        GuildConfigDto,
        GuildConfigPatchDto,
        GuildInfoDto,
        ListServersDto,
        ResolveUsersRequestDto,
        RolesConfigDto,
        SaveChangesAckDto,
        SaveChangesDto,
        SearchRequestDto,
        SelectOptionDto,
        ServerInfoDto,
        ServerInfoRequestDto,
        SessionUserDto,
        UsersConfigDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Dashboard session lookup"),
        (name = server::SERVER_TAG, description = "Guild list, info and config"),
        (name = search::SEARCH_TAG, description = "Member, role and channel search"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// The dashboard endpoints share one rate limit; CORS wraps everything so preflight
/// requests and rate limited responses still carry the allowed origin.
pub fn router(rate_limiter: IpRateLimiter, cors: CorsLayer) -> Router<AppState> {
    let dashboard = Router::new()
        .route("/api/servers/list", get(list_servers).post(list_servers))
        .route("/api/servers/info", get(get_server_info).post(get_server_info))
        .route("/api/servers/save-changes", post(save_changes))
        .route("/api/users/search", post(search_users))
        .route("/api/users/info", post(resolve_users))
        .route("/api/roles/search", post(search_roles))
        .route("/api/channels/search", post(search_channels))
        .layer(from_fn_with_state(rate_limiter, ip_rate_limit_middleware));

    Router::new()
        .route("/api/auth/user", get(get_user))
        .merge(dashboard)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
