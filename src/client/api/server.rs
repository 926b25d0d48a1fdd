use crate::{
    client::{api::helper::post_json, model::error::ApiError},
    model::{
        config::GuildConfigDto,
        server::{
            SaveChangesAckDto, SaveChangesDto, ServerInfoDto, ServerInfoRequestDto,
            SessionUserDto,
        },
    },
};

pub async fn get_server_info(
    guild_id: u64,
    user: &SessionUserDto,
) -> Result<ServerInfoDto, ApiError> {
    let payload = ServerInfoRequestDto {
        server: guild_id.to_string(),
        user: user.clone(),
    };

    post_json("/api/servers/info", &payload).await
}

pub async fn save_changes(
    guild_id: u64,
    user: &SessionUserDto,
    config: GuildConfigDto,
) -> Result<SaveChangesAckDto, ApiError> {
    let payload = SaveChangesDto {
        user: user.clone(),
        config: config.into(),
        server: guild_id.to_string(),
    };

    post_json("/api/servers/save-changes", &payload).await
}
