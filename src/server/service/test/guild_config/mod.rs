use crate::{
    model::api::Sentinel,
    server::{
        error::AppError,
        model::guild_config::{GuildConfigParam, GuildConfigPatchParam},
        service::guild_config::GuildConfigService,
    },
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure_default;
mod save;
