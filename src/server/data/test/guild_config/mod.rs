use crate::server::{data::guild_config::GuildConfigRepository, model::guild_config::GuildConfigParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_default_if_missing;
mod find_by_guild_id;
mod upsert;
