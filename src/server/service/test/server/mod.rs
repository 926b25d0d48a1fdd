use super::cache_of;
use crate::{
    model::api::Sentinel,
    server::{error::AppError, model::guild_config::GuildConfigPatchParam, service::server::ServerService},
};
use test_utils::{builder::TestBuilder, factory, serenity::TestGuildBuilder};

mod info;
mod list;
mod save_changes;

fn sentinel_of<T: std::fmt::Debug>(result: Result<T, AppError>) -> Sentinel {
    match result {
        Err(AppError::DashboardErr(err)) => err.sentinel(),
        other => panic!("expected a dashboard error, got {:?}", other),
    }
}
