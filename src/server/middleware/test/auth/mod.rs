use std::collections::HashMap;

use crate::{
    model::api::Sentinel,
    server::{
        error::AppError,
        middleware::auth::{GuildAccessGuard, Permission},
        model::session::SessionUserParam,
    },
};
use serenity::all::Guild;
use test_utils::{
    builder::TestBuilder, factory::session::SessionFactory, fixture, serenity::create_test_guild,
};

mod require;

fn user(user_id: &str, session_id: &str) -> SessionUserParam {
    SessionUserParam {
        user_id: user_id.to_string(),
        session_id: session_id.to_string(),
    }
}

fn cache_with(guild_ids: &[u64]) -> HashMap<u64, Guild> {
    guild_ids
        .iter()
        .map(|id| (*id, create_test_guild(*id, "Test Guild", None)))
        .collect()
}

fn sentinel_of(result: Result<impl std::fmt::Debug, AppError>) -> Sentinel {
    match result {
        Err(AppError::DashboardErr(err)) => err.sentinel(),
        other => panic!("expected a dashboard error, got {:?}", other),
    }
}
