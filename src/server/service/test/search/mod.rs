use super::cache_of;
use crate::{
    model::api::Sentinel,
    server::{error::AppError, service::search::SearchService},
};
use serenity::all::Guild;
use test_utils::serenity::TestGuildBuilder;

mod channels;
mod resolve_users;
mod roles;
mod users;

fn labels(options: &[crate::server::model::option::SelectOptionParam]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}

fn guild() -> Guild {
    TestGuildBuilder::new(100, "Search Guild")
        .role(100, "@everyone")
        .role(1, "Moderator")
        .role(2, "Muted")
        .role(3, "Admin")
        .text_channel(10, "mod-log")
        .text_channel(11, "general")
        .voice_channel(12, "Mod Voice")
        .text_channel(13, "join-log")
        .member(20, "alice", None)
        .member(21, "bob", Some("Moderator Bob"))
        .member(22, "carol", None)
        .build()
}
