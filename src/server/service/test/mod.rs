use std::collections::HashMap;

use serenity::all::Guild;

mod guild_config;
mod search;
mod server;

fn cache_of(guilds: Vec<Guild>) -> HashMap<u64, Guild> {
    guilds.into_iter().map(|g| (g.id.get(), g)).collect()
}
