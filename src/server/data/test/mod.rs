mod guild_config;
mod session;
