//! SeaORM entities for the guild dashboard.

pub mod prelude;

pub mod guild_config;
