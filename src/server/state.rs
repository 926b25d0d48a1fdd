//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the config store
//! - Session store written by the login flow
//! - The Discord bot's guild cache

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::cache::Cache;
use tower_sessions_sqlx_store::SqliteStore;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SqliteStore` wraps a pool as well
/// - `Arc<Cache>` is a reference-counted pointer to the bot's cache
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool holding guild configs.
    pub db: DatabaseConnection,

    /// Session store the dashboard looks sessions up in.
    ///
    /// Shares the database pool with `db`. Records are only read by the API.
    pub session_store: SqliteStore,

    /// Guilds the bot is currently on, kept up to date by the gateway connection.
    pub guild_cache: Arc<Cache>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `session_store` - Session store sharing the database pool
    /// - `guild_cache` - The bot client's cache
    pub fn new(db: DatabaseConnection, session_store: SqliteStore, guild_cache: Arc<Cache>) -> Self {
        Self {
            db,
            session_store,
            guild_cache,
        }
    }
}
