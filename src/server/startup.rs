use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    middleware::rate_limit::{create_ip_rate_limiter, IpRateLimiter},
};

/// Idle time after which a cookie session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up the session store on the database pool.
///
/// Creates the session table if needed and builds the cookie session layer backed by the
/// same store the dashboard API reads sessions from.
///
/// # Returns
/// - `Ok((SqliteStore, SessionManagerLayer))` - Store for `AppState` and the layer for the router
/// - `Err(AppError::SessionStoreErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<(SqliteStore, SessionManagerLayer<SqliteStore>), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store.migrate().await.map_err(|e| {
        AppError::SessionStoreErr(tower_sessions::session_store::Error::Backend(e.to_string()))
    })?;

    let layer = SessionManagerLayer::new(store.clone())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok((store, layer))
}

/// Allows cross-origin requests from the configured host only.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer restricted to `config.host`
/// - `Err(ConfigError::InvalidEnvVar)` - `HOST` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .host
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "HOST".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Builds the per-client rate limiter from configuration.
pub fn setup_rate_limiter(config: &Config) -> Result<IpRateLimiter, AppError> {
    Ok(create_ip_rate_limiter(
        config.rate_limit_max_requests,
        config.rate_limit_window,
    )?)
}
