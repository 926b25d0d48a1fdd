mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{bot, config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let (session_store, session) = startup::connect_to_session(&db).await?;
        let cors = startup::setup_cors(&config)?;
        let rate_limiter = startup::setup_rate_limiter(&config)?;

        tracing::info!("Starting server");

        // The bot owns the guild cache read by the API
        let (bot_client, guild_cache) = bot::start::init_bot(&config, db.clone()).await?;

        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(rate_limiter, cors)
            .with_state(AppState::new(db, session_store, guild_cache))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
