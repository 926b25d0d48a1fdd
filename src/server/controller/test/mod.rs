use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{self, Method, StatusCode},
    response::Response,
    Router,
};
use serenity::{cache::Cache, model::event::GuildCreateEvent};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_sessions::SessionManagerLayer;

use crate::server::{
    middleware::rate_limit::create_ip_rate_limiter, router::router, state::AppState,
};

mod cors;

const HOST: &str = "https://dashboard.example.com";

/// Router wired like production, on an in-memory database and an empty guild cache.
async fn app_with_limit(max_requests: u32) -> (TestContext, Router) {
    build_app(max_requests, Vec::new()).await
}

async fn app() -> (TestContext, Router) {
    app_with_limit(100).await
}

/// Router whose guild cache holds the given gateway guilds.
async fn app_with_guilds(guilds: Vec<GuildCreateEvent>) -> (TestContext, Router) {
    build_app(100, guilds).await
}

async fn build_app(max_requests: u32, guilds: Vec<GuildCreateEvent>) -> (TestContext, Router) {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, store) = test.db_and_store().await.unwrap();

    let cache = Cache::new();
    for mut guild in guilds {
        cache.update(&mut guild);
    }

    let state = AppState::new(db.clone(), store.clone(), Arc::new(cache));
    let limiter = create_ip_rate_limiter(max_requests, Duration::from_secs(900)).unwrap();
    let cors = CorsLayer::new()
        .allow_origin(http::HeaderValue::from_static(HOST))
        .allow_methods([Method::GET, Method::POST]);

    let app = router(limiter, cors)
        .with_state(state)
        .layer(SessionManagerLayer::new(store.clone()));

    (test, app)
}

fn post(uri: &str, body: &str) -> http::Request<Body> {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str, body: &str) -> http::Request<Body> {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: http::Request<Body>) -> (StatusCode, String) {
    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
