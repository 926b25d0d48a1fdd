use super::*;

fn preflight(origin: &str) -> http::Request<Body> {
    http::Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/servers/info")
        .header(http::header::ORIGIN, origin)
        .header(http::header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

/// Tests that the configured host is the only allowed origin.
///
/// Expected: allow-origin echoes the host, absent for any other origin
#[tokio::test]
async fn allows_only_configured_host() {
    let (_test, app) = app().await;

    let response = app.clone().oneshot(preflight(HOST)).await.unwrap();
    assert_eq!(
        response.headers().get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&http::HeaderValue::from_static(HOST))
    );

    let response = app.oneshot(preflight("https://evil.example.com")).await.unwrap();
    assert!(response
        .headers()
        .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
