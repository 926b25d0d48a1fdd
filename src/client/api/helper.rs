use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::Sentinel};

/// Parses a dashboard API response.
///
/// The API always answers with HTTP 200, so a failure is recognized by its body being
/// one of the sentinel strings rather than by the status code.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

    if let Some(sentinel) = Sentinel::from_body(&body) {
        return Err(ApiError::Sentinel(sentinel));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Transport(format!(
            "Unexpected status {}: {}",
            status, body
        )));
    }

    serde_json::from_str::<T>(&body)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
}

/// POST a JSON payload and parse the response.
pub async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    url: &str,
    payload: &B,
) -> Result<T, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post(url).body(body)).await?;
    parse_response(response).await
}
