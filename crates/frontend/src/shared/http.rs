//! JSON request helpers on top of gloo-net.
//!
//! Transport failures get a single retry; non-success HTTP statuses are
//! reported as-is and never retried.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    match get_json_once(url).await {
        Err(HttpError::Transport(first)) => {
            log::warn!("retrying {} after transport error: {}", url, first);
            get_json_once(url).await.map_err(|e| e.into_message())
        }
        other => other.map_err(|e| e.into_message()),
    }
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

enum HttpError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl HttpError {
    fn into_message(self) -> String {
        match self {
            HttpError::Transport(msg) => format!("Request failed: {}", msg),
            HttpError::Status(code) => format!("HTTP {}", code),
            HttpError::Decode(msg) => format!("Failed to parse response: {}", msg),
        }
    }
}

async fn get_json_once<T: DeserializeOwned>(url: &str) -> Result<T, HttpError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(HttpError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| HttpError::Decode(e.to_string()))
}
