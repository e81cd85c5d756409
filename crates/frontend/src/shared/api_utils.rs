//! API utilities for frontend-backend communication

use crate::shared::query::ApiParams;
use contracts::shared::pagination::PaginatedResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL списочного запроса: `{base}{path}?page=..&filter[search]=..`
pub fn api_list_url(path: &str, params: &ApiParams) -> String {
    format!("{}?{}", api_url(path), params.to_query_string())
}

/// GET постраничного списка
pub async fn fetch_page<T: DeserializeOwned>(
    path: &str,
    params: &ApiParams,
) -> Result<PaginatedResponse<T>, String> {
    let url = api_list_url(path, params);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", path, response.status()));
    }

    response
        .json::<PaginatedResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET справочника целиком (без пагинации)
pub async fn fetch_all<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", path, response.status()));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
