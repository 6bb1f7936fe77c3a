//! API utilities for talking to the hosted report backend.
//!
//! All report data comes from one fixed remote host; requests carry JSON
//! headers plus a bearer token when one is stored.

use std::fmt;

use gloo_net::http::Request;

use crate::system::auth::storage;

/// Fixed host of the report backend.
pub const API_BASE_URL: &str = "https://be-2-report.vercel.app";

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

/// Fetch outcome the pages branch on. Keeps "backend said no" distinct from
/// "network died" so the presentation layer decides what the user sees.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401: the stored token is no longer accepted.
    Unauthorized,
    /// Any other non-2xx status.
    Status(u16),
    /// Request never got a response, or the body was not JSON.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Status(status) => write!(f, "HTTP error! status: {}", status),
            ApiError::Network(message) => write!(f, "request failed: {}", message),
        }
    }
}

/// Append query parameters to a path. Empty parameter sets produce the bare
/// path with no trailing `?`.
pub fn with_query(path: &str, query: &[(&'static str, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let encoded: Vec<String> = query
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect();
    format!("{}?{}", path, encoded.join("&"))
}

/// GET a JSON body from the report backend.
///
/// A 401 clears the stored token and forces navigation back to the default
/// route before the error is returned; every other failure is reported to the
/// caller untouched.
pub async fn get_json(
    path: &str,
    query: &[(&'static str, String)],
    token: Option<&str>,
) -> Result<serde_json::Value, ApiError> {
    let url = api_url(&with_query(path, query));

    let mut request = Request::get(&url).header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 401 {
        handle_auth_error();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Session invalidation: drop the token and go back to the default route.
fn handle_auth_error() {
    storage::clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_empty_has_no_question_mark() {
        assert_eq!(
            with_query("/api/reports/order-has-discount", &[]),
            "/api/reports/order-has-discount"
        );
    }

    #[test]
    fn test_with_query_joins_pairs() {
        let query = vec![("year", "2024".to_string()), ("month", "5".to_string())];
        assert_eq!(
            with_query("/api/reports/sales-discount", &query),
            "/api/reports/sales-discount?year=2024&month=5"
        );
    }

    #[test]
    fn test_with_query_percent_encodes_values() {
        let query = vec![("job_position", "sales lead".to_string())];
        assert_eq!(
            with_query("/api/users", &query),
            "/api/users?job_position=sales%20lead"
        );
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error! status: 500");
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    }
}
