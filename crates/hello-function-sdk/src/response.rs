//! HTTP Response representation for functions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an outgoing HTTP response.
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `text(status, body)` | any | Plain text |
/// | `ok(body)` | 200 | JSON success |
/// | `bad_request(msg)` | 400 | Invalid input |
/// | `not_found()` | 404 | Unknown resource |
/// | `internal_error(msg)` | 500 | Server error |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: Option<String>,
}

impl Response {
    /// Create a new response with the given status code (no body).
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a 200 OK response with JSON body.
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a JSON response with a custom status code.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(201, json!({"id": "new-id"}))
    /// ```
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status,
            headers,
            body: serde_json::to_string(&body).ok(),
        }
    }

    /// Create a plain text response.
    ///
    /// # Example
    /// ```ignore
    /// Response::text(200, "Hello, World!")
    /// ```
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain; charset=utf-8".to_string());

        Self {
            status,
            headers,
            body: Some(body.into()),
        }
    }

    pub fn not_found() -> Self {
        Self::json(404, serde_json::json!({"error": "Not Found"}))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(400, serde_json::json!({"error": message.into()}))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::json(500, serde_json::json!({"error": message.into()}))
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response() {
        let response = Response::text(200, "Hello");
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some("Hello"));
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_json_response() {
        let response = Response::ok(serde_json::json!({"message": "hi"}));
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some(r#"{"message":"hi"}"#));
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_builders() {
        let response = Response::new(204).with_header("X-Test", "1").with_body("x");
        assert_eq!(response.status, 204);
        assert_eq!(response.headers.get("X-Test").map(String::as_str), Some("1"));
        assert_eq!(response.body.as_deref(), Some("x"));
        assert_eq!(Response::not_found().status, 404);
        assert_eq!(Response::bad_request("bad").status, 400);
        assert_eq!(Response::internal_error("oops").status, 500);
    }
}
