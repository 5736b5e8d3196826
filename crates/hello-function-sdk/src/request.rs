//! HTTP Request representation for functions

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Represents an incoming HTTP request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, ...)
    pub method: String,

    /// Full request URL as received (e.g., "http://example.com/api/HelloWorld?name=x")
    pub url: String,

    /// Request path (e.g., "/api/HelloWorld")
    pub path: String,

    /// Query parameters
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body, already read in full by the host
    #[serde(default)]
    pub body: Option<String>,
}

impl Request {
    /// Parse the body as JSON into a typed struct.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Greeting { name: String }
    ///
    /// let greeting: Greeting = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        serde_json::from_str(self.body.as_deref().unwrap_or("null"))
            .map_err(|e| HandlerError::BadRequest(format!("Invalid JSON: {}", e)))
    }

    /// The body as text; empty when the request carried none.
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Get a query parameter as a string reference.
    ///
    /// # Example
    /// ```ignore
    /// // URL: /api/HelloWorld?name=rust
    /// let name = req.query_param("name"); // Some(&"rust".to_string())
    /// ```
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }

    /// Get a query parameter parsed as a specific type.
    /// Returns None if the parameter doesn't exist or can't be parsed.
    pub fn query_param_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.query.get(key).and_then(|v| v.parse().ok())
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Check if request method matches (case-insensitive).
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            url: "http://localhost/".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: None,
        }
    }
}
