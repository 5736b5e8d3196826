//! Application configuration

use std::env;

/// Default listen port, matching the local functions runtime
const DEFAULT_PORT: u16 = 7071;

/// Default maximum request body size (1 MiB)
const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to
    pub host: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Path segment functions are mounted under ("api" -> /api/HelloWorld).
    /// Empty mounts functions at the root.
    pub route_prefix: String,

    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HELLO_FUNCTION_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("FUNCTIONS_CUSTOMHANDLER_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            route_prefix: lookup("HELLO_FUNCTION_ROUTE_PREFIX")
                .map(|s| s.trim_matches('/').to_string())
                .unwrap_or_else(|| "api".to_string()),

            max_body_size: lookup("HELLO_FUNCTION_MAX_BODY_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),
        }
    }

    /// Address string for the listener, e.g. "0.0.0.0:7071"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Route path a function is bound to, e.g. "/api/HelloWorld"
    pub fn function_route(&self, name: &str) -> String {
        if self.route_prefix.is_empty() {
            format!("/{}", name)
        } else {
            format!("/{}/{}", self.route_prefix, name)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
