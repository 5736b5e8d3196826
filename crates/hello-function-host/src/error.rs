//! Host-side dispatch errors

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    #[error("Method {method} not allowed for function {function}")]
    MethodNotAllowed {
        function: String,
        method: String,
        allowed: Vec<String>,
    },

    #[error("Request body exceeds {0} bytes")]
    BodyTooLarge(usize),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HostError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HostError::FunctionNotFound(_) => StatusCode::NOT_FOUND,
            HostError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            HostError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            HostError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        let mut response = (status, body).into_response();

        if let HostError::MethodNotAllowed { allowed, .. } = &self {
            if let Ok(value) = HeaderValue::from_str(&allowed.join(", ")) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }

        response
    }
}
