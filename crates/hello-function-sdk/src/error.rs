//! Error types for functions

use thiserror::Error;

/// Errors a function can return
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) | HandlerError::SerializationError(_) => 400,
            HandlerError::NotFound => 404,
            HandlerError::Internal(_) => 500,
        }
    }

    /// Convert to a JSON error response
    pub fn into_response(self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            serde_json::json!({
                "error": self.to_string()
            }),
        )
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.into_response()
    }
}
