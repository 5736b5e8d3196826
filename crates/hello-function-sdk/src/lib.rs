//! Hello Function SDK - Types for writing HTTP-triggered functions
//!
//! A function is an async fn taking a [`Context`] and a [`Request`] and
//! returning a [`Response`]. The host builds both per invocation and
//! transmits whatever the function returns.

pub mod context;
pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for functions
    pub use crate::context::{Context, InvocationId};
    pub use crate::error::HandlerError;
    pub use crate::handler::{BoxFuture, IntoFunctionResponse};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use context::{Context, InvocationId};
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
