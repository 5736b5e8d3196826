//! Handler signatures
//!
//! Functions are plain async fns returning either a [`Response`] or a
//! `Result<Response, HandlerError>`. The host stores them type-erased
//! behind [`DynHandler`] so functions with different future types can
//! share one registry.
//!
//! # Example
//!
//! ```ignore
//! use hello_function_sdk::prelude::*;
//!
//! async fn greet(ctx: &Context, req: Request) -> Result<Response, HandlerError> {
//!     let name: String = req.query_param("name")
//!         .cloned()
//!         .ok_or_else(|| HandlerError::BadRequest("missing name".into()))?;
//!     ctx.log(format!("greeting {}", name));
//!     Ok(Response::text(200, format!("hi {}", name)))
//! }
//!
//! let handler = into_dyn_handler(|ctx: &Context, req| {
//!     let ctx = ctx.clone();
//!     async move { greet(&ctx, req).await }
//! });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::{Context, HandlerError, Request, Response};

/// Type alias for boxed future returned by handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type-erased handler as stored by the host
pub type DynHandler = Arc<dyn Fn(&Context, Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Values a handler may return
pub trait IntoFunctionResponse {
    fn into_function_response(self) -> Response;
}

impl IntoFunctionResponse for Response {
    fn into_function_response(self) -> Response {
        self
    }
}

impl IntoFunctionResponse for Result<Response, HandlerError> {
    fn into_function_response(self) -> Response {
        self.unwrap_or_else(Response::from)
    }
}

/// Box a handler closure into a [`DynHandler`]
pub fn into_dyn_handler<F, Fut>(handler: F) -> DynHandler
where
    F: Fn(&Context, Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoFunctionResponse,
{
    Arc::new(move |ctx: &Context, req: Request| -> BoxFuture<'static, Response> {
        let fut = handler(ctx, req);
        Box::pin(async move { fut.await.into_function_response() })
    })
}
