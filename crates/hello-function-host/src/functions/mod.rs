//! Functions served by this host

pub mod hello_world;

use axum::http::Method;

use crate::runtime::FunctionRegistry;

/// Register every function this host serves
pub fn register_all(registry: &mut FunctionRegistry) {
    registry.register(hello_world::NAME, &[Method::GET, Method::POST], |ctx, req| {
        let ctx = ctx.clone();
        async move { hello_world::handle(&ctx, req).await }
    });
}
