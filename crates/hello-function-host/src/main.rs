//! Hello Function Host - Main entry point
//!
//! Serves the HelloWorld function over HTTP:
//! - Registers every function in the registry
//! - Binds each one to `/{route_prefix}/{name}`
//! - Builds the request and invocation context per call

mod config;
mod error;
mod functions;
mod router;
mod runtime;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::runtime::FunctionRegistry;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub registry: FunctionRegistry,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,hello_function_host=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hello Function Host");

    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let mut registry = FunctionRegistry::new();
    functions::register_all(&mut registry);
    for name in registry.names() {
        tracing::info!("Function {} bound to {}", name, config.function_route(name));
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState { config, registry });

    let app = router::create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
