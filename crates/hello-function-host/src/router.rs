//! HTTP trigger router - binds registered functions to routes
//!
//! Every registered function is reachable at `/{route_prefix}/{name}`.
//! Functions are anonymous: the host performs no authentication.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use hello_function_sdk::{Context, InvocationId};
use http_body_util::LengthLimitError;

use crate::error::HostError;
use crate::AppState;

/// Response header carrying the invocation id
pub const INVOCATION_ID_HEADER: &str = "x-invocation-id";

/// Create the router serving health checks and function triggers
pub fn create_router(state: Arc<AppState>) -> Router {
    let function_route = state.config.function_route("{function}");

    Router::new()
        .route("/health", get(health_check))
        .route(&function_route, any(handle_function_request))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Dispatch a trigger request to the named function
async fn handle_function_request(
    State(state): State<Arc<AppState>>,
    Path(function_name): Path<String>,
    request: Request<Body>,
) -> Result<Response, HostError> {
    let function = state
        .registry
        .get(&function_name)
        .ok_or_else(|| HostError::FunctionNotFound(function_name.clone()))?;

    if !function.allows(request.method()) {
        return Err(HostError::MethodNotAllowed {
            function: function_name,
            method: request.method().to_string(),
            allowed: function.method_names(),
        });
    }

    let invocation_id = InvocationId::new();
    let method = request.method().to_string();
    let url = request_url(request.headers(), request.uri());
    let path = request.uri().path().to_string();

    tracing::debug!(
        invocation_id = %invocation_id,
        function = %function_name,
        method = %method,
        url = %url,
        "Incoming request"
    );

    let query: HashMap<String, String> = request
        .uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let headers = collect_headers(request.headers());

    let body_bytes = axum::body::to_bytes(request.into_body(), state.config.max_body_size)
        .await
        .map_err(|e| {
            tracing::debug!(invocation_id = %invocation_id, "Failed to read body: {}", e);
            if e.into_inner().is::<LengthLimitError>() {
                HostError::BodyTooLarge(state.config.max_body_size)
            } else {
                HostError::BadRequest("Failed to read body".to_string())
            }
        })?;

    let body = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    let sdk_request = hello_function_sdk::Request {
        method,
        url,
        path,
        query,
        headers,
        body,
    };

    let ctx = Context::with_invocation_id(function_name.as_str(), invocation_id);
    let sdk_response = state.registry.invoke(&function_name, &ctx, sdk_request).await?;

    Ok(into_http_response(sdk_response, ctx.invocation_id()))
}

/// Reconstruct the full URL the client requested
fn request_url(headers: &HeaderMap, uri: &axum::http::Uri) -> String {
    // Proxy chains append, so the first entry is the client-facing scheme.
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let host = headers
        .get("host")
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("{}://{}{}", scheme, host, path_and_query)
}

/// Flatten request headers for the SDK request.
///
/// Repeated headers are joined with ", "; values that are not valid UTF-8
/// are skipped.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();

    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            tracing::debug!(header = %name, "Skipping non UTF-8 header value");
            continue;
        };

        collected
            .entry(name.to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    collected
}

fn into_http_response(sdk_response: hello_function_sdk::Response, invocation_id: &InvocationId) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &sdk_response.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    if let Ok(value) = HeaderValue::from_str(invocation_id.as_str()) {
        builder = builder.header(INVOCATION_ID_HEADER, value);
    }

    match builder.body(Body::from(sdk_response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(invocation_id = %invocation_id, "Failed to build response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
        }
    }
}
