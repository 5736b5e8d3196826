//! Function registry
//!
//! Maps function names to their handlers and the HTTP methods their
//! trigger accepts. Built once at startup, then shared read-only behind an
//! `Arc` by every request task.

use std::collections::HashMap;
use std::future::Future;

use axum::http::Method;
use hello_function_sdk::handler::{into_dyn_handler, DynHandler, IntoFunctionResponse};
use hello_function_sdk::{Context, Request, Response};

use crate::error::HostError;

/// A function bound to an HTTP trigger
pub struct RegisteredFunction {
    pub name: String,
    pub methods: Vec<Method>,
    handler: DynHandler,
}

impl RegisteredFunction {
    pub fn allows(&self, method: &Method) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Allowed methods as strings, for `Allow` headers and error bodies
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|m| m.to_string()).collect()
    }
}

impl std::fmt::Debug for RegisteredFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredFunction")
            .field("name", &self.name)
            .field("methods", &self.methods)
            .finish()
    }
}

#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, RegisteredFunction>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler function under `name`.
    ///
    /// The handler may return a `Response` or a `Result<Response, HandlerError>`;
    /// errors become JSON error responses with the error's status.
    /// Registering the same name twice replaces the earlier binding.
    pub fn register<F, Fut>(&mut self, name: &str, methods: &[Method], handler: F)
    where
        F: Fn(&Context, Request) -> Fut + Send + Sync + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoFunctionResponse,
    {
        tracing::debug!(function = %name, methods = ?methods, "Registering function");

        let function = RegisteredFunction {
            name: name.to_string(),
            methods: methods.to_vec(),
            handler: into_dyn_handler(handler),
        };

        if self.functions.insert(name.to_string(), function).is_some() {
            tracing::warn!(function = %name, "Replaced existing function registration");
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredFunction> {
        self.functions.get(name)
    }

    /// Registered function names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Execute a registered function
    pub async fn invoke(&self, name: &str, ctx: &Context, req: Request) -> Result<Response, HostError> {
        let function = self
            .get(name)
            .ok_or_else(|| HostError::FunctionNotFound(name.to_string()))?;

        Ok((function.handler)(ctx, req).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hello_function_sdk::HandlerError;

    fn echo_registry() -> FunctionRegistry {
        let mut registry = FunctionRegistry::new();
        registry.register("Echo", &[Method::GET], |_ctx, req: Request| async move {
            Response::text(200, req.path)
        });
        registry
    }

    #[test]
    fn test_registry_empty() {
        let registry = FunctionRegistry::new();
        assert!(registry.names().is_empty());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = echo_registry();
        assert_eq!(registry.names(), vec!["Echo"]);

        let function = registry.get("Echo").unwrap();
        assert!(function.allows(&Method::GET));
        assert!(!function.allows(&Method::POST));
        assert_eq!(function.method_names(), vec!["GET"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = echo_registry();
        registry.register("Echo", &[Method::POST], |_ctx, _req| async { Response::new(204) });

        assert_eq!(registry.names(), vec!["Echo"]);
        assert!(registry.get("Echo").unwrap().allows(&Method::POST));
    }

    #[tokio::test]
    async fn test_invoke() {
        let registry = echo_registry();
        let ctx = Context::new("Echo");
        let req = Request {
            path: "/api/Echo".to_string(),
            ..Request::default()
        };

        let response = registry.invoke("Echo", &ctx, req).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some("/api/Echo"));
    }

    #[tokio::test]
    async fn test_invoke_failing_function() {
        let mut registry = FunctionRegistry::new();
        registry.register("Lookup", &[Method::GET], |_ctx, _req: Request| async {
            Err::<Response, _>(HandlerError::NotFound)
        });
        let ctx = Context::new("Lookup");

        let response = registry.invoke("Lookup", &ctx, Request::default()).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body.as_deref(), Some(r#"{"error":"Not found"}"#));
    }

    #[tokio::test]
    async fn test_invoke_unknown_function() {
        let registry = echo_registry();
        let ctx = Context::new("Missing");

        let err = registry
            .invoke("Missing", &ctx, Request::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::FunctionNotFound(name) if name == "Missing"));
    }
}
