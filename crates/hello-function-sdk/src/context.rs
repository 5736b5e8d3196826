//! Invocation context handed to every function
//!
//! The host creates one [`Context`] per invocation. Functions use it to
//! write diagnostic log entries that carry the function name and the
//! invocation id.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single function invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(String);

impl InvocationId {
    /// Create a new random invocation ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from a string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context passed to every function.
///
/// Cheap to clone; the host hands functions a reference and they clone it
/// only when a future has to outlive the borrow.
///
/// # Example
///
/// ```ignore
/// async fn handle(ctx: &Context, req: Request) -> Response {
///     ctx.log(format!("processing {}", req.url));
///     Response::text(200, "done")
/// }
/// ```
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    function_name: String,
    invocation_id: InvocationId,
}

impl Context {
    /// Create a context for a new invocation of `function_name`
    pub fn new(function_name: impl Into<String>) -> Self {
        Self::with_invocation_id(function_name, InvocationId::new())
    }

    /// Create a context with a specific invocation ID
    pub fn with_invocation_id(function_name: impl Into<String>, invocation_id: InvocationId) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                function_name: function_name.into(),
                invocation_id,
            }),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.inner.function_name
    }

    pub fn invocation_id(&self) -> &InvocationId {
        &self.inner.invocation_id
    }

    /// Write one entry to the process-wide log sink.
    pub fn log(&self, message: impl AsRef<str>) {
        tracing::info!(
            function = %self.inner.function_name,
            invocation_id = %self.inner.invocation_id,
            "{}",
            message.as_ref()
        );
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("function_name", &self.inner.function_name)
            .field("invocation_id", &self.inner.invocation_id)
            .finish()
    }
}
