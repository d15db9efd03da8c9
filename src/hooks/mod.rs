//! Request-processing hook registries.
//!
//! # Data Flow
//! ```text
//! bootstrap / application code
//!     → HookRegistry (ordered registration)
//!     → http::server (attached to each server instance ahead of routes)
//! ```
//!
//! # Design Decisions
//! - Two instances exist per app: integration hooks (packages such as the
//!   database connector) and middlewares (application-level)
//! - First registered runs first; attachment happens exactly once per
//!   server instance
//! - Hooks are stored type-erased so registries stay object-safe

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Boxed future returned by a hook invocation.
pub type HookFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A type-erased request-processing hook.
///
/// Receives the request and the rest of the chain; must call
/// `next.run(request)` to continue processing.
pub type HookFn = Arc<dyn Fn(Request, Next) -> HookFuture + Send + Sync>;

/// An ordered collection of request-processing hooks.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: Vec<HookFn>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook. Hooks run in registration order.
    pub fn register<H, Fut>(&mut self, hook: H)
    where
        H: Fn(Request, Next) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.register_hook(Arc::new(move |request: Request, next: Next| -> HookFuture {
            Box::pin(hook(request, next))
        }));
    }

    /// Register an already type-erased hook.
    pub fn register_hook(&mut self, hook: HookFn) {
        self.hooks.push(hook);
    }

    /// The registered hooks, in registration order.
    pub fn hooks(&self) -> &[HookFn] {
        &self.hooks
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("len", &self.hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = HookRegistry::new();
        assert!(registry.is_empty());

        registry.register(|request: Request, next: Next| async move { next.run(request).await });
        registry.register(|request: Request, next: Next| async move { next.run(request).await });

        assert_eq!(registry.len(), 2);
    }
}
