//! Route table and route construction.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};

use crate::hooks::HookFn;
use crate::routing::Method;

/// Boxed future returned by a route handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A type-erased route handler.
pub type HandlerFn = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// One registered route: method, path pattern, handler, and the middleware
/// chain that wraps only this route.
///
/// Immutable once registered. Paths use the engine's pattern syntax and
/// must start with `/`.
#[derive(Clone)]
pub struct Route {
    method: Method,
    path: String,
    handler: HandlerFn,
    middleware: Vec<HookFn>,
}

impl Route {
    pub fn new<H, Fut, R>(method: Method, path: impl Into<String>, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        let handler: HandlerFn = Arc::new(move |request: Request| -> HandlerFuture {
            let response = handler(request);
            Box::pin(async move { response.await.into_response() })
        });
        Self {
            method,
            path: path.into(),
            handler,
            middleware: Vec::new(),
        }
    }

    /// Add route-specific middleware; runs ahead of the handler in the
    /// order it was added.
    pub fn with_middleware(mut self, hook: HookFn) -> Self {
        self.middleware.push(hook);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn handler(&self) -> &HandlerFn {
        &self.handler
    }

    pub fn middleware(&self) -> &[HookFn] {
        &self.middleware
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// Generates a per-method registration helper on `RouteTable`.
macro_rules! method_helper {
    ($name:ident, $variant:ident) => {
        pub fn $name<H, Fut, R>(&mut self, path: impl Into<String>, handler: H) -> &mut Self
        where
            H: Fn(Request) -> Fut + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoResponse,
        {
            self.register(Route::new(Method::$variant, path, handler))
        }
    };
}

/// The ordered list of routes registered against the app.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a prepared route.
    pub fn register(&mut self, route: Route) -> &mut Self {
        self.routes.push(route);
        self
    }

    method_helper!(get, Get);
    method_helper!(post, Post);
    method_helper!(delete, Delete);
    method_helper!(patch, Patch);
    method_helper!(put, Put);
    method_helper!(options, Options);
    method_helper!(head, Head);

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("len", &self.routes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_registration_preserves_order_and_metadata() {
        let mut table = RouteTable::new();
        table
            .get("/first", |_req: Request| async { StatusCode::OK })
            .post("/second", |_req: Request| async { StatusCode::CREATED });

        assert_eq!(table.len(), 2);
        assert_eq!(table.routes()[0].method(), Method::Get);
        assert_eq!(table.routes()[0].path(), "/first");
        assert_eq!(table.routes()[1].method(), Method::Post);
        assert_eq!(table.routes()[1].path(), "/second");
    }
}
