//! Server instance assembly and listener lifecycle.
//!
//! # Responsibilities
//! - Build one Axum Router per server instance from the registries
//! - Dispatch each route to the registration call matching its method
//! - Start the plaintext listener (blocking) and the TLS listener
//!   (background task)

use std::net::SocketAddr;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::hooks::{HookFn, HookRegistry};
use crate::lifecycle::Shutdown;
use crate::routing::{Method, Route, RouteTable};

/// Build a complete server instance: routes, then middlewares, then
/// integration hooks, with request tracing outermost.
pub fn build_router(
    routes: &RouteTable,
    integrations: &HookRegistry,
    middlewares: &HookRegistry,
) -> Router {
    let router = register_routes(Router::new(), routes);
    let router = use_middlewares(router, middlewares);
    let router = integrate_packages(router, integrations);
    router.layer(TraceLayer::new_for_http())
}

/// Attach every integration hook to the instance. Called once per instance.
pub fn integrate_packages(router: Router, integrations: &HookRegistry) -> Router {
    apply_hooks(router, integrations.hooks())
}

/// Attach every registered middleware to the instance. Called once per
/// instance, after integrations so integrations observe requests first.
pub fn use_middlewares(router: Router, middlewares: &HookRegistry) -> Router {
    apply_hooks(router, middlewares.hooks())
}

/// Attach every registered route to the instance.
pub fn register_routes(router: Router, table: &RouteTable) -> Router {
    table
        .routes()
        .iter()
        .fold(router, |router, route| register_route(router, route))
}

/// Dispatch a single route to the registration call matching its method.
/// The method enum is closed, so every route lands on exactly one arm.
fn register_route(router: Router, route: &Route) -> Router {
    let handler = route.handler().clone();
    let service = move |request: Request| {
        let handler = handler.clone();
        async move { handler(request).await }
    };

    let mut method_router = match route.method() {
        Method::Get => routing::get(service),
        Method::Post => routing::post(service),
        Method::Delete => routing::delete(service),
        Method::Patch => routing::patch(service),
        Method::Put => routing::put(service),
        Method::Options => routing::options(service),
        Method::Head => routing::head(service),
    };

    // Route middleware wraps only this route; reversed for the same
    // first-registered-runs-first ordering as instance-wide hooks.
    for hook in route.middleware().iter().rev() {
        let hook = hook.clone();
        method_router = method_router.layer(middleware::from_fn(
            move |request: Request, next: Next| hook(request, next),
        ));
    }

    router.route(route.path(), method_router)
}

/// Tower layers wrap outside-in, so hooks apply in reverse to keep the
/// first registered hook outermost.
fn apply_hooks(mut router: Router, hooks: &[HookFn]) -> Router {
    for hook in hooks.iter().rev() {
        let hook = hook.clone();
        router = router.layer(middleware::from_fn(
            move |request: Request, next: Next| hook(request, next),
        ));
    }
    router
}

/// Serve an instance on the given listener, blocking until shutdown.
pub async fn serve_plain(
    listener: TcpListener,
    router: Router,
    shutdown: &Shutdown,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP listener started");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.wait())
        .await?;

    tracing::info!(address = %addr, "HTTP listener stopped");
    Ok(())
}

/// Start the TLS listener on a background task.
///
/// Runtime failures cannot reach the caller, so they are logged from the
/// task; setup failures (certificates, binding) were surfaced before this
/// point.
pub fn spawn_tls(
    addr: SocketAddr,
    tls: RustlsConfig,
    router: Router,
    shutdown: &Shutdown,
) -> JoinHandle<()> {
    let mut signal = shutdown.subscribe();
    tokio::spawn(async move {
        tracing::info!(address = %addr, "TLS listener started");
        let server = axum_server::bind_rustls(addr, tls).serve(router.into_make_service());
        tokio::select! {
            result = server => {
                if let Err(e) = result {
                    tracing::error!(address = %addr, error = %e, "TLS listener failed");
                }
            }
            _ = signal.recv() => {
                tracing::info!(address = %addr, "TLS listener stopped");
            }
        }
    })
}
