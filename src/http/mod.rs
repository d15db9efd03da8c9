//! HTTP server assembly subsystem.
//!
//! # Data Flow
//! ```text
//! registries (hooks, middlewares, routes)
//!     → server.rs (one Axum Router per server instance, listeners)
//!     → redirect.rs (redirect-only instance for HTTP→HTTPS)
//! ```
//!
//! # Design Decisions
//! - Routes attach before layers (the engine only wraps existing routes),
//!   and hooks apply in reverse so the first registered hook runs first
//! - Each registry is attached exactly once per server instance
//! - The TLS listener runs on a background task; its failures are logged,
//!   never swallowed

pub mod redirect;
pub mod server;

pub use server::{build_router, serve_plain, spawn_tls};
