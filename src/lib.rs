//! Keel — application bootstrap kernel for Axum services.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌───────────────────────────────────────────────┐
//!                │                     APP                        │
//!                │                                                │
//!   environment  │  ┌─────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ─────────────┼─▶│ config  │──▶│   app   │──▶│ http server │  │
//!   (.env, vars) │  └─────────┘   │bootstrap│   │  instances  │  │
//!                │                └────┬────┘   └──────┬──────┘  │
//!                │                     │               │         │
//!                │    ┌────────────────┼───────┐       ▼         │
//!                │    ▼                ▼       ▼   plain / TLS   │
//!                │  ┌───────┐   ┌──────────┐ ┌────┐ / redirect   │
//!                │  │ hooks │   │ routing  │ │ db │  listeners   │
//!                │  └───────┘   └──────────┘ └────┘              │
//!                │                                                │
//!                │  cross-cutting: observability, lifecycle, net  │
//!                └───────────────────────────────────────────────┘
//! ```
//!
//! The kernel owns no routing algorithm, TLS stack, or request lifecycle —
//! all of that is the Axum engine's. What it owns is the sequencing: load
//! environment configuration, wire the registries into an explicit [`App`],
//! attach hooks and routes to each server instance exactly once, and start
//! the configured listeners.

// Core subsystems
pub mod app;
pub mod config;
pub mod db;
pub mod hooks;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use app::{App, AppError, ListenPlan};
pub use config::{AppConfig, RunMode};
pub use db::Database;
pub use hooks::{HookFn, HookRegistry};
pub use lifecycle::Shutdown;
pub use routing::{Method, Route, RouteError, RouteTable};
