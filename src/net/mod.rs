//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! config (cert/key paths, host, port)
//!     → tls.rs (PEM loading into a rustls server config)
//!     → http::server (bound listeners)
//! ```
//!
//! # Design Decisions
//! - TLS setup failures surface before any listener task is spawned
//! - Host names resolve through the system resolver; the first address wins

pub mod tls;

pub use tls::load_tls_config;
