//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → foreground listener drains, background TLS task stops
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the signal out to every listener
//! - Listeners otherwise run until process exit; there is no restart

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::spawn_signal_listener;
