//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! all subsystems emit tracing events
//!     → logging.rs (EnvFilter + two fmt layers)
//!     → stdout (compact or JSON, per run mode)
//!     → logs/app.log (plain text, always)
//! ```
//!
//! # Design Decisions
//! - Structured logging throughout; no bare println
//! - `RUST_LOG` overrides the run-mode default filter
//! - Log duplication to the file is process-wide and set up once

pub mod logging;

pub use logging::init;
