//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (dotenv load, typed reads)
//!     → schema.rs (RunMode, AppConfig)
//!     → AppConfig (immutable snapshot, read once per run)
//! ```
//!
//! # Design Decisions
//! - All behavior flags come from environment variables; there is no CLI
//! - Boolean flags degrade to `false` on unparsable input, with a warning
//! - Host/port resolution is pure and unit-testable

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_dotenv, run_mode, ConfigError};
pub use schema::{AppConfig, RunMode};
