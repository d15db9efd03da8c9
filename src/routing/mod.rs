//! Routing table subsystem.
//!
//! # Data Flow
//! ```text
//! application code
//!     → RouteTable (register method/path/handler tuples)
//!     → http::server (dispatch each entry onto the Axum engine)
//! ```
//!
//! # Design Decisions
//! - Methods are a closed enum bound at registration time; an unknown
//!   method string is a construction error, never a silently dropped route
//! - Routes are immutable once registered; the table is populated between
//!   bootstrap and run, then only read
//! - Handlers are type-erased so the table owns no generics

pub mod method;
pub mod router;

pub use method::{Method, RouteError};
pub use router::{HandlerFn, Route, RouteTable};
