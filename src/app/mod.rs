//! App bootstrapper.
//!
//! # Data Flow
//! ```text
//! App::bootstrap()
//!     run mode → .env load → registries → database connector → db hook
//! App::run(port)
//!     log setup → flag snapshot → ListenPlan
//!         → TLS listener (background task, port 443)
//!         → redirect listener OR plaintext listener (foreground, `port`)
//! ```
//!
//! # Design Decisions
//! - All registries live on an explicit struct threaded through run; there
//!   is no process-global state beyond the tracing subscriber
//! - Initialization order is fixed and visible in bootstrap()
//! - Startup failures are fatal; runtime listener failures are logged

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{self, AppConfig, ConfigError, RunMode};
use crate::db::Database;
use crate::hooks::HookRegistry;
use crate::http;
use crate::lifecycle::{self, Shutdown};
use crate::net;
use crate::observability;
use crate::observability::logging::LoggingError;
use crate::routing::{RouteError, RouteTable};

/// Port used when the caller supplies none.
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Port the TLS listener binds.
pub const HTTPS_PORT: u16 = 443;

/// Error type for startup failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("log setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("TLS setup failed: {0}")]
    Tls(#[source] std::io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listener failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("route registration failed: {0}")]
    Route(#[from] RouteError),
}

/// Which listeners a run will start, derived from the flag snapshot.
///
/// Pure, so listener selection is testable without binding sockets. When
/// the redirect listener is active it takes the plaintext port and the
/// plaintext listener is skipped; both binding the same port could only
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenPlan {
    /// Start the TLS listener on port 443.
    pub https: bool,
    /// Serve redirect-to-HTTPS instead of the app on the plain port.
    pub redirect: bool,
    /// Port for the foreground listener.
    pub port: u16,
}

impl ListenPlan {
    pub fn new(config: &AppConfig, port: u16) -> Self {
        let https = config.https_on;
        // The redirect flag only means something while HTTPS is on.
        let redirect = https && config.redirect_to_https;
        Self { https, redirect, port }
    }

    /// Whether the foreground listener serves the app itself.
    pub fn plain(&self) -> bool {
        !self.redirect
    }
}

/// Resolve the caller-supplied port, defaulting to 80.
pub fn effective_port(port: Option<u16>) -> u16 {
    port.unwrap_or(DEFAULT_HTTP_PORT)
}

/// The application: run mode, registries, and the database connector,
/// wired once at bootstrap and consumed by run.
pub struct App {
    mode: RunMode,
    integrations: HookRegistry,
    middlewares: HookRegistry,
    routes: RouteTable,
    database: Option<Database>,
}

impl App {
    /// One-time process initialization, in fixed order: run mode, .env
    /// load, hook registries, routing table, database connector, and the
    /// database integration hook.
    pub fn bootstrap() -> Result<Self, AppError> {
        let mode = config::run_mode();
        config::load_dotenv();

        let mut integrations = HookRegistry::new();
        let middlewares = HookRegistry::new();
        let routes = RouteTable::new();

        let database = Database::from_env()?;
        if let Some(db) = &database {
            integrations.register_hook(db.integration_hook());
        }

        Ok(Self {
            mode,
            integrations,
            middlewares,
            routes,
            database,
        })
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    pub fn integrations_mut(&mut self) -> &mut HookRegistry {
        &mut self.integrations
    }

    pub fn middlewares_mut(&mut self) -> &mut HookRegistry {
        &mut self.middlewares
    }

    pub fn routes_mut(&mut self) -> &mut RouteTable {
        &mut self.routes
    }

    /// Build one full server instance from the current registries.
    pub fn router(&self) -> axum::Router {
        http::build_router(&self.routes, &self.integrations, &self.middlewares)
    }

    /// Start the configured listeners and block until shutdown.
    ///
    /// Sets up log duplication to `logs/app.log`, snapshots the listener
    /// flags from the environment, then starts: the TLS listener on a
    /// background task when HTTPS is on, and either the redirect listener
    /// or the plaintext listener on the given port in the foreground.
    pub async fn run(self, port: Option<u16>) -> Result<(), AppError> {
        let port = effective_port(port);
        observability::init(self.mode)?;

        // Flags are read once per run; changing them requires a restart.
        let config = config::load_config();
        let plan = ListenPlan::new(&config, port);

        tracing::info!(
            mode = %self.mode,
            port = plan.port,
            https = plan.https,
            redirect = plan.redirect,
            "starting listeners"
        );

        let shutdown = Shutdown::new();
        lifecycle::spawn_signal_listener(&shutdown);

        if plan.https {
            let (cert, key) = config::loader::tls_files(&config)?;
            let tls = net::load_tls_config(Path::new(cert), Path::new(key))
                .await
                .map_err(AppError::Tls)?;
            let addr = resolve_bind_addr(config.https_host(), HTTPS_PORT).await?;
            let router = self.router();
            http::spawn_tls(addr, tls, router, &shutdown);
        }

        if plan.redirect {
            let router = http::redirect::router(config.https_host());
            let listener = bind_plain(plan.port).await?;
            http::serve_plain(listener, router, &shutdown)
                .await
                .map_err(AppError::Serve)?;
        } else {
            let router = self.router();
            let listener = bind_plain(plan.port).await?;
            http::serve_plain(listener, router, &shutdown)
                .await
                .map_err(AppError::Serve)?;
        }

        Ok(())
    }
}

async fn bind_plain(port: u16) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await.map_err(|e| AppError::Bind {
        addr: addr.to_string(),
        source: e,
    })
}

/// Resolve a host name to the first address for binding.
async fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr, AppError> {
    let bind_error = |source| AppError::Bind {
        addr: format!("{host}:{port}"),
        source,
    };

    tokio::net::lookup_host((host, port))
        .await
        .map_err(bind_error)?
        .next()
        .ok_or_else(|| {
            bind_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "host resolved to no addresses",
            ))
        })
}
