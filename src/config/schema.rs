//! Configuration schema definitions.
//!
//! `AppConfig` is a snapshot of the listener-related environment flags,
//! taken once per `App::run` call. Re-reading requires a process restart.

use serde::{Deserialize, Serialize};

/// Environment variable holding the run mode (`debug`, `test`, `release`).
pub const MODE: &str = "MODE";
/// Boolean flag enabling the TLS listener.
pub const APP_HTTPS_ON: &str = "APP_HTTPS_ON";
/// Boolean flag enabling the HTTP→HTTPS redirect listener.
pub const APP_REDIRECT_HTTP_TO_HTTPS: &str = "APP_REDIRECT_HTTP_TO_HTTPS";
/// Path to the TLS certificate file (PEM).
pub const APP_HTTPS_CERT_FILE_PATH: &str = "APP_HTTPS_CERT_FILE_PATH";
/// Path to the TLS private key file (PEM).
pub const APP_HTTPS_KEY_FILE_PATH: &str = "APP_HTTPS_KEY_FILE_PATH";
/// Host advertised (and bound) by the TLS listener.
pub const APP_HTTPS_HOST: &str = "APP_HTTPS_HOST";
/// Fallback host when no HTTPS host is configured.
pub const APP_HTTP_HOST: &str = "APP_HTTP_HOST";

/// Execution mode, selecting log verbosity and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Debug,
    Test,
    Release,
}

impl RunMode {
    /// Parse a mode string. Unrecognized values fall back to `Debug`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "release" => RunMode::Release,
            "test" => RunMode::Test,
            _ => RunMode::Debug,
        }
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Test => "info",
            RunMode::Release => "info",
        }
    }

    /// Release builds log JSON for machine parsing; the rest log for humans.
    pub fn json_logs(&self) -> bool {
        matches!(self, RunMode::Release)
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunMode::Debug => "debug",
            RunMode::Test => "test",
            RunMode::Release => "release",
        };
        f.write_str(s)
    }
}

/// Listener configuration derived from the environment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Start a TLS listener on port 443.
    pub https_on: bool,

    /// Replace the plaintext listener with an HTTP→HTTPS redirect.
    /// Only honored while `https_on` is set.
    pub redirect_to_https: bool,

    /// Path to the TLS certificate file (PEM).
    pub cert_file: String,

    /// Path to the TLS private key file (PEM).
    pub key_file: String,

    /// Explicit HTTPS host, may be empty.
    pub https_host: String,

    /// Fallback HTTP host, may be empty.
    pub http_host: String,
}

impl AppConfig {
    /// Resolve the advertised HTTPS host.
    ///
    /// Precedence: explicit HTTPS host, then HTTP host, then "localhost".
    pub fn https_host(&self) -> &str {
        if !self.https_host.is_empty() {
            &self.https_host
        } else if !self.http_host.is_empty() {
            &self.http_host
        } else {
            "localhost"
        }
    }
}

/// Parse a boolean flag value the lenient way.
///
/// Accepts the usual spellings in either case; anything else is `None` so
/// the caller can decide how loudly to degrade.
pub fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_mode_parse() {
        assert_eq!(RunMode::parse("release"), RunMode::Release);
        assert_eq!(RunMode::parse("test"), RunMode::Test);
        assert_eq!(RunMode::parse("debug"), RunMode::Debug);
        assert_eq!(RunMode::parse(""), RunMode::Debug);
        assert_eq!(RunMode::parse("staging"), RunMode::Debug);
    }

    #[test]
    fn test_https_host_precedence() {
        let config = AppConfig {
            https_host: "secure.example.com".into(),
            http_host: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.https_host(), "secure.example.com");

        let config = AppConfig {
            http_host: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.https_host(), "example.com");

        let config = AppConfig::default();
        assert_eq!(config.https_host(), "localhost");
    }

    #[test]
    fn test_parse_bool_value() {
        assert_eq!(parse_bool_value("true"), Some(true));
        assert_eq!(parse_bool_value("TRUE"), Some(true));
        assert_eq!(parse_bool_value("1"), Some(true));
        assert_eq!(parse_bool_value("t"), Some(true));
        assert_eq!(parse_bool_value("false"), Some(false));
        assert_eq!(parse_bool_value("0"), Some(false));
        assert_eq!(parse_bool_value(""), None);
        assert_eq!(parse_bool_value("yes"), None);
    }
}
