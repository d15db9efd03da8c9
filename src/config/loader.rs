//! Configuration loading from the process environment.

use crate::config::schema::{self, AppConfig, RunMode};

/// Error type for configuration problems that must stop startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable required by the current flag combination is missing.
    #[error("{0} must be set when {on} is enabled", on = schema::APP_HTTPS_ON)]
    MissingVar(&'static str),
}

/// Load a `.env` file into the process environment, if one exists.
///
/// Absence of the file is the normal case outside local development.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Read the run mode from the process environment.
///
/// Unset or unrecognized values fall back to `Debug`.
pub fn run_mode() -> RunMode {
    RunMode::parse(&env_string(schema::MODE))
}

/// Snapshot the listener flags from the environment.
pub fn load_config() -> AppConfig {
    AppConfig {
        https_on: env_flag(schema::APP_HTTPS_ON),
        redirect_to_https: env_flag(schema::APP_REDIRECT_HTTP_TO_HTTPS),
        cert_file: env_string(schema::APP_HTTPS_CERT_FILE_PATH),
        key_file: env_string(schema::APP_HTTPS_KEY_FILE_PATH),
        https_host: env_string(schema::APP_HTTPS_HOST),
        http_host: env_string(schema::APP_HTTP_HOST),
    }
}

/// Certificate and key paths, required once HTTPS is enabled.
pub fn tls_files(config: &AppConfig) -> Result<(&str, &str), ConfigError> {
    if config.cert_file.is_empty() {
        return Err(ConfigError::MissingVar(schema::APP_HTTPS_CERT_FILE_PATH));
    }
    if config.key_file.is_empty() {
        return Err(ConfigError::MissingVar(schema::APP_HTTPS_KEY_FILE_PATH));
    }
    Ok((&config.cert_file, &config.key_file))
}

fn env_string(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Read a boolean flag, degrading to `false` on unparsable input.
///
/// Unset and empty are the normal "off" state; anything else that fails to
/// parse gets a warning rather than silence.
fn env_flag(name: &str) -> bool {
    let raw = env_string(name);
    if raw.is_empty() {
        return false;
    }
    match schema::parse_bool_value(&raw) {
        Some(value) => value,
        None => {
            tracing::warn!(var = name, value = %raw, "unparsable boolean flag, treating as false");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_files_required_fields() {
        let config = AppConfig {
            cert_file: "cert.pem".into(),
            key_file: "key.pem".into(),
            ..Default::default()
        };
        let (cert, key) = tls_files(&config).unwrap();
        assert_eq!(cert, "cert.pem");
        assert_eq!(key, "key.pem");

        let config = AppConfig {
            key_file: "key.pem".into(),
            ..Default::default()
        };
        assert!(tls_files(&config).is_err());

        let config = AppConfig {
            cert_file: "cert.pem".into(),
            ..Default::default()
        };
        assert!(tls_files(&config).is_err());
    }
}
