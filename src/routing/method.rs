//! HTTP method enumeration.

use std::str::FromStr;

/// Error type for route construction.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The method string is outside the supported set.
    #[error("unrecognized HTTP method: {0:?}")]
    UnknownMethod(String),
}

/// The set of HTTP methods a route can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
    Patch,
    Put,
    Options,
    Head,
}

impl Method {
    /// All supported methods, in a stable order.
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Delete,
        Method::Patch,
        Method::Put,
        Method::Options,
        Method::Head,
    ];

    /// Canonical (uppercase) method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
        }
    }
}

impl FromStr for Method {
    type Err = RouteError;

    /// Case-insensitive parse; anything outside the supported set errors.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "delete" => Ok(Method::Delete),
            "patch" => Ok(Method::Patch),
            "put" => Ok(Method::Put),
            "options" => Ok(Method::Options),
            "head" => Ok(Method::Head),
            _ => Err(RouteError::UnknownMethod(raw.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        for raw in ["get", "post", "delete", "patch", "put", "options", "head"] {
            let method: Method = raw.parse().unwrap();
            assert_eq!(method.as_str().to_ascii_lowercase(), raw);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Patch".parse::<Method>().unwrap(), Method::Patch);
    }

    #[test]
    fn test_parse_unknown_method_errors() {
        for raw in ["brew", "trace", "connect", ""] {
            assert!(raw.parse::<Method>().is_err());
        }
    }
}
