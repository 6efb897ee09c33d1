//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`RegistryError`] - Malformed command registrations
//! - [`FetchError`] - Network/fetch-related errors for image previews
//! - [`ConfigError`] - Embedded configuration that fails to parse

use thiserror::Error;

/// Command registration errors.
///
/// These signal a programming error and are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Name is empty, contains whitespace, or is not lower-case.
    #[error("invalid command name '{0}' (use a single lower-case word)")]
    InvalidName(String),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("{status} {reason}")]
    Http { status: u16, reason: String },
    /// Failed to read response body
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}

/// Configuration asset errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid terminal options: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_reason_phrase() {
        let err = FetchError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn test_registry_error_names_command() {
        let err = RegistryError::InvalidName("Help".to_string());
        assert!(err.to_string().contains("'Help'"));
    }
}
