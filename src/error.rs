//! Error types for repository contribution lookups.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller omitted or blanked a required field. Raised before any
    /// request is sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced an HTTP status (DNS, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The hosting API answered with a non-success status.
    #[error(transparent)]
    Hosting(#[from] HostingError),
}

impl Error {
    /// The hosting API error, if this is one.
    #[must_use]
    pub fn as_hosting(&self) -> Option<&HostingError> {
        match self {
            Self::Hosting(e) => Some(e),
            _ => None,
        }
    }
}

/// Typed errors for non-success hosting API responses.
///
/// Each variant corresponds to a category the caller can act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostingError {
    /// Raised on 403 and 429. The unauthenticated quota is small, so the
    /// message tells the caller to supply an access token.
    #[error("{message}")]
    RateLimited { status: u16, message: String },

    /// Raised on 404. `entity` names what was being looked up, e.g.
    /// `repository octo/demo (branch dev)`.
    #[error("{message}")]
    NotFound { entity: String, message: String },

    /// Any other non-success response.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl HostingError {
    /// Get the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::RateLimited { status, .. } | Self::Api { status, .. } => *status,
            Self::NotFound { .. } => 404,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RateLimited { message, .. }
            | Self::NotFound { message, .. }
            | Self::Api { message, .. } => message,
        }
    }

    /// Check if this error can be fixed by supplying a token.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosting_error_accessors() {
        let error = HostingError::NotFound {
            entity: "repository octo/demo (branch dev)".to_string(),
            message: "Not found: repository octo/demo (branch dev)".to_string(),
        };

        assert_eq!(error.status(), 404);
        assert_eq!(error.message(), "Not found: repository octo/demo (branch dev)");
        assert!(!error.is_rate_limited());
    }

    #[test]
    fn test_rate_limited_error() {
        let error = HostingError::RateLimited {
            status: 403,
            message: "Rate limit exceeded".to_string(),
        };

        assert_eq!(error.status(), 403);
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_error_displays_message_verbatim() {
        let error: Error = HostingError::Api {
            status: 502,
            message: "GitHub API error: 502 Bad Gateway".to_string(),
        }
        .into();

        assert_eq!(error.to_string(), "GitHub API error: 502 Bad Gateway");
        assert_eq!(error.as_hosting().map(HostingError::status), Some(502));
    }

    #[test]
    fn test_configuration_error_is_not_hosting() {
        let error = Error::Configuration("owner is required".to_string());
        assert!(error.as_hosting().is_none());
        assert_eq!(error.to_string(), "Configuration error: owner is required");
    }
}
