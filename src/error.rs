//! Custom error types for release note updates.

use thiserror::Error;

/// Main error type for release-notes-updater operations.
#[derive(Error, Debug)]
pub enum UpdaterError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid git remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    // Forge/API errors
    #[error("Release not found: {0}")]
    ReleaseNotFound(String),

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using UpdaterError
pub type Result<T> = std::result::Result<T, UpdaterError>;

impl UpdaterError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for UpdaterError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for UpdaterError {
    fn from(err: octocrab::Error) -> Self {
        use reqwest::StatusCode;

        match &err {
            octocrab::Error::GitHub { source, .. } => {
                if source.message.contains("rate limit") {
                    Self::RateLimitExceeded
                } else if source.status_code == StatusCode::NOT_FOUND {
                    Self::ReleaseNotFound(source.message.clone())
                } else if source.status_code == StatusCode::UNAUTHORIZED
                    || source.status_code == StatusCode::FORBIDDEN
                {
                    Self::AuthenticationError(source.message.clone())
                } else {
                    Self::ForgeError(format!("GitHub API error: {}", err))
                }
            }
            _ => Self::NetworkError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = UpdaterError::forge("API call failed");
        assert_eq!(err.to_string(), "Forge operation failed: API call failed");

        let err = UpdaterError::invalid_config("missing field");
        assert_eq!(err.to_string(), "Invalid configuration: missing field");

        let err = UpdaterError::invalid_args("release-id must be numeric");
        assert_eq!(
            err.to_string(),
            "Invalid arguments: release-id must be numeric"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = UpdaterError::forge("API call failed");
        assert!(matches!(err, UpdaterError::ForgeError(_)));

        let err = UpdaterError::invalid_config("missing field");
        assert!(matches!(err, UpdaterError::InvalidConfig(_)));

        let err = UpdaterError::invalid_args("bad id");
        assert!(matches!(err, UpdaterError::InvalidArgs(_)));
    }
}
