// src/errors.rs
use thiserror::Error;

/// Fallback shown whenever the backend gives us nothing better to say.
pub const GENERIC_FAILURE: &str = "The analysis failed. Please try again.";

/// Every way an experiment submission can fail, with the user-facing copy
/// as the display text. Transport errors are classified in the client
/// (timeout vs. connection vs. anything else) before they become variants.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Request timeout. The analysis is taking too long. Please try again.")]
    Timeout,

    #[error("Unable to connect to server. Please check your connection.")]
    Connection,

    // `message` is already the user-facing text (server-supplied or the
    // generic fallback); `status` is kept for logging only.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("{}", GENERIC_FAILURE)]
    Unexpected(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_and_connection_messages_are_distinct() {
        assert_ne!(
            PortalError::Timeout.to_string(),
            PortalError::Connection.to_string()
        );
    }

    #[test]
    fn backend_error_displays_server_message_verbatim() {
        let err = PortalError::Backend {
            status: 500,
            message: "Dataset not found".to_string(),
        };
        assert_eq!(err.to_string(), "Dataset not found");
    }

    #[test]
    fn generic_fallback_matches_backend_default() {
        let err = PortalError::Backend {
            status: 502,
            message: GENERIC_FAILURE.to_string(),
        };
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn unexpected_failure_displays_the_generic_message() {
        // A builder error is the cheapest real reqwest::Error to make.
        let transport = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = PortalError::Unexpected(transport);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }
}
