//! Error types and handling for the `Trippin` client

use thiserror::Error;

/// Message shown when the service rejects a request without a usable `detail`
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to generate itinerary";

/// Message shown when a transport failure carries no description
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Message shown when a success response cannot be read as an itinerary
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Received an invalid itinerary from the service";

/// Main error type for the `Trippin` client
#[derive(Error, Debug)]
pub enum TrippinError {
    /// Local input validation errors, never sent to the service
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The service answered with a non-success status
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// No response reached us (connection, DNS, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Success status but the body is not an itinerary
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TrippinError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new service error from a status code and server message
    pub fn service<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new malformed response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the message presented to the user when a request settles with this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TrippinError::Validation { message } => message.clone(),
            TrippinError::Service { message, .. } => message.clone(),
            TrippinError::Transport { message } if message.trim().is_empty() => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            TrippinError::Transport { message } => message.clone(),
            TrippinError::MalformedResponse { .. } => MALFORMED_RESPONSE_MESSAGE.to_string(),
            TrippinError::Config { .. } => {
                "Configuration error. Please check your config file and service URL.".to_string()
            }
            TrippinError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
