// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Separates config, validation, transport, remote, and decode failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No response from {endpoint}")]
    NoResponse { endpoint: String },

    #[error("Remote error {status} on {endpoint}")]
    Remote { endpoint: String, status: u16 },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Validation(_) => 3,
            Error::Transport(_) => 4,
            Error::NoResponse { .. } => 5,
            Error::Remote { .. } => 6,
            Error::Decode(_) => 7,
            Error::Filesystem(_) => 8,
        }
    }

    /// HTTP status carried by a remote error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
