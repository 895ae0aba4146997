//! Error types shared by the gateway, configuration and view layers.

use thiserror::Error;

/// Common result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a single remote call. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// Invalid or incomplete connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("invalid configuration: {0}")]
    Parse(String),
}

/// Outcome of a mutation followed by a full re-fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Blank input, rejected before reaching the gateway
    #[error("nothing to submit")]
    Blank,

    /// The write itself failed; nothing changed remotely
    #[error("mutation failed: {0}")]
    Mutation(GatewayError),

    /// The write succeeded but the re-fetch failed
    #[error("refresh failed: {0}")]
    Refresh(GatewayError),
}

impl SyncError {
    /// Whether the remote collection was changed before the failure
    pub fn mutation_applied(&self) -> bool {
        matches!(self, SyncError::Refresh(_))
    }
}
