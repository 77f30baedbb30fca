use thiserror::Error;

/// Faults that can occur while looking up a banner
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error {status}: {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Coarse classification of a [`LookupError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    UnexpectedStatus,
    InvalidConfig,
}

impl LookupError {
    /// Build an `UnexpectedStatus` error from a response status and the
    /// reason phrase the server sent
    pub fn unexpected_status(status: reqwest::StatusCode, status_text: impl Into<String>) -> Self {
        LookupError::UnexpectedStatus {
            status: status.as_u16(),
            status_text: status_text.into(),
        }
    }

    /// Like [`LookupError::unexpected_status`], using the standard reason phrase
    pub fn unexpected_canonical_status(status: reqwest::StatusCode) -> Self {
        Self::unexpected_status(status, status.canonical_reason().unwrap_or_default())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Transport(_) => ErrorKind::Transport,
            LookupError::Decode(_) => ErrorKind::Decode,
            LookupError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            LookupError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }
}

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;
