use thiserror::Error;

/// Failure talking to the remote data service.
///
/// Callers treat every variant the same way ("operation failed"); the variants
/// only exist so logs say what went wrong.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} failed: {status} - {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid response body for {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid service URL {0:?}")]
    InvalidUrl(String),
}

impl RemoteError {
    pub fn status(operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        RemoteError::Status {
            operation,
            status,
            body: body.into(),
        }
    }

    /// HTTP status for `Status` errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            RemoteError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
