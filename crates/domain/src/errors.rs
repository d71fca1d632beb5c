use thiserror::Error;

/// Failure of a single DoH query.
///
/// Every variant belongs to exactly one [`ErrorKind`]; callers that only
/// care about the broad category should match on [`DohError::kind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DohError {
    #[error("Request method not allowed: {0} (expected GET or POST)")]
    MethodNotAllowed(String),

    #[error("Failed to encode DNS query: {0}")]
    Encoding(String),

    #[error("DoH request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Timeout waiting for DoH response from {url}")]
    TransportTimeout { url: String },

    #[error("DoH server {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode DNS response: {0}")]
    Decoding(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMethod,
    Encoding,
    Transport,
    Decoding,
}

impl DohError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DohError::MethodNotAllowed(_) => ErrorKind::InvalidMethod,
            DohError::Encoding(_) => ErrorKind::Encoding,
            DohError::Transport { .. }
            | DohError::TransportTimeout { .. }
            | DohError::HttpStatus { .. } => ErrorKind::Transport,
            DohError::Decoding(_) => ErrorKind::Decoding,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}
