//! Error types for chain state lookups.

use jsonrpsee::core::ClientError;
use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading chain state.
///
/// The "valid absence" outcomes of a lookup (no account record, no identity,
/// non-text display name) are not errors and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport unavailable, handshake failed, request timed out or the node
    /// rejected the call. Recoverable by retrying or reconnecting.
    #[error("connection error: {0}")]
    Connection(String),

    /// The node answered but the payload did not match the expected schema,
    /// usually after a runtime upgrade changed a storage layout.
    #[error("decode error: {0}")]
    Decode(String),

    /// The caller supplied an address that is not valid SS58.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Whether retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Connection(_))
    }
}

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::ParseError(e) => Error::Decode(format!("malformed RPC response: {}", e)),
            ClientError::RequestTimeout => Error::Connection("request timed out".into()),
            other => Error::Connection(other.to_string()),
        }
    }
}

impl From<scale_codec::Error> for Error {
    fn from(e: scale_codec::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::Decode(format!("invalid hex payload: {}", e))
    }
}
