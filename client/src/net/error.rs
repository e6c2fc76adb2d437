//! Failure kinds for a login attempt.
//!
//! Every variant is recoverable: the login page turns it into a single
//! inline message and the user may retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::storage::StorageError;

/// Transport-level failure raised before any HTTP response was available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Error returned by the authenticator and the session persister.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status or an empty/unparseable body.
    #[error("{0}")]
    Rejected(String),

    /// The server answered successfully but the body lacked `access_token` or `user`.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),

    /// No API base was configured, so nothing was attempted.
    #[error("no API base candidates configured")]
    NoCandidates,

    /// Writing the session to client storage failed.
    #[error("{0}")]
    Storage(String),
}

impl AuthError {
    /// Text that may be shown to the user verbatim, if this error carries any.
    pub fn raw_message(&self) -> Option<&str> {
        match self {
            Self::Network(msg) | Self::Rejected(msg) | Self::Storage(msg) => Some(msg.as_str()),
            Self::MalformedResponse(_) | Self::NoCandidates => None,
        }
    }
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
