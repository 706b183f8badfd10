//! Error types for `pstore-core`.
//!
//! Local operations (configuration, credential storage) return
//! [`CoreResult<T>`]. Remote calls return [`ApiError`], which the
//! synchronizer turns into events instead of propagating.

use std::path::PathBuf;

/// Unified error type for local core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A credential was empty or otherwise unusable.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The HTTP client could not be built from the configuration.
    #[error("http client error: {0}")]
    Http(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `pstore-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Outcome classes of a call against the storage API.
///
/// Only [`ApiError::InvalidCredential`] gets special handling; everything
/// else the server or transport can do wrong is a [`ApiError::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No credential is stored; the request was never sent.
    #[error("not authenticated")]
    Unauthenticated,

    /// The server rejected the credential as invalid or expired.
    #[error("credential rejected by server")]
    InvalidCredential,

    /// Timeout, connection failure, non-2xx status or undecodable body.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns `true` for the variants that end the session.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::InvalidCredential)
    }
}
