//! Global error types for the facade.
//!
//! Every failure category, from transport errors raised by the Graph client
//! to argument-shape errors raised by the picture resolver, is unified into
//! a single `FbError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using FbError.
pub type FbResult<T> = Result<T, FbError>;

/// Unified error type covering all error categories.
#[derive(Error, Debug)]
pub enum FbError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-JSON error response.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Authentication failed or no usable access token.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The Graph API answered with an error envelope.
    #[error("graph api error {code} ({error_type}): {message}")]
    GraphApi {
        /// Numeric Graph error code.
        code: i64,
        /// Graph error type, e.g. "GraphMethodException".
        error_type: String,
        /// Error message.
        message: String,
    },

    // -- Facade errors --
    /// Arguments do not match any recognised call shape.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The operation needs the current user but no session is active.
    #[error("no current user")]
    NoCurrentUser,

    /// An expected field is absent from a client response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A forwarded call was not understood by the underlying client.
    #[error("call to undefined method FacebookFacade::{0}()")]
    UnknownOperation(String),

    /// The client has no member with this name.
    #[error("unknown client method: {0}")]
    UnknownMethod(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FbError {
    /// Whether this error means "there is no current user", as opposed to a
    /// transport or API failure.
    pub fn is_no_current_user(&self) -> bool {
        matches!(self, FbError::NoCurrentUser)
    }
}

impl From<serde_json::Error> for FbError {
    fn from(e: serde_json::Error) -> Self {
        FbError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for FbError {
    fn from(e: toml::de::Error) -> Self {
        FbError::Config(e.to_string())
    }
}
