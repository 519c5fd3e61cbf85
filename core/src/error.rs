use std::fmt;
use thiserror::Error;

/// The error type for provsign operations
#[derive(Error, Debug)]
#[error("{}", self.render())]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
    context: Vec<String>,
    retryable: bool,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request cannot be signed (missing required fields, malformed input, etc.)
    InvalidRequest,

    /// Bucket name is already owned by another account
    NameConflict,

    /// Network failure or timeout while talking to the provider
    Transport,

    /// Provider answered with a non-success status
    Provider,

    /// Key material does not have the expected ASN.1 shape
    MalformedKey,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, serialization, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            context: Vec::new(),
            retryable: false,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach a piece of context, rendered after the message.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Mark whether this error is safe to retry.
    pub fn set_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the bare message without context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the attached context entries.
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Check if the operation that produced this error can be retried.
    ///
    /// Signatures are time scoped, so a retry must sign the request again.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    fn render(&self) -> String {
        if self.context.is_empty() {
            return self.message.clone();
        }
        format!("{} ({})", self.message, self.context.join(", "))
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    /// Create a name conflict error
    pub fn name_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameConflict, message)
    }

    /// Create a transport error, always retryable.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message).set_retryable(true)
    }

    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Provider, message)
    }

    /// Create a malformed key error
    pub fn malformed_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedKey, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidRequest => write!(f, "invalid request"),
            ErrorKind::NameConflict => write!(f, "name conflict"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Provider => write!(f, "provider error"),
            ErrorKind::MalformedKey => write!(f, "malformed key"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::invalid_request(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_request(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::invalid_request(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::invalid_request(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_request(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
