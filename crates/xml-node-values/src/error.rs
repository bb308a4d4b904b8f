//! Error types for node value construction

/// Result type for node value construction
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for node value construction.
///
/// Raised only while building a value; every accessor on the constructed
/// types is total and never produces an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction argument was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new invalid-argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
