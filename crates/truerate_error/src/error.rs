//! Top-level error wrapper types.

use crate::{EngineError, ServerError};

/// The foundation error enum for the TrueRate workspace.
///
/// # Examples
///
/// ```
/// use truerate_error::{EngineError, EngineErrorKind, TrueRateError};
///
/// let engine_err = EngineError::new(EngineErrorKind::NonPositiveUsage);
/// let err: TrueRateError = engine_err.into();
/// assert!(format!("{}", err).contains("usage"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TrueRateErrorKind {
    /// Plan validation or evaluation error.
    #[from(EngineError)]
    Engine(EngineError),
    /// HTTP server error.
    #[from(ServerError)]
    Server(ServerError),
}

/// TrueRate error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("TrueRate Error: {}", _0)]
pub struct TrueRateError(Box<TrueRateErrorKind>);

impl TrueRateError {
    /// Create a new error from a kind.
    pub fn new(kind: TrueRateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TrueRateErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TrueRateErrorKind
impl<T> From<T> for TrueRateError
where
    T: Into<TrueRateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for TrueRate operations.
pub type TrueRateResult<T> = std::result::Result<T, TrueRateError>;
