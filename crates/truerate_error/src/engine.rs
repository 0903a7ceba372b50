//! Error types for the billing engine.
//!
//! Every variant is a user-input validation failure. The engine never raises
//! on internally-computed values; all arithmetic is total over the validated
//! domain. The `Display` text of each kind is the user-facing message the
//! HTTP layer returns verbatim.

/// Error kinds for plan validation and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum EngineErrorKind {
    /// A required field is absent or blank.
    #[display("missing input: {}", _0)]
    MissingField(String),

    /// A field could not be parsed as a finite number.
    #[display("invalid number for input: {}", _0)]
    InvalidNumber(String),

    /// Usage is zero or negative; the true rate would be undefined.
    #[display("usage must be greater than zero")]
    NonPositiveUsage,

    /// A later tier limit does not exceed an earlier one.
    #[display("{}", _0)]
    TierOrdering(String),

    /// The request named a plan type the engine does not know.
    #[display("unknown plan type: {}", _0)]
    UnknownPlanType(String),

    /// The request body was not a JSON object.
    #[display("request body must be a JSON object")]
    MalformedBody,
}

/// Engine error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Engine Error: {} at line {} in {}", kind, line, file)]
pub struct EngineError {
    /// The error kind.
    pub kind: EngineErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Create a new engine error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// The user-facing validation message, without location noise.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
