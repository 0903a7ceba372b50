//! Error types for the TrueRate workspace.
//!
//! This crate provides the foundation error types used by the billing engine
//! and the HTTP server.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use truerate_error::{EngineError, EngineErrorKind, TrueRateResult};
//!
//! fn parse_usage(raw: Option<f64>) -> TrueRateResult<f64> {
//!     match raw {
//!         Some(usage) if usage > 0.0 => Ok(usage),
//!         Some(_) => Err(EngineError::new(EngineErrorKind::NonPositiveUsage))?,
//!         None => Err(EngineError::new(EngineErrorKind::MissingField("usage".into())))?,
//!     }
//! }
//!
//! assert!(parse_usage(Some(0.0)).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod server;

pub use engine::{EngineError, EngineErrorKind, EngineResult};
pub use error::{TrueRateError, TrueRateErrorKind, TrueRateResult};
pub use server::{ServerError, ServerErrorKind};
