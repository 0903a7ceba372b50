//! Numeric field extraction from a JSON request body.
//!
//! Calculator forms submit every field as a string; API callers send
//! numbers. Both are accepted. A blank or null value counts as absent, so
//! an empty optional input never turns into a parse error.

use serde_json::{Map, Value};
use truerate_error::{EngineError, EngineErrorKind, EngineResult};

/// Extract a required numeric field.
///
/// # Errors
///
/// `MissingField` when the key is absent, null, or blank; `InvalidNumber`
/// when the value is not a finite number or numeric string.
pub(crate) fn required(body: &Map<String, Value>, key: &str) -> EngineResult<f64> {
    optional(body, key)?.ok_or_else(|| EngineError::new(EngineErrorKind::MissingField(key.into())))
}

/// Extract an optional numeric field, treating blank and null as absent.
///
/// # Errors
///
/// `InvalidNumber` when a present value cannot be parsed as a finite number.
pub(crate) fn optional(body: &Map<String, Value>, key: &str) -> EngineResult<Option<f64>> {
    let invalid = || EngineError::new(EngineErrorKind::InvalidNumber(key.into()));

    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let value = n.as_f64().ok_or_else(invalid)?;
            if value.is_finite() {
                Ok(Some(value))
            } else {
                Err(invalid())
            }
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Some(value)),
                _ => Err(invalid()),
            }
        }
        Some(_) => Err(invalid()),
    }
}

/// Extract and validate the usage field. Rejects non-positive usage before
/// any arithmetic runs; the true rate is undefined at zero.
pub(crate) fn usage(body: &Map<String, Value>) -> EngineResult<f64> {
    let usage = required(body, "usage")?;
    if usage > 0.0 {
        Ok(usage)
    } else {
        Err(EngineError::new(EngineErrorKind::NonPositiveUsage))
    }
}
