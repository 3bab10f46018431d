//! JSON output formatting for stillgrove.

use serde::Serialize;

use crate::error::StillgroveError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns a `Json` error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StillgroveError> {
    Ok(serde_json::to_string_pretty(value)?)
}
