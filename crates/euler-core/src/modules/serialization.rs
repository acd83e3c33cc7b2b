use crate::domain::{EulerError, EulerResult};
use serde::Serialize;

/// Fixed-point rendering. Exact `-0.0` prints unsigned; a tiny negative such
/// as `-1e-17` keeps its sign (`-0.0000000`).
pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:>width$.precision$}")
}

/// Shortest round-trip rendering (`1`, `-0.5`, `12.25`) used for user inputs
/// echoed back into formulas.
pub fn format_plain_f64(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> EulerResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| {
        EulerError::internal("RUN.JSON_EXPORT", format!("failed to serialize output: {source}"))
    })
}
