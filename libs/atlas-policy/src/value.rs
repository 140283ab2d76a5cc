//! Numeric coercion over polymorphic clause values
//!
//! Rule and observed values arrive as `serde_json::Value` (absent = Null).
//! These helpers narrow them into the numeric domains the comparison and
//! delta paths work in.

use serde_json::Value;

use crate::error::{PolicyError, Result};

/// Coerce a value to a signed 64-bit integer
///
/// An integral JSON number is used as-is; any other JSON number is narrowed
/// to its integer value; anything else is rendered to text and parsed as a
/// base-10 integer literal.
pub(crate) fn as_long(value: &Value) -> Result<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
        if let Some(f) = n.as_f64() {
            return Ok(f as i64);
        }
    }
    let text = value_text(value);
    text.trim()
        .parse::<i64>()
        .map_err(|_| PolicyError::invalid_integer(text))
}

/// Parse a value generically into a floating-point number
///
/// Used for the float comparison path: a JSON number is read as a double,
/// anything else is rendered to text and parsed.
pub(crate) fn parse_double(value: &Value) -> Result<f64> {
    if let Value::Number(n) = value {
        if let Some(f) = n.as_f64() {
            return Ok(f);
        }
    }
    let text = value_text(value);
    text.trim()
        .parse::<f64>()
        .map_err(|_| PolicyError::invalid_number(text))
}

/// Validate a count-style numeric field (e.g. a replica count)
///
/// Accepts integral numbers and integral numeric text; rejects absent
/// values, booleans, non-numeric text, and fractional values. This is the
/// shared routine `Operand::delta` runs both of its inputs through.
pub fn coerce_count(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 => Ok(f as i64),
                _ => Err(PolicyError::invalid_number(n.to_string())),
            }
        },
        Value::String(s) => {
            let text = s.trim();
            if let Ok(i) = text.parse::<i64>() {
                return Ok(i);
            }
            match text.parse::<f64>() {
                Ok(f) if f.fract() == 0.0 => Ok(f as i64),
                _ => Err(PolicyError::invalid_number(s.clone())),
            }
        },
        other => Err(PolicyError::invalid_number(value_text(other))),
    }
}

/// Text form of a value for rendering and parse errors
///
/// Strings render without JSON quoting; everything else uses its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
