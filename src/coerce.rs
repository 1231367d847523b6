//! Best-effort conversion of stored values to requested primitive types.
//!
//! These are the rules behind the containers' `get_*`/`opt_*` accessors.
//! Each conversion is an ordered sequence of explicit attempts (pass-through
//! first, then a string parse) with `None` meaning "not coercible". Nothing
//! in here allocates except the textual renderings.
//!
//! Also home to the numeric output formatting shared by the stringer and by
//! [`JsonValue`]'s `Display`.

use crate::{Error, JsonValue, Result};

/// Coerces to boolean: pass through, or a case-insensitive `"true"`/`"false"`
/// string match.
pub(crate) fn to_boolean(value: &JsonValue) -> Option<bool> {
    match value {
        JsonValue::Bool(value) => Some(*value),
        JsonValue::String(text) => {
            if text.eq_ignore_ascii_case("true") {
                Some(true)
            } else if text.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Coerces to double: numeric pass-through, or a floating-point string parse.
pub(crate) fn to_double(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Double(double) => Some(*double),
        JsonValue::Int(int) => Some(f64::from(*int)),
        JsonValue::Long(long) => Some(*long as f64),
        JsonValue::String(text) => text.parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerces to a 32-bit integer. Numeric variants convert lossily (64-bit
/// wraps, double truncates toward zero and saturates at the bounds);
/// strings must parse as an integer literal outright.
pub(crate) fn to_int(value: &JsonValue) -> Option<i32> {
    match value {
        JsonValue::Int(int) => Some(*int),
        JsonValue::Long(long) => Some(*long as i32),
        JsonValue::Double(double) => Some(*double as i32),
        JsonValue::String(text) => text.parse::<i32>().ok(),
        _ => None,
    }
}

/// Coerces to a 64-bit integer. A failed string parse is not retried as
/// double-then-truncate; the string must be an integer literal.
pub(crate) fn to_long(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Long(long) => Some(*long),
        JsonValue::Int(int) => Some(i64::from(*int)),
        JsonValue::Double(double) => Some(*double as i64),
        JsonValue::String(text) => text.parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerces to text: strings pass through, everything else renders its
/// canonical textual representation. Total for present values; absence is
/// handled at the container layer.
pub(crate) fn to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Gate for the finite-only invariant on stored doubles.
pub(crate) fn check_double(double: f64) -> Result<f64> {
    if double.is_finite() {
        Ok(double)
    } else {
        Err(Error::invalid_number(double))
    }
}

/// Renders a double the way the codec writes numbers: `-0` for negative
/// zero, a plain decimal integer when the value survives the round trip
/// through a (saturating) 64-bit integer cast, and Rust's shortest
/// round-trip decimal otherwise.
pub(crate) fn double_to_string(double: f64) -> String {
    if double == 0.0 && double.is_sign_negative() {
        return "-0".to_string();
    }
    let long = double as i64;
    if double == long as f64 {
        return long.to_string();
    }
    double.to_string()
}
