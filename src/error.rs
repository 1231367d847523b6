//! Error types for parsing, serialization, and value access.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: malformed input text, with the character offset and
//!   the full input for context
//! - **Nesting errors**: [`JsonStringer`](crate::JsonStringer) calls that are
//!   illegal in the current lexical scope
//! - **Missing values**: a `get_*` accessor found no usable value (absent
//!   key, out-of-range index, or an explicit null)
//! - **Type mismatches**: a stored value could not be coerced to the
//!   requested type
//! - **Invalid numbers**: NaN or an infinity reached a numeric insertion
//!   point
//!
//! All errors are informational and unrecoverable at the point raised; the
//! `opt_*` accessor family is the caller-facing recovery mechanism.
//!
//! ## Examples
//!
//! ```rust
//! use lenient_json::{parse, Error};
//!
//! let result = parse("{\"open\": ");
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//! ```

use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// Alias for `std::result::Result` with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors raised by the codec.
///
/// Each variant carries the context needed to diagnose the failure.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Lexical or structural error found while parsing.
    #[error("{msg} at character {offset} of {input}")]
    Syntax {
        msg: String,
        offset: usize,
        input: String,
    },

    /// A stringer call that is illegal in its current scope.
    #[error("{msg}")]
    Nesting { msg: String },

    /// A `get_*` accessor found no usable value at the key or index.
    #[error("value at {location} is null or missing")]
    MissingValue { location: String },

    /// A stored value could not be coerced to the requested type.
    #[error("value {actual} at {location} cannot be coerced to {requested}")]
    TypeMismatch {
        location: String,
        actual: String,
        requested: &'static str,
    },

    /// NaN or an infinity reached a numeric insertion point.
    #[error("forbidden numeric value: {value}")]
    InvalidNumber { value: f64 },
}

impl Error {
    /// Creates a syntax error carrying the offset and the full input text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::Error;
    ///
    /// let err = Error::syntax("Unterminated array", 12, "[1, 2, [3, 4");
    /// assert!(err.to_string().contains("at character 12"));
    /// ```
    pub fn syntax(msg: impl Into<String>, offset: usize, input: impl Into<String>) -> Self {
        Error::Syntax {
            msg: msg.into(),
            offset,
            input: input.into(),
        }
    }

    /// Creates a nesting error for a scope-stack violation.
    pub fn nesting(msg: impl Into<String>) -> Self {
        Error::Nesting { msg: msg.into() }
    }

    /// Creates a missing-value error for the given key or index.
    pub fn missing(location: impl fmt::Display) -> Self {
        Error::MissingValue {
            location: location.to_string(),
        }
    }

    /// Creates a type-mismatch error carrying the offending location, the
    /// actual value's rendering, and the requested type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::Error;
    ///
    /// let err = Error::type_mismatch("\"age\"", "\"ten\"", "int");
    /// assert!(err.to_string().contains("cannot be coerced to int"));
    /// ```
    pub fn type_mismatch(
        location: impl fmt::Display,
        actual: impl fmt::Display,
        requested: &'static str,
    ) -> Self {
        Error::TypeMismatch {
            location: location.to_string(),
            actual: actual.to_string(),
            requested,
        }
    }

    /// Creates an invalid-number error for a non-finite double.
    pub fn invalid_number(value: f64) -> Self {
        Error::InvalidNumber { value }
    }
}

// Lets infallible conversions satisfy the generic insertion bounds on
// `put`/`push`/`value`.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
