//! Dynamic value representation for JSON data.
//!
//! This module provides the [`JsonValue`] enum which represents any value the
//! codec can store. It's the currency of the whole crate: the parser produces
//! it, the stringer consumes it, and the container types store it.
//!
//! ## Core Types
//!
//! - [`JsonValue`]: a closed tagged union over null, boolean, 32-bit integer,
//!   64-bit integer, finite double, string, array, and object
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use lenient_json::JsonValue;
//!
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! // Doubles are fallible: NaN and the infinities are rejected.
//! let double = JsonValue::try_from(1.5).unwrap();
//! assert!(JsonValue::try_from(f64::NAN).is_err());
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use lenient_json::JsonValue;
//!
//! let value = JsonValue::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use lenient_json::JsonValue;
//!
//! let value = JsonValue::from(42);
//! assert_eq!(value.as_i32(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::{coerce, Error, JsonArray, JsonObject};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any JSON value.
///
/// The variant set is closed: there is no boxed "any value" escape hatch.
/// Anything a caller wants to store must first convert into one of these
/// eight variants, which is what the `From`/`TryFrom` implementations and
/// [`JsonValue::wrap`] are for.
///
/// `Double` payloads must be finite. Every insertion API enforces this and
/// fails with [`Error::InvalidNumber`] otherwise; constructing the variant
/// directly is the one unchecked escape hatch and is on the caller.
///
/// # Examples
///
/// ```rust
/// use lenient_json::JsonValue;
///
/// let null = JsonValue::Null;
/// let num = JsonValue::Int(42);
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    /// The explicit JSON null, distinct from "no value at all".
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    /// Always finite; see the type-level docs.
    Double(f64),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is numeric (`Int`, `Long`, or `Double`).
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            JsonValue::Int(_) | JsonValue::Long(_) | JsonValue::Double(_)
        )
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// This is a strict view; for the coercing lookup rules use the
    /// container accessors (`get_bool`/`opt_bool`).
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// If the value is a 32-bit integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            JsonValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// If the value is an integer of either width, returns it widened to
    /// 64 bits. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(value) => Some(i64::from(*value)),
            JsonValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as a double. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int(value) => Some(f64::from(*value)),
            JsonValue::Long(value) => Some(*value as f64),
            JsonValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(value) => Some(value),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(value) => Some(value),
            _ => None,
        }
    }

    /// The variant's name, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Int(_) => "int",
            JsonValue::Long(_) => "long",
            JsonValue::Double(_) => "double",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// Converts an arbitrary convertible value into a `JsonValue`,
    /// returning `None` instead of an error when the conversion fails
    /// (a non-finite double, an out-of-range unsigned integer).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonValue;
    ///
    /// assert_eq!(JsonValue::wrap(42), Some(JsonValue::Int(42)));
    /// assert_eq!(JsonValue::wrap(f64::NAN), None);
    /// assert_eq!(JsonValue::wrap(None::<i32>), Some(JsonValue::Null));
    /// ```
    #[must_use]
    pub fn wrap<V>(value: V) -> Option<JsonValue>
    where
        V: TryInto<JsonValue>,
    {
        value.try_into().ok()
    }
}

/// The canonical textual representation: raw text for strings, round-trip
/// decimal for numbers, lowercase `true`/`false`, `null`, and compact JSON
/// for containers.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
            JsonValue::Int(value) => write!(f, "{}", value),
            JsonValue::Long(value) => write!(f, "{}", value),
            JsonValue::Double(value) => f.write_str(&coerce::double_to_string(*value)),
            JsonValue::String(value) => f.write_str(value),
            JsonValue::Array(value) => write!(f, "{}", value),
            JsonValue::Object(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(value) => serializer.serialize_bool(*value),
            JsonValue::Int(value) => serializer.serialize_i32(*value),
            JsonValue::Long(value) => serializer.serialize_i64(*value),
            JsonValue::Double(value) => serializer.serialize_f64(*value),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Array(value) => value.serialize(serializer),
            JsonValue::Object(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(int) => JsonValue::Int(int),
                    Err(_) => JsonValue::Long(value),
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(long) => match i32::try_from(long) {
                        Ok(int) => JsonValue::Int(int),
                        Err(_) => JsonValue::Long(long),
                    },
                    Err(_) => JsonValue::Double(value as f64),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.is_finite() {
                    Ok(JsonValue::Double(value))
                } else {
                    Err(E::custom("non-finite numbers are not supported"))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = JsonArray::new();
                while let Some(element) = seq.next_element()? {
                    array.push_slot(Some(element));
                }
                Ok(JsonValue::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = JsonObject::new();
                while let Some((name, value)) = map.next_entry::<String, JsonValue>()? {
                    object.insert(name, value);
                }
                Ok(JsonValue::Object(object))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i8> for JsonValue {
    fn from(value: i8) -> Self {
        JsonValue::Int(i32::from(value))
    }
}

impl From<i16> for JsonValue {
    fn from(value: i16) -> Self {
        JsonValue::Int(i32::from(value))
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Int(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Long(value)
    }
}

impl From<u8> for JsonValue {
    fn from(value: u8) -> Self {
        JsonValue::Int(i32::from(value))
    }
}

impl From<u16> for JsonValue {
    fn from(value: u16) -> Self {
        JsonValue::Int(i32::from(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Long(i64::from(value))
    }
}

impl From<char> for JsonValue {
    fn from(value: char) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl<T> From<Vec<T>> for JsonValue
where
    T: Into<JsonValue>,
{
    fn from(values: Vec<T>) -> Self {
        JsonValue::Array(values.into_iter().collect())
    }
}

impl<T> From<Option<T>> for JsonValue
where
    T: Into<JsonValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => JsonValue::Null,
        }
    }
}

impl TryFrom<f64> for JsonValue {
    type Error = Error;

    fn try_from(value: f64) -> crate::Result<Self> {
        coerce::check_double(value).map(JsonValue::Double)
    }
}

impl TryFrom<f32> for JsonValue {
    type Error = Error;

    fn try_from(value: f32) -> crate::Result<Self> {
        JsonValue::try_from(f64::from(value))
    }
}

impl TryFrom<u64> for JsonValue {
    type Error = Error;

    fn try_from(value: u64) -> crate::Result<Self> {
        match i64::try_from(value) {
            Ok(long) => Ok(JsonValue::Long(long)),
            Err(_) => Err(Error::type_mismatch("unsigned value", value, "long")),
        }
    }
}

impl TryFrom<u128> for JsonValue {
    type Error = Error;

    fn try_from(value: u128) -> crate::Result<Self> {
        match i64::try_from(value) {
            Ok(long) => Ok(JsonValue::Long(long)),
            Err(_) => Err(Error::type_mismatch("unsigned value", value, "long")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(JsonValue::from(true), JsonValue::Bool(true));
        assert_eq!(JsonValue::from(42i32), JsonValue::Int(42));
        assert_eq!(JsonValue::from(42i64), JsonValue::Long(42));
        assert_eq!(JsonValue::from("hi"), JsonValue::String("hi".to_string()));
        assert_eq!(JsonValue::from('x'), JsonValue::String("x".to_string()));
        assert_eq!(JsonValue::from(None::<i32>), JsonValue::Null);
        assert_eq!(JsonValue::from(Some(7)), JsonValue::Int(7));
    }

    #[test]
    fn test_try_from_double() {
        assert_eq!(JsonValue::try_from(1.5).unwrap(), JsonValue::Double(1.5));
        assert!(JsonValue::try_from(f64::NAN).is_err());
        assert!(JsonValue::try_from(f64::INFINITY).is_err());
        assert!(JsonValue::try_from(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(JsonValue::wrap(1u64), Some(JsonValue::Long(1)));
        assert_eq!(JsonValue::wrap(u64::MAX), None);
        assert_eq!(JsonValue::wrap(f64::NAN), None);
        assert_eq!(
            JsonValue::wrap(vec![1, 2]),
            Some(JsonValue::Array([1, 2].into_iter().collect()))
        );
    }

    #[test]
    fn test_strict_views() {
        let value = JsonValue::Long(7);
        assert_eq!(value.as_i64(), Some(7));
        assert_eq!(value.as_i32(), None);
        assert_eq!(value.as_f64(), Some(7.0));
        assert!(value.is_number());
        assert_eq!(value.type_name(), "long");
    }

    #[test]
    fn test_display_canonical_text() {
        assert_eq!(JsonValue::Null.to_string(), "null");
        assert_eq!(JsonValue::Bool(true).to_string(), "true");
        assert_eq!(JsonValue::Int(-3).to_string(), "-3");
        assert_eq!(JsonValue::Double(1.5).to_string(), "1.5");
        assert_eq!(JsonValue::Double(2.0).to_string(), "2");
        assert_eq!(
            JsonValue::String("plain".to_string()).to_string(),
            "plain"
        );
    }
}
