//! The JSON array container.
//!
//! [`JsonArray`] is a dense, 0-based sequence of slots. A slot is either
//! occupied by a [`JsonValue`] (possibly the explicit null) or vacant.
//! Vacancy is how index-assignment padding and the parser's implicit null
//! elements are represented, and it is distinct from an explicit null the
//! same way an absent object key is.
//!
//! ## Examples
//!
//! ```rust
//! use lenient_json::JsonArray;
//!
//! let mut array = JsonArray::new();
//! array.push(1).unwrap();
//! array.put(3, "pad").unwrap();
//!
//! assert_eq!(array.len(), 4);
//! assert!(array.is_null(1));
//! assert!(array.is_null(2));
//! assert_eq!(array.opt_string(3, ""), "pad");
//! ```

use crate::{coerce, Error, JsonObject, JsonStringer, JsonTokener, JsonValue, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered, index-addressable sequence of JSON values.
///
/// # Examples
///
/// ```rust
/// use lenient_json::JsonArray;
///
/// let array: JsonArray = "[1, \"two\", null]".parse().unwrap();
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.get_i32(0).unwrap(), 1);
/// assert_eq!(array.get_string(1).unwrap(), "two");
/// assert!(array.is_null(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonArray {
    slots: Vec<Option<JsonValue>>,
}

impl JsonArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        JsonArray { slots: Vec::new() }
    }

    /// Number of slots, vacant ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `index` is out of range, vacant, or an explicit
    /// null.
    #[must_use]
    pub fn is_null(&self, index: usize) -> bool {
        self.opt(index).map_or(true, JsonValue::is_null)
    }

    /// Returns the value at `index`, or `None` when out of range or vacant.
    #[must_use]
    pub fn opt(&self, index: usize) -> Option<&JsonValue> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns the value at `index`, failing when out of range or vacant.
    /// An explicit null is a present value and is returned as such.
    pub fn get(&self, index: usize) -> Result<&JsonValue> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| Error::missing(index))
    }

    /// Appends a value.
    ///
    /// Accepts anything convertible to [`JsonValue`]; non-finite doubles
    /// are rejected with [`Error::InvalidNumber`].
    pub fn push<V>(&mut self, value: V) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        let value = value.try_into()?;
        if let JsonValue::Double(double) = value {
            coerce::check_double(double)?;
        }
        self.slots.push(Some(value));
        Ok(self)
    }

    /// Assigns `value` at `index`, padding any intervening slots with
    /// vacant entries when `index` is at or past the current length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonArray;
    ///
    /// let mut array = JsonArray::new();
    /// array.put(2, true).unwrap();
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.opt(0), None);
    /// assert!(array.get_bool(2).unwrap());
    /// ```
    pub fn put<V>(&mut self, index: usize, value: V) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        let value = value.try_into()?;
        if let JsonValue::Double(double) = value {
            coerce::check_double(double)?;
        }
        while self.slots.len() <= index {
            self.slots.push(None);
        }
        self.slots[index] = Some(value);
        Ok(self)
    }

    /// Removes the slot at `index`, shifting all later slots down by one.
    /// Out of range is a no-op; a removed vacant slot returns `None` like
    /// an out-of-range index does.
    pub fn remove(&mut self, index: usize) -> Option<JsonValue> {
        if index < self.slots.len() {
            self.slots.remove(index)
        } else {
            None
        }
    }

    /// Iterates over the slots; vacant slots yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&JsonValue>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Coercing boolean lookup; fails when out of range, vacant, null, or
    /// uncoercible.
    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.coerced(index, "boolean", coerce::to_boolean)
    }

    /// Coercing 32-bit integer lookup.
    pub fn get_i32(&self, index: usize) -> Result<i32> {
        self.coerced(index, "int", coerce::to_int)
    }

    /// Coercing 64-bit integer lookup.
    pub fn get_i64(&self, index: usize) -> Result<i64> {
        self.coerced(index, "long", coerce::to_long)
    }

    /// Coercing double lookup.
    pub fn get_f64(&self, index: usize) -> Result<f64> {
        self.coerced(index, "double", coerce::to_double)
    }

    /// Coercing string lookup; non-string values render their canonical
    /// textual representation.
    pub fn get_string(&self, index: usize) -> Result<String> {
        self.coerced(index, "string", |value| Some(coerce::to_text(value)))
    }

    /// Array lookup; no coercion across container types.
    pub fn get_array(&self, index: usize) -> Result<&JsonArray> {
        match self.present(index)? {
            JsonValue::Array(array) => Ok(array),
            other => Err(Error::type_mismatch(index, other, "array")),
        }
    }

    /// Object lookup; no coercion across container types.
    pub fn get_object(&self, index: usize) -> Result<&JsonObject> {
        match self.present(index)? {
            JsonValue::Object(object) => Ok(object),
            other => Err(Error::type_mismatch(index, other, "object")),
        }
    }

    /// Coercing boolean lookup that never fails.
    #[must_use]
    pub fn opt_bool(&self, index: usize, fallback: bool) -> bool {
        self.opt(index).and_then(coerce::to_boolean).unwrap_or(fallback)
    }

    /// Coercing 32-bit integer lookup that never fails.
    #[must_use]
    pub fn opt_i32(&self, index: usize, fallback: i32) -> i32 {
        self.opt(index).and_then(coerce::to_int).unwrap_or(fallback)
    }

    /// Coercing 64-bit integer lookup that never fails.
    #[must_use]
    pub fn opt_i64(&self, index: usize, fallback: i64) -> i64 {
        self.opt(index).and_then(coerce::to_long).unwrap_or(fallback)
    }

    /// Coercing double lookup that never fails.
    #[must_use]
    pub fn opt_f64(&self, index: usize, fallback: f64) -> f64 {
        self.opt(index).and_then(coerce::to_double).unwrap_or(fallback)
    }

    /// Coercing string lookup that never fails.
    #[must_use]
    pub fn opt_string(&self, index: usize, fallback: &str) -> String {
        match self.opt(index) {
            Some(value) if !value.is_null() => coerce::to_text(value),
            _ => fallback.to_string(),
        }
    }

    /// Array lookup that never fails.
    #[must_use]
    pub fn opt_array(&self, index: usize) -> Option<&JsonArray> {
        self.opt(index).and_then(JsonValue::as_array)
    }

    /// Object lookup that never fails.
    #[must_use]
    pub fn opt_object(&self, index: usize) -> Option<&JsonObject> {
        self.opt(index).and_then(JsonValue::as_object)
    }

    /// Encodes each element as standalone JSON and concatenates them with
    /// the literal `separator`, without surrounding brackets. Vacant slots
    /// render as `null`; an empty array yields an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonArray;
    ///
    /// let array: JsonArray = "[1, \"two\", null]".parse().unwrap();
    /// assert_eq!(array.join(" + ").unwrap(), "1 + \"two\" + null");
    /// ```
    pub fn join(&self, separator: &str) -> Result<String> {
        let mut stringer = JsonStringer::new();
        stringer.open_bare();
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                stringer.raw(separator);
            }
            stringer.write_value(slot.as_ref().unwrap_or(&JsonValue::Null))?;
        }
        Ok(stringer.finish().unwrap_or_default())
    }

    /// Pretty-prints with `indent` spaces per nesting level; 0 is compact.
    pub fn to_string_pretty(&self, indent: usize) -> Result<String> {
        let mut stringer = JsonStringer::with_indent(indent);
        self.write(&mut stringer)?;
        Ok(stringer.finish().unwrap_or_default())
    }

    // Parser-side insertion of an element or an implicit-null vacancy.
    pub(crate) fn push_slot(&mut self, slot: Option<JsonValue>) {
        self.slots.push(slot);
    }

    pub(crate) fn write(&self, stringer: &mut JsonStringer) -> Result<()> {
        stringer.array()?;
        for slot in &self.slots {
            stringer.write_value(slot.as_ref().unwrap_or(&JsonValue::Null))?;
        }
        stringer.end_array()?;
        Ok(())
    }

    fn present(&self, index: usize) -> Result<&JsonValue> {
        let value = self.get(index)?;
        if value.is_null() {
            return Err(Error::missing(index));
        }
        Ok(value)
    }

    fn coerced<T>(
        &self,
        index: usize,
        requested: &'static str,
        convert: impl Fn(&JsonValue) -> Option<T>,
    ) -> Result<T> {
        let value = self.present(index)?;
        convert(value).ok_or_else(|| Error::type_mismatch(index, value, requested))
    }
}

/// Compact JSON. An internal serialization failure renders as empty output;
/// the path is unreachable for trees built through the checked insertion
/// APIs.
impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stringer = JsonStringer::new();
        if self.write(&mut stringer).is_ok() {
            if let Some(text) = stringer.finish() {
                f.write_str(&text)?;
            }
        }
        Ok(())
    }
}

impl FromStr for JsonArray {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match JsonTokener::new(text).next_value()? {
            JsonValue::Array(array) => Ok(array),
            other => Err(Error::type_mismatch("document root", &other, "array")),
        }
    }
}

impl From<Vec<JsonValue>> for JsonArray {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonArray {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<V> FromIterator<V> for JsonArray
where
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        JsonArray {
            slots: iter.into_iter().map(|value| Some(value.into())).collect(),
        }
    }
}

impl Serialize for JsonArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for slot in &self.slots {
            seq.serialize_element(slot)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for JsonArray {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct ArrayVisitor;

        impl<'de> Visitor<'de> for ArrayVisitor {
            type Value = JsonArray;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON array")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut array = JsonArray::new();
                while let Some(element) = seq.next_element::<JsonValue>()? {
                    array.push_slot(Some(element));
                }
                Ok(array)
            }
        }

        deserializer.deserialize_seq(ArrayVisitor)
    }
}
