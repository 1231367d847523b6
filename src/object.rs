//! The JSON object container.
//!
//! [`JsonObject`] maps string keys to [`JsonValue`]s. Key absence and an
//! explicit null mapping are deliberately different states: removing a key
//! and mapping it to `JsonValue::Null` are both observable, independently,
//! through [`has`](JsonObject::has), [`is_null`](JsonObject::is_null), and
//! [`opt`](JsonObject::opt).
//!
//! Storage is an [`IndexMap`], so iteration follows insertion order, but
//! key order is an implementation detail rather than part of the contract
//! and callers must not rely on it.
//!
//! ## Examples
//!
//! ```rust
//! use lenient_json::JsonObject;
//!
//! let mut object = JsonObject::new();
//! object.put("name", "Alice").unwrap();
//! object.put("age", 30).unwrap();
//!
//! assert_eq!(object.len(), 2);
//! assert_eq!(object.opt_string("name", ""), "Alice");
//! assert_eq!(object.opt_i32("age", 0), 30);
//! ```

use crate::{coerce, Error, JsonArray, JsonStringer, JsonTokener, JsonValue, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A mapping from string keys to JSON values.
///
/// Built by the parser, by [`FromIterator`], or one entry at a time with
/// [`put`](JsonObject::put). Read back either strictly
/// ([`get`](JsonObject::get) and the fallible `get_*` accessors) or
/// leniently (the `opt_*` accessors, which coerce where they can and fall
/// back where they can't).
///
/// # Examples
///
/// ```rust
/// use lenient_json::JsonObject;
///
/// let object: JsonObject = "{\"id\": 7, \"ok\": true}".parse().unwrap();
/// assert_eq!(object.get_i32("id").unwrap(), 7);
/// assert!(object.get_bool("ok").unwrap());
/// assert!(object.get_bool("missing").is_err());
/// assert!(!object.opt_bool("missing", false));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject {
    entries: IndexMap<String, JsonValue>,
}

impl JsonObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        JsonObject {
            entries: IndexMap::new(),
        }
    }

    /// Number of key/value mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object holds no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `name` is mapped, even to an explicit null.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns `true` if `name` is unmapped or mapped to an explicit null.
    #[must_use]
    pub fn is_null(&self, name: &str) -> bool {
        self.opt(name).map_or(true, JsonValue::is_null)
    }

    /// Returns the value mapped to `name`, or `None` if absent.
    #[must_use]
    pub fn opt(&self, name: &str) -> Option<&JsonValue> {
        self.entries.get(name)
    }

    /// Returns the value mapped to `name`, failing if absent. An explicit
    /// null is a present value and is returned as such.
    pub fn get(&self, name: &str) -> Result<&JsonValue> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::missing(format_args!("\"{}\"", name)))
    }

    /// Maps `name` to `value`, replacing any existing mapping.
    ///
    /// Accepts anything convertible to [`JsonValue`]; non-finite doubles are
    /// rejected with [`Error::InvalidNumber`]. Returns `&mut Self` so puts
    /// chain with `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonObject;
    ///
    /// let mut object = JsonObject::new();
    /// object.put("a", 1).unwrap().put("b", 2.5).unwrap();
    /// assert!(object.put("bad", f64::NAN).is_err());
    /// ```
    pub fn put<V>(&mut self, name: impl Into<String>, value: V) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        let value = value.try_into()?;
        if let JsonValue::Double(double) = value {
            coerce::check_double(double)?;
        }
        self.entries.insert(name.into(), value);
        Ok(self)
    }

    /// Like [`put`](JsonObject::put), except a `None` value removes the
    /// mapping instead of storing anything: host-language absence deletes
    /// the key, while `put(name, JsonValue::Null)` keeps it with an explicit
    /// null.
    pub fn put_opt<V>(&mut self, name: impl Into<String>, value: Option<V>) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        match value {
            Some(value) => self.put(name, value),
            None => {
                self.entries.shift_remove(&name.into());
                Ok(self)
            }
        }
    }

    /// Maps `name` to `value` without growing an array: an absent key gets a
    /// plain mapping, an existing array gets the value appended, and any
    /// other existing value is replaced by a two-element array of old and
    /// new.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonObject;
    ///
    /// let mut object = JsonObject::new();
    /// object.accumulate("tag", "a").unwrap();
    /// object.accumulate("tag", "b").unwrap();
    /// object.accumulate("tag", "c").unwrap();
    /// assert_eq!(object.to_string(), "{\"tag\":[\"a\",\"b\",\"c\"]}");
    /// ```
    pub fn accumulate<V>(&mut self, name: impl Into<String>, value: V) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        let value = value.try_into()?;
        if let JsonValue::Double(double) = value {
            coerce::check_double(double)?;
        }
        match self.entries.entry(name.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                JsonValue::Array(array) => {
                    array.push::<JsonValue>(value)?;
                }
                current => {
                    let mut array = JsonArray::new();
                    array.push::<JsonValue>(std::mem::replace(current, JsonValue::Null))?;
                    array.push::<JsonValue>(value)?;
                    *current = JsonValue::Array(array);
                }
            },
        }
        Ok(self)
    }

    /// Removes the mapping for `name`, returning its value if one existed.
    /// Later entries keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<JsonValue> {
        self.entries.shift_remove(name)
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over the values.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.values()
    }

    /// Coercing boolean lookup; fails on absence, explicit null, or an
    /// uncoercible value.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.coerced(name, "boolean", coerce::to_boolean)
    }

    /// Coercing 32-bit integer lookup.
    pub fn get_i32(&self, name: &str) -> Result<i32> {
        self.coerced(name, "int", coerce::to_int)
    }

    /// Coercing 64-bit integer lookup.
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        self.coerced(name, "long", coerce::to_long)
    }

    /// Coercing double lookup.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        self.coerced(name, "double", coerce::to_double)
    }

    /// Coercing string lookup; non-string values render their canonical
    /// textual representation.
    pub fn get_string(&self, name: &str) -> Result<String> {
        self.coerced(name, "string", |value| Some(coerce::to_text(value)))
    }

    /// Array lookup; no coercion across container types.
    pub fn get_array(&self, name: &str) -> Result<&JsonArray> {
        match self.present(name)? {
            JsonValue::Array(array) => Ok(array),
            other => Err(self.mismatch(name, other, "array")),
        }
    }

    /// Object lookup; no coercion across container types.
    pub fn get_object(&self, name: &str) -> Result<&JsonObject> {
        match self.present(name)? {
            JsonValue::Object(object) => Ok(object),
            other => Err(self.mismatch(name, other, "object")),
        }
    }

    /// Coercing boolean lookup that never fails.
    #[must_use]
    pub fn opt_bool(&self, name: &str, fallback: bool) -> bool {
        self.opt(name).and_then(coerce::to_boolean).unwrap_or(fallback)
    }

    /// Coercing 32-bit integer lookup that never fails.
    #[must_use]
    pub fn opt_i32(&self, name: &str, fallback: i32) -> i32 {
        self.opt(name).and_then(coerce::to_int).unwrap_or(fallback)
    }

    /// Coercing 64-bit integer lookup that never fails.
    #[must_use]
    pub fn opt_i64(&self, name: &str, fallback: i64) -> i64 {
        self.opt(name).and_then(coerce::to_long).unwrap_or(fallback)
    }

    /// Coercing double lookup that never fails.
    #[must_use]
    pub fn opt_f64(&self, name: &str, fallback: f64) -> f64 {
        self.opt(name).and_then(coerce::to_double).unwrap_or(fallback)
    }

    /// Coercing string lookup that never fails.
    #[must_use]
    pub fn opt_string(&self, name: &str, fallback: &str) -> String {
        match self.opt(name) {
            Some(value) if !value.is_null() => coerce::to_text(value),
            _ => fallback.to_string(),
        }
    }

    /// Array lookup that never fails.
    #[must_use]
    pub fn opt_array(&self, name: &str) -> Option<&JsonArray> {
        self.opt(name).and_then(JsonValue::as_array)
    }

    /// Object lookup that never fails.
    #[must_use]
    pub fn opt_object(&self, name: &str) -> Option<&JsonObject> {
        self.opt(name).and_then(JsonValue::as_object)
    }

    /// Pretty-prints with `indent` spaces per nesting level; 0 is compact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenient_json::JsonObject;
    ///
    /// let object: JsonObject = "{\"a\":1}".parse().unwrap();
    /// assert_eq!(object.to_string_pretty(2).unwrap(), "{\n  \"a\": 1\n}");
    /// ```
    pub fn to_string_pretty(&self, indent: usize) -> Result<String> {
        let mut stringer = JsonStringer::with_indent(indent);
        self.write(&mut stringer)?;
        Ok(stringer.finish().unwrap_or_default())
    }

    // Parser-side insertion; values out of the tokener are already validated.
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: JsonValue) {
        self.entries.insert(name.into(), value);
    }

    pub(crate) fn write(&self, stringer: &mut JsonStringer) -> Result<()> {
        stringer.object()?;
        for (name, value) in self.entries() {
            stringer.key(name)?;
            stringer.write_value(value)?;
        }
        stringer.end_object()?;
        Ok(())
    }

    fn present(&self, name: &str) -> Result<&JsonValue> {
        let value = self.get(name)?;
        if value.is_null() {
            return Err(Error::missing(format_args!("\"{}\"", name)));
        }
        Ok(value)
    }

    fn coerced<T>(
        &self,
        name: &str,
        requested: &'static str,
        convert: impl Fn(&JsonValue) -> Option<T>,
    ) -> Result<T> {
        let value = self.present(name)?;
        convert(value).ok_or_else(|| self.mismatch(name, value, requested))
    }

    fn mismatch(&self, name: &str, value: &JsonValue, requested: &'static str) -> Error {
        Error::type_mismatch(format_args!("\"{}\"", name), value, requested)
    }
}

/// Compact JSON. An internal serialization failure renders as empty output;
/// the path is unreachable for trees built through the checked insertion
/// APIs.
impl fmt::Display for JsonObject {
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

impl FromStr for JsonObject {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match JsonTokener::new(text).next_value()? {
            JsonValue::Object(object) => Ok(object),
            other => Err(Error::type_mismatch("document root", &other, "object")),
        }
    }
}

impl From<IndexMap<String, JsonValue>> for JsonObject {
    fn from(entries: IndexMap<String, JsonValue>) -> Self {
        JsonObject { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
    K: Into<String>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonObject {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.entries() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = JsonObject;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut object = JsonObject::new();
                while let Some((name, value)) = map.next_entry::<String, JsonValue>()? {
                    object.insert(name, value);
                }
                Ok(object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}
