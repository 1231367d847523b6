//! # lenient-json
//!
//! A lenient JSON codec: parse JSON-like text into a dynamic value tree,
//! read it back through typed coercing accessors, and serialize it to
//! compact or pretty-printed JSON.
//!
//! ## What does "lenient" mean?
//!
//! The parser accepts a documented superset of strict JSON, aimed at
//! hand-written and machine-mangled input:
//!
//! - **Comments**: `// line`, `# line`, and `/* block */`
//! - **Relaxed strings**: single-quoted (`'hi'`) and entirely unquoted
//!   (`{key: value}`) literals
//! - **Alternate number bases**: hexadecimal (`0x1F`) and octal (`010`)
//!   integer literals
//! - **Alternate separators**: `;` between elements/pairs, `=` or `=>`
//!   between key and value
//! - **Implicit nulls**: consecutive or trailing array separators, so
//!   `[,]` is a two-element array of nulls
//!
//! Output is always strict JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use lenient_json::JsonObject;
//!
//! let object: JsonObject = "{menu: 'file', size: 3, pinned: true}"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(object.opt_string("menu", ""), "file");
//! assert_eq!(object.opt_i32("size", 0), 3);
//! assert!(object.opt_bool("pinned", false));
//! assert_eq!(object.to_string(), "{\"menu\":\"file\",\"size\":3,\"pinned\":true}");
//! ```
//!
//! ### Building Values Programmatically
//!
//! ```rust
//! use lenient_json::{json, JsonObject};
//!
//! let mut object = JsonObject::new();
//! object.put("id", 7).unwrap().put("rate", 0.5).unwrap();
//!
//! // Or with the macro:
//! let value = json!({"id": 7, "rate": 0.5});
//! assert_eq!(value.as_object().unwrap().opt_f64("rate", 0.0), 0.5);
//! ```
//!
//! ### Incremental Serialization
//!
//! ```rust
//! use lenient_json::JsonStringer;
//!
//! let mut stringer = JsonStringer::with_indent(2);
//! stringer.object().unwrap()
//!     .key("ok").unwrap()
//!     .value(true).unwrap()
//!     .end_object().unwrap();
//! assert_eq!(stringer.finish().unwrap(), "{\n  \"ok\": true\n}");
//! ```
//!
//! ## Null versus Absent
//!
//! An explicit JSON null and "no value at all" are different states, both
//! observable: a key mapped to [`JsonValue::Null`] is present (`has` is
//! true) but null, while a removed key is absent. Array slots work the same
//! way: index-assignment past the end pads with *vacant* slots, not nulls.
//!
//! ## Type Coercion
//!
//! The `get_*`/`opt_*` accessors apply fixed, documented coercion rules
//! (strings parse as numbers and booleans, numbers render as strings) so
//! that lenient input like `{"count": "17"}` stays usable. The `opt_*`
//! family never fails: any lookup or coercion failure yields the
//! caller-supplied fallback.
//!
//! ## Serde Interoperability
//!
//! [`JsonValue`], [`JsonObject`], and [`JsonArray`] implement `Serialize`
//! and `Deserialize`, so trees convert to and from any serde format and
//! embed in derived types. The crate's own text codec is hand-written and
//! does not go through serde.
//!
//! ## Error Handling
//!
//! All failures are [`Error`] values: syntax errors carry the offset and
//! the full input; serializer misuse is a nesting error; accessor failures
//! carry the key or index, the actual value, and the requested type.
//! NaN and the infinities are rejected at every insertion point.
//!
//! ## Limits
//!
//! One value tree per parse, no streaming. No schema validation. No
//! recursion-depth limit: pathologically nested input can exhaust the call
//! stack. Instances are not meant for concurrent mutation; wrap them in
//! your own synchronization if shared.

pub mod array;
mod coerce;
pub mod error;
pub mod macros;
pub mod object;
pub mod stringer;
pub mod tokener;
pub mod value;

pub use array::JsonArray;
pub use error::{Error, Result};
pub use object::JsonObject;
pub use stringer::{quote, JsonStringer};
pub use tokener::JsonTokener;
pub use value::JsonValue;

/// Parses text into a value tree. The root may be any value variant; use
/// [`JsonObject`]'s or [`JsonArray`]'s `FromStr` when the root's type must
/// be checked.
///
/// # Examples
///
/// ```rust
/// use lenient_json::{parse, JsonValue};
///
/// assert_eq!(parse("204").unwrap(), JsonValue::Int(204));
/// let tree = parse("[1, {\"a\": null}]").unwrap();
/// assert!(tree.is_array());
/// ```
///
/// # Errors
///
/// [`Error::Syntax`] describing the offset and the full input on malformed
/// text.
pub fn parse(text: &str) -> Result<JsonValue> {
    JsonTokener::new(text).next_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let object: JsonObject = "{}".parse().unwrap();
        assert_eq!(object.len(), 0);
        assert_eq!(object.to_string(), "{}");
    }

    #[test]
    fn test_parse_and_access() {
        let object: JsonObject =
            "{\"int\":1,\"double\":1.1,\"bool\":true,\"string\":\"string\"}"
                .parse()
                .unwrap();
        assert_eq!(object.opt_i32("int", 0), 1);
        assert_eq!(object.opt_f64("double", 0.0), 1.1);
        assert!(object.opt_bool("bool", false));
        assert_eq!(object.opt_string("string", ""), "string");
    }

    #[test]
    fn test_round_trip_preserves_tree() {
        let text = "{\"a\":[1,2.5,null,\"x\"],\"b\":{\"c\":false}}";
        let tree = parse(text).unwrap();
        assert_eq!(tree.to_string(), text);
        assert_eq!(parse(&tree.to_string()).unwrap(), tree);
    }

    #[test]
    fn test_root_type_checked_constructors() {
        assert!("[1]".parse::<JsonObject>().is_err());
        assert!("{}".parse::<JsonArray>().is_err());
        assert!("[1]".parse::<JsonArray>().is_ok());
    }

    #[test]
    fn test_serde_interop() {
        let tree = parse("{\"n\": 3, \"list\": [true, null]}").unwrap();
        let via_serde = serde_json::to_string(&tree).unwrap();
        let back: JsonValue = serde_json::from_str(&via_serde).unwrap();
        assert_eq!(back, tree);
    }
}
