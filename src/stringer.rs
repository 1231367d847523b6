//! The incremental JSON serializer.
//!
//! [`JsonStringer`] builds one JSON document through a sequence of
//! `object`/`key`/`value`/`end_object` (and array) calls. A stack of
//! lexical scopes is the sole source of truth for which calls are legal
//! next; any violation fails with [`Error::Nesting`]. Value trees also
//! serialize themselves through this type; that is what the containers'
//! `Display` and `to_string_pretty` do.
//!
//! ## Examples
//!
//! ```rust
//! use lenient_json::JsonStringer;
//!
//! let mut stringer = JsonStringer::new();
//! stringer
//!     .object().unwrap()
//!     .key("query").unwrap()
//!     .value("pizza").unwrap()
//!     .key("locations").unwrap()
//!     .array().unwrap()
//!     .value(94043).unwrap()
//!     .value(90210).unwrap()
//!     .end_array().unwrap()
//!     .end_object().unwrap();
//!
//! assert_eq!(
//!     stringer.finish().unwrap(),
//!     "{\"query\":\"pizza\",\"locations\":[94043,90210]}"
//! );
//! ```

use crate::{coerce, Error, JsonValue, Result};

/// Lexical scopes. The stack's depth equals current nesting depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    /// An array with no elements written yet.
    EmptyArray,
    /// An array with at least one element; the next one needs a comma.
    NonemptyArray,
    /// An object with no entries written yet.
    EmptyObject,
    /// An object whose most recent key still awaits its value.
    DanglingKey,
    /// An object with at least one complete entry.
    NonemptyObject,
    /// Bracketless top level, used for standalone value and join encoding.
    Bare,
}

/// Single-use JSON emitter.
///
/// Encodes exactly one top-level document; [`finish`](JsonStringer::finish)
/// consumes the stringer and returns the accumulated text, or `None` when
/// nothing was ever written.
pub struct JsonStringer {
    out: String,
    stack: Vec<Scope>,
    /// `None` means compact output.
    indent: Option<String>,
}

impl JsonStringer {
    /// Creates a compact stringer (no inter-token whitespace).
    #[must_use]
    pub fn new() -> Self {
        JsonStringer {
            out: String::new(),
            stack: Vec::new(),
            indent: None,
        }
    }

    /// Creates a pretty-printing stringer with `indent` spaces per nesting
    /// level; 0 is equivalent to [`new`](JsonStringer::new).
    #[must_use]
    pub fn with_indent(indent: usize) -> Self {
        JsonStringer {
            out: String::new(),
            stack: Vec::new(),
            indent: if indent == 0 {
                None
            } else {
                Some(" ".repeat(indent))
            },
        }
    }

    /// Opens an array scope.
    pub fn array(&mut self) -> Result<&mut Self> {
        self.open(Scope::EmptyArray, '[')
    }

    /// Closes the current array scope.
    pub fn end_array(&mut self) -> Result<&mut Self> {
        self.close(Scope::EmptyArray, Scope::NonemptyArray, ']')
    }

    /// Opens an object scope.
    pub fn object(&mut self) -> Result<&mut Self> {
        self.open(Scope::EmptyObject, '{')
    }

    /// Closes the current object scope.
    pub fn end_object(&mut self) -> Result<&mut Self> {
        self.close(Scope::EmptyObject, Scope::NonemptyObject, '}')
    }

    /// Writes a key inside the current object scope.
    pub fn key(&mut self, name: &str) -> Result<&mut Self> {
        self.before_key()?;
        escape_into(&mut self.out, name);
        Ok(self)
    }

    /// Writes a value in the current scope. Arrays and objects write
    /// themselves recursively; non-finite doubles are rejected.
    pub fn value<V>(&mut self, value: V) -> Result<&mut Self>
    where
        V: TryInto<JsonValue>,
        Error: From<V::Error>,
    {
        if self.stack.is_empty() {
            return Err(Error::nesting("Nesting problem"));
        }
        let value = value.try_into()?;
        self.write_value(&value)?;
        Ok(self)
    }

    /// Consumes the stringer, returning the document text, or `None` when
    /// nothing was written.
    #[must_use]
    pub fn finish(self) -> Option<String> {
        if self.out.is_empty() {
            None
        } else {
            Some(self.out)
        }
    }

    pub(crate) fn write_value(&mut self, value: &JsonValue) -> Result<()> {
        match value {
            JsonValue::Object(object) => object.write(self),
            JsonValue::Array(array) => array.write(self),
            JsonValue::Null => {
                self.before_value()?;
                self.out.push_str("null");
                Ok(())
            }
            JsonValue::Bool(bool_value) => {
                self.before_value()?;
                self.out.push_str(if *bool_value { "true" } else { "false" });
                Ok(())
            }
            JsonValue::Int(int) => {
                self.before_value()?;
                self.out.push_str(&int.to_string());
                Ok(())
            }
            JsonValue::Long(long) => {
                self.before_value()?;
                self.out.push_str(&long.to_string());
                Ok(())
            }
            JsonValue::Double(double) => {
                coerce::check_double(*double)?;
                self.before_value()?;
                self.out.push_str(&coerce::double_to_string(*double));
                Ok(())
            }
            JsonValue::String(text) => {
                self.before_value()?;
                escape_into(&mut self.out, text);
                Ok(())
            }
        }
    }

    // Bracketless scope for join and standalone-value encoding.
    pub(crate) fn open_bare(&mut self) {
        self.stack.push(Scope::Bare);
    }

    // Separator text for join; not subject to escaping.
    pub(crate) fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn open(&mut self, empty: Scope, bracket: char) -> Result<&mut Self> {
        if self.stack.is_empty() && !self.out.is_empty() {
            return Err(Error::nesting(
                "Nesting problem: multiple top-level roots",
            ));
        }
        self.before_value()?;
        self.stack.push(empty);
        self.out.push(bracket);
        Ok(self)
    }

    fn close(&mut self, empty: Scope, nonempty: Scope, bracket: char) -> Result<&mut Self> {
        let context = self.peek()?;
        if context != nonempty && context != empty {
            return Err(Error::nesting("Nesting problem"));
        }
        self.stack.pop();
        if context == nonempty {
            self.newline();
        }
        self.out.push(bracket);
        Ok(self)
    }

    fn peek(&self) -> Result<Scope> {
        self.stack
            .last()
            .copied()
            .ok_or_else(|| Error::nesting("Nesting problem"))
    }

    fn replace_top(&mut self, scope: Scope) {
        if let Some(top) = self.stack.last_mut() {
            *top = scope;
        }
    }

    fn before_key(&mut self) -> Result<()> {
        match self.peek()? {
            Scope::NonemptyObject => self.out.push(','),
            Scope::EmptyObject => {}
            _ => return Err(Error::nesting("Nesting problem")),
        }
        self.newline();
        self.replace_top(Scope::DanglingKey);
        Ok(())
    }

    fn before_value(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Ok(());
        }
        match self.peek()? {
            Scope::EmptyArray => {
                self.replace_top(Scope::NonemptyArray);
                self.newline();
            }
            Scope::NonemptyArray => {
                self.out.push(',');
                self.newline();
            }
            Scope::DanglingKey => {
                self.out
                    .push_str(if self.indent.is_some() { ": " } else { ":" });
                self.replace_top(Scope::NonemptyObject);
            }
            Scope::Bare => {}
            _ => return Err(Error::nesting("Nesting problem")),
        }
        Ok(())
    }

    fn newline(&mut self) {
        let Some(indent) = &self.indent else {
            return;
        };
        self.out.push('\n');
        for _ in 0..self.stack.len() {
            self.out.push_str(indent);
        }
    }
}

impl Default for JsonStringer {
    fn default() -> Self {
        JsonStringer::new()
    }
}

/// Produces a single JSON-quoted string constant.
///
/// # Examples
///
/// ```rust
/// use lenient_json::quote;
///
/// assert_eq!(quote("a/b"), "\"a\\/b\"");
/// assert_eq!(quote("tab\there"), "\"tab\\there\"");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' | '\\' | '/' => {
                out.push('\\');
                out.push(ch);
            }
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) <= 0x1F => {
                out.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
