//! The lenient JSON tokenizer and recursive-descent parser.
//!
//! [`JsonTokener`] consumes one text buffer, once, and produces one root
//! [`JsonValue`]. The accepted grammar is a superset of strict JSON:
//!
//! - end-of-line comments introduced by `//` or `#`, and non-nesting block
//!   comments `/* ... */`
//! - single-quoted and entirely unquoted string literals
//! - hexadecimal (`0x`/`0X`) and octal (leading `0`) integer literals
//! - `;` as an alternate element/pair separator; `=` or `=>` as an
//!   alternate key/value separator
//! - consecutive or trailing array separators read as implicit null
//!   elements
//!
//! A leading byte-order mark and surrounding whitespace are stripped before
//! parsing begins. Any malformed input aborts the whole parse with a single
//! [`Error::Syntax`]; there is no recovery or resynchronization, and no
//! recursion-depth limit, so pathologically deep input can exhaust the call
//! stack.
//!
//! ## Examples
//!
//! ```rust
//! use lenient_json::JsonTokener;
//!
//! let value = JsonTokener::new("{key: 'quoted', hex: 0x1F} // trailing")
//!     .next_value()
//!     .unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object.opt_string("key", ""), "quoted");
//! assert_eq!(object.opt_i32("hex", 0), 31);
//! ```

use crate::{Error, JsonArray, JsonObject, JsonValue, Result};

/// Single-use parsing cursor over an owned text buffer.
///
/// One parse per instance: [`next_value`](JsonTokener::next_value) reads the
/// root value and the tokener is not restartable afterwards.
pub struct JsonTokener {
    text: String,
    pos: usize,
}

impl JsonTokener {
    /// Creates a tokener over `text`, stripping a leading U+FEFF
    /// byte-order mark and surrounding whitespace.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();
        JsonTokener {
            text: text.to_string(),
            pos: 0,
        }
    }

    /// Reads exactly one value: an object, array, string, boolean, integer,
    /// double, or the null sentinel.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] if the input is exhausted, malformed, or a value
    /// does not start at the current position.
    pub fn next_value(&mut self) -> Result<JsonValue> {
        match self.next_clean()? {
            None => Err(self.syntax_error("End of input")),
            Some('{') => self.read_object().map(JsonValue::Object),
            Some('[') => self.read_array().map(JsonValue::Array),
            Some(quote @ ('\'' | '"')) => self.next_string(quote).map(JsonValue::String),
            Some(_) => {
                self.back();
                self.read_literal()
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn back(&mut self) {
        if let Some(ch) = self.text[..self.pos].chars().next_back() {
            self.pos -= ch.len_utf8();
        }
    }

    fn syntax_error(&self, msg: impl Into<String>) -> Error {
        let offset = self.text[..self.pos].chars().count();
        Error::syntax(msg, offset, &self.text)
    }

    /// Returns the next character that is neither whitespace nor part of a
    /// comment, or `None` at end of input.
    fn next_clean(&mut self) -> Result<Option<char>> {
        while let Some(ch) = self.next_char() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {}
                '/' => match self.peek_char() {
                    Some('*') => {
                        self.next_char();
                        match self.text[self.pos..].find("*/") {
                            Some(end) => self.pos += end + 2,
                            None => return Err(self.syntax_error("Unterminated comment")),
                        }
                    }
                    Some('/') => {
                        self.next_char();
                        self.skip_to_end_of_line();
                    }
                    _ => return Ok(Some('/')),
                },
                '#' => self.skip_to_end_of_line(),
                other => return Ok(Some(other)),
            }
        }
        Ok(None)
    }

    fn skip_to_end_of_line(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\r' || ch == '\n' {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Reads a string body after its opening quote; the same character
    /// closes it.
    fn next_string(&mut self, quote: char) -> Result<String> {
        let mut builder = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.syntax_error("Unterminated string")),
                Some(ch) if ch == quote => return Ok(builder),
                Some('\\') => builder.push(self.read_escape()?),
                Some(ch) => builder.push(ch),
            }
        }
    }

    fn read_escape(&mut self) -> Result<char> {
        let escaped = self
            .next_char()
            .ok_or_else(|| self.syntax_error("Unterminated escape sequence"))?;
        match escaped {
            'u' => {
                let mut hex = String::with_capacity(4);
                for _ in 0..4 {
                    match self.next_char() {
                        Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
                        Some(_) => return Err(self.syntax_error("Invalid escape sequence")),
                        None => return Err(self.syntax_error("Unterminated escape sequence")),
                    }
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| self.syntax_error("Invalid escape sequence"))?;
                // Lone surrogates are representable in UTF-16 hosts but not
                // in Rust strings; reject them.
                char::from_u32(code).ok_or_else(|| self.syntax_error("Invalid escape sequence"))
            }
            't' => Ok('\t'),
            'b' => Ok('\u{0008}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            'f' => Ok('\u{000C}'),
            other => Ok(other),
        }
    }

    /// Consumes the run of characters up to the next structural delimiter
    /// or whitespace, leaving the delimiter unread.
    fn next_to_delimiter(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if matches!(
                ch,
                '{' | '}'
                    | '['
                    | ']'
                    | '/'
                    | '\\'
                    | ':'
                    | ','
                    | '='
                    | ';'
                    | '#'
                    | ' '
                    | '\t'
                    | '\x0C'
                    | '\r'
                    | '\n'
            ) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.text[start..self.pos].to_string()
    }

    /// Reads an unquoted literal: the null sentinel, a boolean, a number
    /// (with hex/octal base sniffing), or, when nothing numeric fits, the
    /// literal itself as a bare-word string.
    fn read_literal(&mut self) -> Result<JsonValue> {
        let literal = self.next_to_delimiter();
        if literal.is_empty() {
            return Err(self.syntax_error("Expected literal value"));
        }
        if literal.eq_ignore_ascii_case("null") {
            return Ok(JsonValue::Null);
        }
        if literal.eq_ignore_ascii_case("true") {
            return Ok(JsonValue::Bool(true));
        }
        if literal.eq_ignore_ascii_case("false") {
            return Ok(JsonValue::Bool(false));
        }
        if !literal.contains('.') {
            let (number, radix) = if let Some(hex) =
                literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X"))
            {
                (hex, 16)
            } else if literal.len() > 1 && literal.starts_with('0') {
                (&literal[1..], 8)
            } else {
                (literal.as_str(), 10)
            };
            if let Ok(long) = i64::from_str_radix(number, radix) {
                return Ok(match i32::try_from(long) {
                    Ok(int) => JsonValue::Int(int),
                    Err(_) => JsonValue::Long(long),
                });
            }
        }
        // Exponents, 64-bit overflow, and bad octal digits all land here.
        // The double parse sees the whole literal, prefix included.
        if let Ok(double) = literal.parse::<f64>() {
            if double.is_finite() {
                return Ok(JsonValue::Double(double));
            }
        }
        Ok(JsonValue::String(literal))
    }

    fn read_object(&mut self) -> Result<JsonObject> {
        let mut result = JsonObject::new();
        match self.next_clean()? {
            Some('}') => return Ok(result),
            Some(_) => self.back(),
            None => {}
        }
        loop {
            let name = match self.next_value()? {
                JsonValue::String(name) => name,
                JsonValue::Null => return Err(self.syntax_error("Names cannot be null")),
                other => {
                    return Err(self.syntax_error(format!(
                        "Names must be strings, but found a {}",
                        other.type_name()
                    )))
                }
            };
            match self.next_clean()? {
                Some(':') | Some('=') => {
                    if self.peek_char() == Some('>') {
                        self.next_char();
                    }
                }
                _ => return Err(self.syntax_error(format!("Expected ':' after {}", name))),
            }
            let value = self.next_value()?;
            result.insert(name, value);
            match self.next_clean()? {
                Some('}') => return Ok(result),
                Some(';') | Some(',') => {}
                _ => return Err(self.syntax_error("Unterminated object")),
            }
        }
    }

    fn read_array(&mut self) -> Result<JsonArray> {
        let mut result = JsonArray::new();
        // A separator with no value before it reads as an implicit null; a
        // trailing separator contributes one more at the close.
        let mut has_trailing_separator = false;
        loop {
            match self.next_clean()? {
                None => return Err(self.syntax_error("Unterminated array")),
                Some(']') => {
                    if has_trailing_separator {
                        result.push_slot(None);
                    }
                    return Ok(result);
                }
                Some(',') | Some(';') => {
                    result.push_slot(None);
                    has_trailing_separator = true;
                    continue;
                }
                Some(_) => self.back(),
            }
            result.push_slot(Some(self.next_value()?));
            match self.next_clean()? {
                Some(']') => return Ok(result),
                Some(',') | Some(';') => has_trailing_separator = true,
                _ => return Err(self.syntax_error("Unterminated array")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> JsonValue {
        JsonTokener::new(text).next_value().unwrap()
    }

    #[test]
    fn test_root_values() {
        assert_eq!(value("null"), JsonValue::Null);
        assert_eq!(value("NULL"), JsonValue::Null);
        assert_eq!(value("true"), JsonValue::Bool(true));
        assert_eq!(value("\"text\""), JsonValue::String("text".to_string()));
        assert_eq!(value("12"), JsonValue::Int(12));
        assert_eq!(value("12.5"), JsonValue::Double(12.5));
    }

    #[test]
    fn test_number_base_sniffing() {
        assert_eq!(value("0x1F"), JsonValue::Int(31));
        assert_eq!(value("0XFF"), JsonValue::Int(255));
        assert_eq!(value("010"), JsonValue::Int(8));
        assert_eq!(value("0"), JsonValue::Int(0));
        // A bad octal digit drops through to the double parse.
        assert_eq!(value("08"), JsonValue::Double(8.0));
        assert_eq!(value("1e3"), JsonValue::Double(1000.0));
        assert_eq!(
            value("9223372036854775807"),
            JsonValue::Long(i64::MAX)
        );
        assert_eq!(value("2147483648"), JsonValue::Long(2147483648));
        assert_eq!(value("-2147483648"), JsonValue::Int(i32::MIN));
    }

    #[test]
    fn test_bare_words_fall_back_to_strings() {
        assert_eq!(value("hello"), JsonValue::String("hello".to_string()));
        assert_eq!(value("0xZZ"), JsonValue::String("0xZZ".to_string()));
        // Rust would parse these as floats; the finite-only rule rejects
        // them and the leniency escape hatch keeps them as text.
        assert_eq!(value("inf"), JsonValue::String("inf".to_string()));
        assert_eq!(value("NaN"), JsonValue::String("NaN".to_string()));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(value(r#""a\tb""#), JsonValue::String("a\tb".to_string()));
        assert_eq!(
            value(r#""Aé""#),
            JsonValue::String("Aé".to_string())
        );
        // Unknown escapes pass the character through.
        assert_eq!(value(r#""\q""#), JsonValue::String("q".to_string()));
        assert_eq!(value(r#"'single\''"#), JsonValue::String("single'".to_string()));
        assert!(JsonTokener::new(r#""\u00G0""#).next_value().is_err());
        assert!(JsonTokener::new(r#""\u12"#).next_value().is_err());
        assert!(JsonTokener::new("\"open").next_value().is_err());
    }

    #[test]
    fn test_comments_and_bom() {
        let object = value("\u{feff} {\n  // line\n  # hash\n  /* block */ \"a\": 1\n}");
        assert_eq!(object.as_object().unwrap().opt_i32("a", 0), 1);
        assert!(JsonTokener::new("[1, /* open").next_value().is_err());
    }

    #[test]
    fn test_object_separators() {
        let object = value("{a=1; b=>2, c:3}");
        let object = object.as_object().unwrap();
        assert_eq!(object.opt_i32("a", 0), 1);
        assert_eq!(object.opt_i32("b", 0), 2);
        assert_eq!(object.opt_i32("c", 0), 3);
    }

    #[test]
    fn test_object_errors() {
        assert!(matches!(
            JsonTokener::new("{null: 1}").next_value(),
            Err(Error::Syntax { .. })
        ));
        assert!(JsonTokener::new("{1: 2}").next_value().is_err());
        assert!(JsonTokener::new("{\"a\" 1}").next_value().is_err());
        assert!(JsonTokener::new("{\"a\": 1").next_value().is_err());
        assert!(JsonTokener::new("{").next_value().is_err());
    }

    #[test]
    fn test_duplicate_keys_overwrite() {
        let object = value("{\"a\": 1, \"a\": 2}");
        assert_eq!(object.as_object().unwrap().opt_i32("a", 0), 2);
        assert_eq!(object.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_array_implicit_nulls() {
        let array = value("[,]");
        let array = array.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert!(array.is_null(0));
        assert!(array.is_null(1));

        let array = value("[1,,2,]");
        let array = array.as_array().unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array.opt_i32(0, 0), 1);
        assert!(array.is_null(1));
        assert_eq!(array.opt_i32(2, 0), 2);
        assert!(array.is_null(3));
    }

    #[test]
    fn test_array_semicolon_separator() {
        let array = value("[1; 2; 3]");
        let array = array.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.opt_i32(2, 0), 3);
    }

    #[test]
    fn test_array_errors() {
        assert!(JsonTokener::new("[1, 2").next_value().is_err());
        assert!(JsonTokener::new("[1 2]").next_value().is_err());
        assert!(JsonTokener::new("[").next_value().is_err());
    }

    #[test]
    fn test_syntax_error_carries_offset_and_input() {
        let err = JsonTokener::new("[1, ").next_value().unwrap_err();
        match err {
            Error::Syntax { offset, input, .. } => {
                assert_eq!(input, "[1,");
                assert!(offset <= input.len());
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
