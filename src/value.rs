//! JSON value types.
//!
//! [`Value`] is the in-memory representation shared by the parser and the
//! serializer. It is a closed tagged union with one variant per JSON type,
//! giving exhaustive-match safety to callers.
//!
//! Objects are backed by [`IndexMap`] so that member order survives a
//! parse/serialize round trip. Duplicate keys in source text resolve
//! last-write-wins: the later value replaces the earlier one while the key
//! keeps its original position.

use std::fmt;

use indexmap::IndexMap;

/// A JSON number.
///
/// Lexemes without a fraction or exponent part parse to [`Number::Int`] when
/// they fit an `i64`; everything else (including integer lexemes that
/// overflow `i64`) parses to [`Number::Float`]. A `Float` is always finite:
/// JSON text cannot express NaN or infinity, and lexemes whose magnitude
/// exceeds `f64` range are rejected at parse time.
///
/// Equality is by representation: `Int(1) != Float(1.0)`. This keeps
/// round-tripping exact, since the two forms serialize differently
/// (`1` vs `1.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer within `i64` range, from a lexeme with no `.` or `e`.
    Int(i64),
    /// Finite double-precision float.
    Float(f64),
}

impl Number {
    /// Numeric view as `f64`, regardless of representation.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// The integer value if this is an `Int`, `None` otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// Build a `Float` from an `f64`, refusing NaN and infinity.
    pub fn from_f64(f: f64) -> Option<Number> {
        if f.is_finite() {
            Some(Number::Float(f))
        } else {
            None
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Int(n)
    }
}

/// A JSON value.
///
/// Constructed by [`parse`](crate::parse), walked by
/// [`serialize`](crate::serialize). Trees are acyclic and exclusively owned
/// by their root; cloning is a deep copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number (integer or finite float)
    Number(Number),
    /// JSON string, fully unescaped Unicode scalar content
    String(String),
    /// JSON array, order significant
    Array(Vec<Value>),
    /// JSON object, insertion order preserved
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value if this is an integer Number, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(Number::Int(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

/// Displays as compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self))
    }
}
