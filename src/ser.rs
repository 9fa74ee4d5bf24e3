//! JSON serializer.
//!
//! Walks a [`Value`] tree and emits its canonical text form: one
//! deterministic output per tree, with object members in stored (insertion)
//! order. Total for every tree reachable through [`parse`](crate::parse) —
//! floats are finite by construction, so serialization cannot fail.
//!
//! Numbers use `itoa`/`dtoa` for the shortest decimal form that re-parses to
//! a bit-identical value. Integral floats keep a trailing `.0` so they stay
//! floats across a round trip.

use crate::value::{Number, Value};

/// Serialize a value as compact JSON text.
pub fn serialize(value: &Value) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

/// Serialize a value as indented JSON text.
///
/// Formatting only: the emitted document parses back to the same tree as
/// the compact form. `indent` is the number of spaces per nesting level.
pub fn serialize_pretty(value: &Value, indent: usize) -> String {
    let mut output = String::new();
    write_value_pretty(value, &mut output, indent, 0);
    output
}

fn write_value(value: &Value, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(*n, output),
        Value::String(s) => write_string(s, output),
        Value::Array(arr) => {
            output.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(item, output);
            }
            output.push(']');
        }
        Value::Object(map) => {
            output.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_string(key, output);
                output.push(':');
                write_value(member, output);
            }
            output.push('}');
        }
    }
}

fn write_value_pretty(value: &Value, output: &mut String, indent: usize, level: usize) {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            output.push('[');
            for (i, item) in arr.iter().enumerate() {
                output.push_str(if i > 0 { ",\n" } else { "\n" });
                push_indent(output, indent, level + 1);
                write_value_pretty(item, output, indent, level + 1);
            }
            output.push('\n');
            push_indent(output, indent, level);
            output.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            output.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                output.push_str(if i > 0 { ",\n" } else { "\n" });
                push_indent(output, indent, level + 1);
                write_string(key, output);
                output.push_str(": ");
                write_value_pretty(member, output, indent, level + 1);
            }
            output.push('\n');
            push_indent(output, indent, level);
            output.push('}');
        }
        // Scalars and empty containers print as in the compact form
        other => write_value(other, output),
    }
}

fn push_indent(output: &mut String, indent: usize, level: usize) {
    for _ in 0..indent * level {
        output.push(' ');
    }
}

/// Write a number in its shortest round-trippable decimal form.
fn write_number(number: Number, output: &mut String) {
    match number {
        Number::Int(n) => {
            let mut buf = itoa::Buffer::new();
            output.push_str(buf.format(n));
        }
        Number::Float(f) => {
            let mut buf = dtoa::Buffer::new();
            output.push_str(buf.format_finite(f));
        }
    }
}

/// Write a string with JSON escaping.
///
/// `"` and `\` and control characters are escaped; everything else,
/// including non-ASCII, is emitted verbatim.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Remaining control characters as \u00XX
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serialize(&Value::Null), "null");
        assert_eq!(serialize(&Value::Bool(true)), "true");
        assert_eq!(serialize(&Value::Bool(false)), "false");
        assert_eq!(serialize(&Value::from(42)), "42");
        assert_eq!(serialize(&Value::from(-7)), "-7");
    }

    #[test]
    fn test_serialize_floats() {
        assert_eq!(serialize(&Value::Number(Number::Float(3.25))), "3.25");
        assert_eq!(serialize(&Value::Number(Number::Float(-0.5))), "-0.5");
    }

    #[test]
    fn test_integral_float_keeps_decimal_point() {
        // 2.0 must not print as 2, or it would re-parse as an integer
        assert_eq!(serialize(&Value::Number(Number::Float(2.0))), "2.0");
    }

    #[test]
    fn test_serialize_string() {
        assert_eq!(serialize(&Value::from("hello")), "\"hello\"");
    }

    #[test]
    fn test_serialize_string_escapes() {
        assert_eq!(serialize(&Value::from("a\nb")), "\"a\\nb\"");
        assert_eq!(serialize(&Value::from("a\tb")), "\"a\\tb\"");
        assert_eq!(serialize(&Value::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(serialize(&Value::from("a\\b")), "\"a\\\\b\"");
        assert_eq!(serialize(&Value::from("a\x08\x0Cb")), "\"a\\b\\fb\"");
    }

    #[test]
    fn test_serialize_other_control_chars() {
        assert_eq!(serialize(&Value::from("a\x01b")), "\"a\\u0001b\"");
        assert_eq!(serialize(&Value::from("\x1F")), "\"\\u001f\"");
    }

    #[test]
    fn test_non_ascii_verbatim() {
        assert_eq!(serialize(&Value::from("héllo ☃")), "\"héllo ☃\"");
        assert_eq!(serialize(&Value::from("\u{1F600}")), "\"\u{1F600}\"");
    }

    #[test]
    fn test_serialize_array() {
        let arr = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert_eq!(serialize(&arr), "[1,2,3]");
    }

    #[test]
    fn test_serialize_empty_containers() {
        assert_eq!(serialize(&Value::Array(vec![])), "[]");
        assert_eq!(serialize(&Value::Object(IndexMap::new())), "{}");
    }

    #[test]
    fn test_serialize_object_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        assert_eq!(serialize(&Value::Object(map)), "{\"z\":1,\"a\":2}");
    }

    #[test]
    fn test_serialize_nested() {
        let mut inner = IndexMap::new();
        inner.insert("x".to_string(), Value::from(1));

        let mut outer = IndexMap::new();
        outer.insert("arr".to_string(), Value::Array(vec![Value::from(1)]));
        outer.insert("obj".to_string(), Value::Object(inner));

        assert_eq!(
            serialize(&Value::Object(outer)),
            "{\"arr\":[1],\"obj\":{\"x\":1}}"
        );
    }

    #[test]
    fn test_pretty_array() {
        let arr = Value::Array(vec![Value::from(1), Value::from(2)]);
        assert_eq!(serialize_pretty(&arr, 2), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_pretty_object() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::Array(vec![]));
        assert_eq!(
            serialize_pretty(&Value::Object(map), 2),
            "{\n  \"a\": 1,\n  \"b\": []\n}"
        );
    }

    #[test]
    fn test_pretty_nested_indentation() {
        let mut inner = IndexMap::new();
        inner.insert("x".to_string(), Value::from(1));
        let mut outer = IndexMap::new();
        outer.insert("o".to_string(), Value::Object(inner));

        assert_eq!(
            serialize_pretty(&Value::Object(outer), 4),
            "{\n    \"o\": {\n        \"x\": 1\n    }\n}"
        );
    }

    #[test]
    fn test_pretty_scalar_is_compact() {
        assert_eq!(serialize_pretty(&Value::Null, 2), "null");
        assert_eq!(serialize_pretty(&Value::from(7), 2), "7");
    }
}
