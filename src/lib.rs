//! Self-contained strict JSON codec.
//!
//! Converts JSON text into an in-memory [`Value`] tree and back, with no
//! dependence on an existing JSON library. Parsing follows RFC 8259
//! strictly: exact literals, full number grammar, escape sequences with
//! surrogate-pair combining, no trailing commas, exactly one value per
//! document.
//!
//! # Architecture
//!
//! - [`value`] - the [`Value`] tagged union shared by parser and serializer
//! - [`lexer`] - tokenizer with escape and number-grammar handling
//! - [`parser`] - recursive descent with a configurable depth guard
//! - [`ser`] - canonical (and optional pretty) serialization
//! - [`error`] - structured parse failures with byte offsets
//! - [`limits`] - resource bounds for parsing
//!
//! # Example
//!
//! ```
//! use json_codec::{parse, serialize};
//!
//! let value = parse("{\"b\": 2, \"a\": [1, null]}").unwrap();
//! assert_eq!(value.get("b").and_then(|v| v.as_i64()), Some(2));
//!
//! // Canonical form: compact, member order preserved
//! assert_eq!(serialize(&value), "{\"b\":2,\"a\":[1,null]}");
//! ```
//!
//! # Errors
//!
//! [`parse`] fails with a [`ParseError`] carrying an [`ErrorKind`] and the
//! byte offset where the problem was detected. The first error aborts the
//! parse. [`serialize`] is total: trees built by [`parse`] cannot contain
//! NaN or infinite numbers, and [`Number::from_f64`] refuses them at
//! construction time.

// Library code must not panic on malformed input; every failure is a
// structured ParseError. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod ser;
pub mod value;

// Re-export the public surface
pub use error::{ErrorKind, ParseError};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits};
pub use ser::{serialize, serialize_pretty};
pub use value::{Number, Value};
