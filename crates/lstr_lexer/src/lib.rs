//! Cursor-based tokenizer for config-like and source-like text.
//!
//! A [`Cursor`] scans a borrowed [`StrView`](lstr_core::StrView) into
//! [`Token`]s: single-byte punctuation, identifiers, string literals,
//! integers and reals. Token text is always a sub-view of the input, so
//! tokenizing allocates nothing.
//!
//! ```
//! use lstr_lexer::{Cursor, TokenKind};
//!
//! let mut cursor = Cursor::new("width = 12.5");
//! assert!(cursor.maybe_eat_identifier(b"width"));
//! assert!(cursor.maybe_eat_token(TokenKind::Equals));
//! let value = cursor.next_token();
//! assert_eq!(value.kind, TokenKind::Real);
//! assert_eq!(value.real(), Some(12.5));
//! ```
//!
//! # Tracing
//!
//! The tokenizer emits a `trace` event per token and a `debug` event when a
//! numeric literal has no representable value.

pub mod cursor;
pub mod kind;
pub mod number;
pub mod options;
pub mod token;

pub use cursor::{Cursor, Line, Lines, Tokens};
pub use kind::TokenKind;
pub use number::{parse_hex_u32, parse_integer, parse_real, Number, NumberError};
pub use options::ScanOptions;
pub use token::{Token, TokenFlags, Whitespace};
