//! Cursor over a borrowed byte view, and the tokenizer driving it.
//!
//! The cursor holds the input and a byte position, nothing else. It is
//! [`Copy`], so saving a cursor before a speculative scan and restoring it
//! afterwards is a plain assignment; all lookahead is built that way.
//!
//! # End of Input
//!
//! [`Cursor::current`] returns `0x00` at the end of input. An interior NUL
//! byte reads the same, so the tokenizer reports
//! [`EndOfStream`](TokenKind::EndOfStream) at either without advancing.
//! Use [`Cursor::is_at_end`] to tell them apart.
//!
//! # Token Cycle
//!
//! One call to [`Cursor::next_token`] skips whitespace, classifies the byte
//! it lands on, scans the token body and emits it:
//!
//! | Byte | Token |
//! |------|-------|
//! | `0x00` / end | `EndOfStream`, cursor not advanced |
//! | `"` | `String` up to the closing quote or end; text excludes quotes |
//! | `.` + digit | `Real` |
//! | `.` | `Dot` |
//! | `-` + digit or `.` | `Integer` / `Real` with sign |
//! | `-` | `Minus` |
//! | ASCII letter | `Identifier` (letters, digits, `_`, `-`) |
//! | ASCII digit | `Integer` / `Real` |
//! | punctuation | its single-byte kind |
//! | anything else | `Unknown`, one byte |

mod seek;

pub use seek::{Line, Lines};

use lstr_core::{utf8, StrView};
use tracing::{debug, trace};

use crate::kind::TokenKind;
use crate::number::{self, Number, NumberError};
use crate::options::ScanOptions;
use crate::token::{Token, TokenFlags, Whitespace};

/// Scanning position over a borrowed input.
///
/// # Invariant
///
/// `pos <= input.len()`. The cursor never writes to the input.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    options: ScanOptions,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input` with default options.
    pub fn new(input: impl Into<StrView<'a>>) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    /// Create a cursor at the start of `input`.
    pub fn with_options(input: impl Into<StrView<'a>>, options: ScanOptions) -> Self {
        Cursor {
            input: input.into().as_bytes(),
            pos: 0,
            options,
        }
    }

    // === Position ===

    /// The input from its first byte, consumed part included. Its end
    /// moves in when [`trim_right`](Self::trim_right) drops trailing
    /// whitespace.
    #[inline]
    pub fn input(&self) -> StrView<'a> {
        StrView::new(self.input)
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `pos`, clamped to the input length.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// The scan options this cursor was built with.
    #[inline]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// The unconsumed bytes.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// The unconsumed bytes as a view.
    #[inline]
    pub fn rest(&self) -> StrView<'a> {
        StrView::new(self.remaining_bytes())
    }

    /// Returns `true` once every byte is consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns `true` if the cursor can step back at least one byte.
    #[inline]
    pub fn safe_to_subtract(&self) -> bool {
        self.pos > 0
    }

    /// The byte at the cursor, or `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// The byte after the current one, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.input.get(pos).copied().unwrap_or(0)
    }

    /// Advance by up to `n` bytes, stopping at the end.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(&b) = self.input.get(self.pos) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    // === Comparison ===

    /// Returns `true` if the unconsumed input equals `bytes` exactly.
    pub fn equal_to(&self, bytes: &[u8]) -> bool {
        self.rest().equal_to(bytes)
    }

    /// Returns `true` if the unconsumed input begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    // === UTF-8 ===

    /// Decode the codepoint at the cursor and step past it.
    ///
    /// Returns `None` at the end of input.
    pub fn read_utf8_codepoint(&mut self) -> Option<u32> {
        if self.is_at_end() {
            return None;
        }
        let (codepoint, len) = utf8::decode_forward(self.remaining_bytes());
        self.pos += len;
        Some(codepoint)
    }

    /// Decode the codepoint ending at the cursor and step back before it.
    ///
    /// Returns `None` at the start of input.
    pub fn read_utf8_codepoint_backwards(&mut self) -> Option<u32> {
        let (codepoint, start) = utf8::decode_backward(self.input, self.pos)?;
        self.pos = start;
        Some(codepoint)
    }

    // === Tokenizer ===

    /// Skip spaces, tabs, carriage returns and line feeds.
    ///
    /// Returns the kinds skipped and the number of line feeds among them.
    fn skip_whitespace(&mut self) -> (Whitespace, u32) {
        let mut ws = Whitespace::empty();
        let mut newlines = 0u32;
        while let Some(&b) = self.input.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\r' => ws |= Whitespace::NEW_WORD,
                b'\n' => {
                    ws |= Whitespace::NEW_LINE;
                    newlines = newlines.saturating_add(1);
                }
                _ => break,
            }
            self.pos += 1;
        }
        (ws, newlines)
    }

    /// Scan and consume the next token.
    ///
    /// Always returns a token; at the end of input (or an interior NUL) that
    /// is `EndOfStream` and the cursor stays put.
    pub fn next_token(&mut self) -> Token<'a> {
        let (ws, newlines) = self.skip_whitespace();
        let mut flags = TokenFlags::from(ws);
        let newlines = if self.options.count_newlines {
            newlines
        } else {
            0
        };

        let start = self.pos;
        let (kind, text_start, text_end) = match self.current() {
            0 => (TokenKind::EndOfStream, start, start),
            b'"' => self.scan_string(start),
            b'.' if self.peek().is_ascii_digit() => {
                self.pos += 1;
                (self.scan_number(TokenKind::Real), start, self.pos)
            }
            b'-' if self.peek().is_ascii_digit() || self.peek() == b'.' => {
                self.pos += 1;
                (self.scan_number(TokenKind::Integer), start, self.pos)
            }
            b if b.is_ascii_alphabetic() => {
                self.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
                (TokenKind::Identifier, start, self.pos)
            }
            b if b.is_ascii_digit() => (self.scan_number(TokenKind::Integer), start, self.pos),
            b => {
                self.pos += 1;
                let kind = TokenKind::from_punct(b).unwrap_or(TokenKind::Unknown);
                (kind, start, self.pos)
            }
        };

        let text = StrView::new(&self.input[text_start..text_end]);
        let value = match kind {
            TokenKind::Integer => Self::numeric_value(
                number::parse_integer(text.as_bytes()).map(Number::Integer),
                text,
                &mut flags,
            ),
            TokenKind::Real => Self::numeric_value(
                number::parse_real(text.as_bytes()).map(Number::Real),
                text,
                &mut flags,
            ),
            _ => None,
        };

        trace!(?kind, pos = text_start, len = text.len(), "token");
        Token {
            kind,
            text,
            pos: text_start,
            flags,
            newlines,
            value,
        }
    }

    fn numeric_value(
        parsed: Result<Number, NumberError>,
        text: StrView<'_>,
        flags: &mut TokenFlags,
    ) -> Option<Number> {
        match parsed {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(%err, %text, "numeric literal has no value");
                flags.insert(TokenFlags::NUMBER_OVERFLOW);
                None
            }
        }
    }

    /// Scan a string literal starting at the opening quote.
    ///
    /// Returns the kind and the text range without quotes. An unterminated
    /// literal runs to the end of input or the first NUL.
    fn scan_string(&mut self, quote: usize) -> (TokenKind, usize, usize) {
        let body = quote + 1;
        let end = memchr::memchr2(b'"', 0, &self.input[body..])
            .map_or(self.input.len(), |offset| body + offset);
        self.pos = end;
        if self.current() == b'"' {
            self.pos += 1;
        }
        (TokenKind::String, body, end)
    }

    /// Consume digits and at most one `.`; a `.` turns the literal real.
    ///
    /// Any sign or leading dot is already consumed; `kind` says which.
    fn scan_number(&mut self, mut kind: TokenKind) -> TokenKind {
        loop {
            match self.current() {
                b'0'..=b'9' => self.pos += 1,
                b'.' if kind == TokenKind::Integer => {
                    kind = TokenKind::Real;
                    self.pos += 1;
                }
                _ => return kind,
            }
        }
    }

    /// Iterate tokens up to, not including, `EndOfStream`.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens { cursor: self }
    }

    // === Lookahead ===

    /// The next token, without consuming it.
    pub fn peek_token(&self) -> Token<'a> {
        let mut probe = *self;
        probe.next_token()
    }

    /// Consume the next token if it is of `kind`.
    ///
    /// On mismatch the cursor is left exactly where it was.
    pub fn require_token(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        let mut probe = *self;
        let token = probe.next_token();
        if token.kind == kind {
            *self = probe;
            Some(token)
        } else {
            None
        }
    }

    /// Consume the next token if it is of `kind`, reporting whether it was.
    ///
    /// The cursor lands just past the token, closing quote included.
    pub fn maybe_eat_token(&mut self, kind: TokenKind) -> bool {
        self.require_token(kind).is_some()
    }

    /// Consume the next token if it is the identifier `name`.
    pub fn maybe_eat_identifier(&mut self, name: &[u8]) -> bool {
        let mut probe = *self;
        let token = probe.next_token();
        if token.kind == TokenKind::Identifier && token.text.equal_to(name) {
            *self = probe;
            true
        } else {
            false
        }
    }

    /// Consume the raw byte `byte` if it is next. No whitespace is skipped.
    pub fn require_char(&mut self, byte: u8) -> bool {
        if !self.is_at_end() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Same as [`require_char`](Self::require_char).
    #[inline]
    pub fn maybe_eat_char(&mut self, byte: u8) -> bool {
        self.require_char(byte)
    }
}

/// Iterator returned by [`Cursor::tokens`].
pub struct Tokens<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.cursor.next_token();
        (!token.is_end()).then_some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
