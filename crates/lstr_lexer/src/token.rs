//! Tokens and their whitespace context.

use bitflags::bitflags;
use lstr_core::StrView;

use crate::kind::TokenKind;
use crate::number::Number;

bitflags! {
    /// Whitespace kinds consumed by a trim.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Whitespace: u8 {
        /// Space, tab or carriage return.
        const NEW_WORD = 1 << 0;
        /// Line feed.
        const NEW_LINE = 1 << 1;
    }
}

bitflags! {
    /// Per-token metadata.
    ///
    /// Captures the whitespace preceding the token so consumers can tell
    /// word and line boundaries apart without trivia tokens.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        /// Spaces, tabs or carriage returns preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// At least one newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// Integer literal out of `i64` range, or a real that is not finite.
        /// The token carries no value.
        const NUMBER_OVERFLOW = 1 << 2;
    }
}

impl From<Whitespace> for TokenFlags {
    fn from(ws: Whitespace) -> Self {
        let mut flags = TokenFlags::empty();
        flags.set(TokenFlags::SPACE_BEFORE, ws.contains(Whitespace::NEW_WORD));
        flags.set(TokenFlags::NEWLINE_BEFORE, ws.contains(Whitespace::NEW_LINE));
        flags
    }
}

/// A classified fragment of the input.
///
/// `text` borrows from the scanned input; a token never owns memory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Token bytes. String literals exclude their quotes.
    pub text: StrView<'a>,
    /// Byte offset of `text` in the input.
    pub pos: usize,
    pub flags: TokenFlags,
    /// Newlines skipped before this token (0 when counting is off).
    pub newlines: u32,
    /// Parsed value, for `Integer` and `Real` tokens that fit.
    pub value: Option<Number>,
}

impl Token<'_> {
    /// Returns `true` if the token is of `kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` for the end-of-stream marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }

    #[inline]
    pub fn has_space_before(&self) -> bool {
        self.flags.contains(TokenFlags::SPACE_BEFORE)
    }

    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.flags.contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// Byte offset just past `text`.
    #[inline]
    pub fn end(&self) -> usize {
        self.pos + self.text.len()
    }

    /// The numeric value as an integer; reals are truncated.
    pub fn integer(&self) -> Option<i64> {
        self.value.map(Number::as_integer)
    }

    /// The numeric value as a real; integers are widened.
    pub fn real(&self) -> Option<f64> {
        self.value.map(Number::as_real)
    }
}
