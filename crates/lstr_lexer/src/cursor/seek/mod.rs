//! Byte-level scan-ahead utilities.
//!
//! None of these tokenize except [`Cursor::ff_to_token`] and
//! [`Cursor::ff_to_token_end`]. Searches that fail leave the cursor at the
//! end of input, not where it started; save a copy first to retry.

use lstr_core::StrView;
use memchr::memmem;

use super::Cursor;
use crate::kind::TokenKind;
use crate::token::{Token, Whitespace};

/// One line split off by [`Cursor::get_line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content, without the line feed.
    pub text: StrView<'a>,
    /// `false` when the input ran out before a line feed.
    pub newline: bool,
}

impl<'a> Cursor<'a> {
    /// Split off everything up to the next `\n` and step past it.
    ///
    /// Returns `None` only when no input remains, so the lines of `"a\nb"`
    /// are `"a"` (with newline), `"b"` (without), then `None`.
    pub fn get_line(&mut self) -> Option<Line<'a>> {
        if self.is_at_end() {
            return None;
        }
        let rest = self.remaining_bytes();
        let line = match memchr::memchr(b'\n', rest) {
            Some(offset) => {
                self.pos += offset + 1;
                Line {
                    text: StrView::new(&rest[..offset]),
                    newline: true,
                }
            }
            None => {
                self.pos = self.input.len();
                Line {
                    text: StrView::new(rest),
                    newline: false,
                }
            }
        };
        Some(line)
    }

    /// Iterate the remaining lines.
    pub fn lines(&mut self) -> Lines<'_, 'a> {
        Lines { cursor: self }
    }

    /// Skip leading whitespace, reporting which kinds were skipped.
    pub fn trim_left(&mut self) -> Whitespace {
        self.skip_whitespace().0
    }

    /// Drop trailing whitespace from the unconsumed input.
    ///
    /// The input itself shrinks; consumed bytes are never touched.
    pub fn trim_right(&mut self) -> Whitespace {
        let mut ws = Whitespace::empty();
        let mut end = self.input.len();
        while end > self.pos {
            match self.input[end - 1] {
                b' ' | b'\t' | b'\r' => ws |= Whitespace::NEW_WORD,
                b'\n' => ws |= Whitespace::NEW_LINE,
                _ => break,
            }
            end -= 1;
        }
        self.input = &self.input[..end];
        ws
    }

    /// Advance to the next `byte`. Returns `false` (cursor at the end) if
    /// there is none.
    pub fn ff_to_char(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.remaining_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    /// Advance just past the next `byte`, even when it is the last one.
    pub fn ff_to_after_char(&mut self, byte: u8) -> bool {
        let found = self.ff_to_char(byte);
        if found {
            self.pos += 1;
        }
        found
    }

    /// Advance to the start of the next occurrence of `needle`.
    ///
    /// Returns the number of bytes skipped, or `None` with the cursor at the
    /// end. An empty needle matches immediately.
    pub fn ff_to_string(&mut self, needle: &[u8]) -> Option<usize> {
        match memmem::find(self.remaining_bytes(), needle) {
            Some(offset) => {
                self.pos += offset;
                Some(offset)
            }
            None => {
                self.pos = self.input.len();
                None
            }
        }
    }

    /// Advance just past the next occurrence of `needle`.
    ///
    /// Returns the number of bytes skipped, needle included.
    pub fn ff_to_string_end(&mut self, needle: &[u8]) -> Option<usize> {
        let skipped = self.ff_to_string(needle)? + needle.len();
        self.pos += needle.len();
        Some(skipped)
    }

    /// Advance to just before the next token of `kind`, leaving it unread.
    ///
    /// Returns `false` at end of stream, the cursor past any trailing
    /// whitespace.
    pub fn ff_to_token(&mut self, kind: TokenKind) -> bool {
        loop {
            let mut probe = *self;
            let token = probe.next_token();
            if token.kind == kind {
                return true;
            }
            *self = probe;
            if token.is_end() {
                return false;
            }
        }
    }

    /// Consume tokens through the next one of `kind` and return it.
    ///
    /// Stops at end of stream with `None`.
    pub fn ff_to_token_end(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        loop {
            let token = self.next_token();
            if token.kind == kind {
                return Some(token);
            }
            if token.is_end() {
                return None;
            }
        }
    }

    /// Advance by `n` codepoints, stopping at the end.
    ///
    /// Returns how many were actually skipped.
    pub fn skip_utf8_chars(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && self.read_utf8_codepoint().is_some() {
            skipped += 1;
        }
        skipped
    }
}

/// Iterator returned by [`Cursor::lines`].
pub struct Lines<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
}

impl<'a> Iterator for Lines<'_, 'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        self.cursor.get_line()
    }
}

impl std::iter::FusedIterator for Lines<'_, '_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
