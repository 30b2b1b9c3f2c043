//! Immutable borrowed byte spans.
//!
//! A [`StrView`] is a `(pointer, length)` pair over bytes owned by someone
//! else: a `&str`, a byte slice, or one of the buffers in
//! [`buffer`](crate::buffer). The borrow checker ties the view to its owner,
//! so a view can never observe a buffer that has since been grown or freed.
//!
//! # Absent vs. Empty
//!
//! There is no separate "null" view. A view built from an absent source
//! ([`StrView::from_option`] with `None`) is simply empty, and two empty
//! views always compare equal. The only operation that rejects an absent
//! argument is [`StrView::checked_eq`], mirroring comparison operators whose
//! contract forbids it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::error::{TextError, TextResult};
use crate::utf8;

/// Immutable borrowed byte span.
#[derive(Clone, Copy, Default)]
pub struct StrView<'a> {
    bytes: &'a [u8],
}

/// Size assertion: a view is a fat pointer and nothing else.
const _: () = assert!(std::mem::size_of::<StrView<'static>>() == 2 * std::mem::size_of::<usize>());

impl<'a> StrView<'a> {
    /// The empty view.
    pub const EMPTY: StrView<'static> = StrView { bytes: &[] };

    /// Create a view over `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        StrView { bytes }
    }

    /// Create a view from a possibly absent source. `None` yields the empty view.
    #[inline]
    pub fn from_option(bytes: Option<&'a [u8]>) -> Self {
        StrView {
            bytes: bytes.unwrap_or_default(),
        }
    }

    /// The viewed bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of bytes in the view (not codepoints; see [`utf8_len`](Self::utf8_len)).
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the view has no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The view as `&str`, if it holds valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok()
    }

    /// Bounds-checked byte access.
    pub fn byte_at(&self, index: usize) -> TextResult<u8> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(TextError::IndexOutOfBounds {
                index,
                len: self.bytes.len(),
            })
    }

    /// Sub-view of bytes `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> StrView<'a> {
        StrView {
            bytes: &self.bytes[start..end],
        }
    }

    /// Compare against raw bytes.
    ///
    /// Both empty: equal. Exactly one empty: unequal. Length mismatch:
    /// unequal. Otherwise byte-by-byte, stopping at the first mismatch.
    pub fn equal_to(&self, other: &[u8]) -> bool {
        match (self.bytes.is_empty(), other.is_empty()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => {
                self.bytes.len() == other.len()
                    && self.bytes.iter().zip(other).all(|(a, b)| a == b)
            }
        }
    }

    /// Compare against another view. See [`equal_to`](Self::equal_to).
    #[inline]
    pub fn equal_to_view(&self, other: StrView<'_>) -> bool {
        self.equal_to(other.bytes)
    }

    /// Compare against an argument that must be present.
    ///
    /// Returns [`TextError::AbsentArgument`] for `None`; otherwise behaves
    /// like [`equal_to`](Self::equal_to).
    pub fn checked_eq(&self, other: Option<&[u8]>) -> TextResult<bool> {
        match other {
            Some(bytes) => Ok(self.equal_to(bytes)),
            None => Err(TextError::AbsentArgument),
        }
    }

    /// Returns `true` if the view begins with `prefix`.
    ///
    /// A zero-length prefix matches every view, the empty view included.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        if self.bytes.len() < prefix.len() {
            return false;
        }
        self.bytes.iter().zip(prefix).all(|(a, b)| a == b)
    }

    /// Returns `true` if the view begins with `prefix`.
    #[inline]
    pub fn starts_with_view(&self, prefix: StrView<'_>) -> bool {
        self.starts_with(prefix.bytes)
    }

    /// Compare against `other`, folding ASCII letters only.
    pub fn eq_ignore_ascii_case(&self, other: &[u8]) -> bool {
        self.bytes.len() == other.len()
            && self
                .bytes
                .iter()
                .zip(other)
                .all(|(&a, &b)| to_ascii_lowercase(a) == to_ascii_lowercase(b))
    }

    /// Offset of the first occurrence of `byte`.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.bytes)
    }

    /// Offset of the first occurrence of `needle`. An empty needle matches at 0.
    #[inline]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        memchr::memmem::find(self.bytes, needle)
    }

    /// Number of codepoints, counted by repeated forward decoding.
    pub fn utf8_len(&self) -> usize {
        utf8::codepoint_count(self.bytes)
    }
}

/// Lowercase an ASCII letter; every other byte is returned unchanged.
#[inline]
pub const fn to_ascii_lowercase(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + 32
    } else {
        byte
    }
}

/// Returns `true` for C0 controls, DEL, and the C1 range through `0xA0`.
#[inline]
pub const fn is_control(byte: u8) -> bool {
    byte <= 0x1F || (byte >= 0x7F && byte <= 0xA0)
}

impl Index<usize> for StrView<'_> {
    type Output = u8;

    /// # Panics
    ///
    /// Panics on out-of-range access; use [`StrView::byte_at`] for the
    /// checked form.
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl PartialEq for StrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other.bytes)
    }
}

impl Eq for StrView<'_> {}

impl Hash for StrView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialEq<[u8]> for StrView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equal_to(other)
    }
}

impl PartialEq<&[u8]> for StrView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.equal_to(other)
    }
}

impl PartialEq<str> for StrView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.equal_to(other.as_bytes())
    }
}

impl PartialEq<&str> for StrView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.equal_to(other.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        StrView::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        StrView::new(bytes)
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(s: &'a str) -> Self {
        StrView::new(s.as_bytes())
    }
}

impl fmt::Display for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.bytes))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
