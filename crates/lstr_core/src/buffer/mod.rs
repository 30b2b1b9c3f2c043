//! Mutable string buffers.
//!
//! [`MutableBuffer`] is the append contract every buffer variant shares.
//! An implementation supplies only storage access and a growth hook
//! ([`MutableBuffer::reserve`]); the append operations are provided on top
//! and all follow the same four steps:
//!
//! 1. ensure capacity through the growth hook,
//! 2. copy the source bytes after the current end,
//! 3. advance the length,
//! 4. re-terminate with a trailing `0x00` byte.
//!
//! The terminator always occupies one byte of capacity beyond the length,
//! so `len() + 1 <= capacity()` holds after every successful append.
//!
//! # Variants
//!
//! | Type | Storage | Growth |
//! |------|---------|--------|
//! | [`FixedBuffer<N>`] | inline `[u8; N]` | none: over-capacity appends fail |
//! | [`GrowableBuffer<A>`] | from a [`BufferAllocator`] | doubling with a minimum-fit floor |

mod alloc;
mod fixed;
mod growable;

pub use alloc::{BufferAllocator, HeapAllocator};
pub use fixed::FixedBuffer;
pub use growable::GrowableBuffer;

use std::fmt;

use crate::error::{TextError, TextResult};
use crate::utf8;
use crate::view::StrView;

/// Append/format contract shared by all buffer variants.
pub trait MutableBuffer {
    /// Growth hook: make room for `additional` more bytes plus the terminator.
    ///
    /// Fixed buffers only check; growable buffers reallocate. After `Ok(())`,
    /// `storage_mut()` is at least `len() + additional + 1` bytes long.
    fn reserve(&mut self, additional: usize) -> TextResult<()>;

    /// Number of content bytes (terminator excluded).
    fn len(&self) -> usize;

    /// Total storage size in bytes (terminator included).
    fn capacity(&self) -> usize;

    /// The whole backing storage, `capacity()` bytes long.
    fn storage(&self) -> &[u8];

    /// The whole backing storage, `capacity()` bytes long.
    fn storage_mut(&mut self) -> &mut [u8];

    /// Set the content length.
    ///
    /// # Contract
    ///
    /// `len < capacity()`, or `len == 0` on storage that was never
    /// allocated. Callers re-terminate the content themselves.
    fn set_len(&mut self, len: usize);

    /// Returns `true` if the buffer holds no content bytes.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity still available for content (the terminator's byte excluded).
    #[inline]
    fn remaining_capacity(&self) -> usize {
        self.capacity().saturating_sub(self.len() + 1)
    }

    /// The content bytes.
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.storage()[..self.len()]
    }

    /// The content bytes followed by the `0x00` terminator.
    fn as_bytes_with_nul(&self) -> &[u8] {
        if self.capacity() == 0 {
            return b"\0";
        }
        &self.storage()[..=self.len()]
    }

    /// Borrow the content as a view.
    #[inline]
    fn view(&self) -> StrView<'_> {
        StrView::new(self.as_bytes())
    }

    /// Append raw bytes.
    fn append_bytes(&mut self, bytes: &[u8]) -> TextResult<()> {
        self.reserve(bytes.len())?;
        let start = self.len();
        let end = start + bytes.len();
        let storage = self.storage_mut();
        storage[start..end].copy_from_slice(bytes);
        storage[end] = 0;
        self.set_len(end);
        Ok(())
    }

    /// Append a single byte.
    #[inline]
    fn append_byte(&mut self, byte: u8) -> TextResult<()> {
        self.append_bytes(&[byte])
    }

    /// Append the bytes of a view.
    #[inline]
    fn append_view(&mut self, view: StrView<'_>) -> TextResult<()> {
        self.append_bytes(view.as_bytes())
    }

    /// Append the first `n` bytes of a view.
    fn append_view_prefix(&mut self, view: StrView<'_>, n: usize) -> TextResult<()> {
        if n > view.len() {
            return Err(TextError::IndexOutOfBounds {
                index: n,
                len: view.len(),
            });
        }
        self.append_bytes(&view.as_bytes()[..n])
    }

    /// Append a string slice.
    #[inline]
    fn append_str(&mut self, s: &str) -> TextResult<()> {
        self.append_bytes(s.as_bytes())
    }

    /// Append the UTF-8 encoding of `codepoint`.
    fn append_codepoint(&mut self, codepoint: u32) -> TextResult<()> {
        let (bytes, len) = utf8::encode(codepoint);
        self.append_bytes(&bytes[..len])
    }

    /// Append formatted text.
    ///
    /// Two passes: a dry run measures the exact rendered length without
    /// writing, capacity is grown to fit it plus the terminator, then the
    /// text is rendered straight into the buffer tail. Use it through
    /// [`append_fmt!`](crate::append_fmt).
    fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> TextResult<()> {
        let mut counter = LengthCounter(0);
        fmt::write(&mut counter, args)?;
        self.reserve(counter.0)?;

        let start = self.len();
        let storage = self.storage_mut();
        let mut tail = TailWriter {
            tail: &mut storage[start..],
            written: 0,
        };
        fmt::write(&mut tail, args)?;
        let end = start + tail.written;
        storage[end] = 0;
        self.set_len(end);
        Ok(())
    }

    /// Drop all content, keeping the storage.
    fn clear(&mut self) {
        self.set_len(0);
        if let Some(first) = self.storage_mut().first_mut() {
            *first = 0;
        }
    }
}

/// Append `format!`-style text to any [`MutableBuffer`].
///
/// ```
/// use lstr_core::{append_fmt, GrowableBuffer, MutableBuffer};
///
/// let mut buf = GrowableBuffer::new();
/// append_fmt!(buf, "{}-{:03}", "id", 7).unwrap();
/// assert_eq!(buf.as_bytes(), b"id-007");
/// ```
#[macro_export]
macro_rules! append_fmt {
    ($buf:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::MutableBuffer as _;
        $buf.append_fmt(::std::format_args!($($arg)*))
    }};
}

/// Dry-run writer: counts rendered bytes, writes nothing.
struct LengthCounter(usize);

impl fmt::Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes into the free tail of a buffer, always leaving room for the terminator.
struct TailWriter<'a> {
    tail: &'a mut [u8],
    written: usize,
}

impl fmt::Write for TailWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written + s.len();
        // The second render may disagree with the dry run; never overrun.
        if end >= self.tail.len() {
            return Err(fmt::Error);
        }
        self.tail[self.written..end].copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
