//! Inline, non-growing buffer.

use std::fmt;

use super::MutableBuffer;
use crate::error::{TextError, TextResult};
use crate::view::StrView;

/// Buffer with `N` bytes of inline storage.
///
/// One byte is always reserved for the terminator, so at most `N - 1`
/// content bytes fit. An append that would exceed that fails with
/// [`TextError::CapacityExceeded`] and leaves the buffer untouched.
///
/// Copying a `FixedBuffer` duplicates the entire storage array, not just
/// the content.
#[derive(Clone, Copy)]
pub struct FixedBuffer<const N: usize> {
    storage: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuffer<N> {
    /// The compile-time capacity (terminator included).
    pub const CAPACITY: usize = N;

    /// An empty buffer.
    pub const fn new() -> Self {
        FixedBuffer {
            storage: [0; N],
            len: 0,
        }
    }

    /// A buffer holding a copy of `view`.
    ///
    /// Fails if `view.len() + 1 > N`.
    pub fn from_view(view: StrView<'_>) -> TextResult<Self> {
        let mut buf = Self::new();
        buf.append_view(view)?;
        Ok(buf)
    }
}

impl<const N: usize> MutableBuffer for FixedBuffer<N> {
    fn reserve(&mut self, additional: usize) -> TextResult<()> {
        let requested = self.len.saturating_add(additional).saturating_add(1);
        if requested > N {
            return Err(TextError::CapacityExceeded {
                requested,
                capacity: N,
            });
        }
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn storage(&self) -> &[u8] {
        &self.storage
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        debug_assert!(
            len == 0 || len < N,
            "length {len} leaves no room for terminator in {N}"
        );
        self.len = len;
    }
}

impl<const N: usize> Default for FixedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&str> for FixedBuffer<N> {
    type Error = TextError;

    fn try_from(s: &str) -> TextResult<Self> {
        Self::from_view(StrView::from(s))
    }
}

impl<const N: usize> TryFrom<StrView<'_>> for FixedBuffer<N> {
    type Error = TextError;

    fn try_from(view: StrView<'_>) -> TextResult<Self> {
        Self::from_view(view)
    }
}

impl<const N: usize> PartialEq for FixedBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedBuffer<N> {}

impl<const N: usize> PartialEq<str> for FixedBuffer<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedBuffer<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Write for FixedBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }
}

impl<const N: usize> fmt::Debug for FixedBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("content", &self.view())
            .field("capacity", &N)
            .finish()
    }
}
