//! Heap-backed buffer with a pluggable allocator.

use std::fmt;

use tracing::debug;

use super::alloc::{BufferAllocator, HeapAllocator};
use super::MutableBuffer;
use crate::config::BufferConfig;
use crate::error::{TextError, TextResult};
use crate::view::StrView;

/// Buffer whose storage comes from a [`BufferAllocator`].
///
/// # Growth Policy
///
/// Before every append the buffer asks for `additional + 1` bytes (content
/// plus terminator):
///
/// - capacity `0`: allocate `max(config.min_capacity, requested)`;
/// - capacity too small: reallocate to `max(len * 2, len + requested)`;
/// - otherwise: nothing.
///
/// Capacity never shrinks. Appends cost O(1) amortized.
///
/// Cloning copies the bytes into fresh storage and clones the allocator, so
/// two buffers never share storage.
#[derive(Clone)]
pub struct GrowableBuffer<A: BufferAllocator = HeapAllocator> {
    storage: Box<[u8]>,
    len: usize,
    allocator: A,
    config: BufferConfig,
}

impl GrowableBuffer<HeapAllocator> {
    /// An empty buffer on the process heap. Nothing is allocated until the
    /// first append.
    pub fn new() -> Self {
        Self::with_allocator(HeapAllocator)
    }

    /// An empty heap buffer using `config`.
    pub fn with_config(config: BufferConfig) -> Self {
        Self::with_allocator_and_config(HeapAllocator, config)
    }

    /// A heap buffer with room for `capacity` content bytes up front.
    ///
    /// The first allocation follows the growth policy, so the floor from
    /// [`BufferConfig::min_capacity`] still applies.
    pub fn with_capacity(capacity: usize) -> Self {
        let config = BufferConfig::default();
        let size = config.min_capacity.max(capacity.saturating_add(1));
        GrowableBuffer {
            storage: vec![0; size].into_boxed_slice(),
            len: 0,
            allocator: HeapAllocator,
            config,
        }
    }

    /// A heap buffer holding a copy of `view`.
    pub fn from_view(view: StrView<'_>) -> Self {
        let mut buf = Self::with_capacity(view.len());
        buf.storage[..view.len()].copy_from_slice(view.as_bytes());
        buf.len = view.len();
        buf
    }
}

impl<A: BufferAllocator> GrowableBuffer<A> {
    /// An empty buffer drawing storage from `allocator`.
    pub fn with_allocator(allocator: A) -> Self {
        Self::with_allocator_and_config(allocator, BufferConfig::default())
    }

    /// An empty buffer drawing storage from `allocator`, grown per `config`.
    pub fn with_allocator_and_config(allocator: A, config: BufferConfig) -> Self {
        GrowableBuffer {
            storage: Box::default(),
            len: 0,
            allocator,
            config,
        }
    }

    /// The injected allocator.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// The growth configuration.
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Consume the buffer, returning its content.
    pub fn into_vec(self) -> Vec<u8> {
        let mut bytes = self.storage.into_vec();
        bytes.truncate(self.len);
        bytes
    }
}

impl<A: BufferAllocator> MutableBuffer for GrowableBuffer<A> {
    fn reserve(&mut self, additional: usize) -> TextResult<()> {
        let requested = additional.saturating_add(1);
        let capacity = self.storage.len();

        let new_capacity = if capacity == 0 {
            self.config.min_capacity.max(requested)
        } else if capacity < self.len.saturating_add(requested) {
            (self.len.saturating_mul(2)).max(self.len.saturating_add(requested))
        } else {
            return Ok(());
        };

        let storage = if capacity == 0 {
            debug!(capacity = new_capacity, "allocating buffer storage");
            self.allocator.alloc(new_capacity)
        } else {
            debug!(
                old_capacity = capacity,
                new_capacity,
                len = self.len,
                "growing buffer storage"
            );
            let old = std::mem::take(&mut self.storage);
            self.allocator.realloc(old, new_capacity)
        };

        let returned = storage.len();
        self.storage = storage;
        if returned < new_capacity {
            // Keep whatever prefix survived, still terminated.
            self.len = self.len.min(returned.saturating_sub(1));
            if let Some(byte) = self.storage.get_mut(self.len) {
                *byte = 0;
            }
            return Err(TextError::AllocationFailed {
                requested: new_capacity,
                returned,
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
        self.storage.len()
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
            len == 0 || len < self.storage.len(),
            "length {len} leaves no room for terminator in {}",
            self.storage.len()
        );
        self.len = len;
    }
}

impl Default for GrowableBuffer<HeapAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GrowableBuffer<HeapAllocator> {
    fn from(s: &str) -> Self {
        Self::from_view(StrView::from(s))
    }
}

impl From<StrView<'_>> for GrowableBuffer<HeapAllocator> {
    fn from(view: StrView<'_>) -> Self {
        Self::from_view(view)
    }
}

impl<A: BufferAllocator, B: BufferAllocator> PartialEq<GrowableBuffer<B>> for GrowableBuffer<A> {
    fn eq(&self, other: &GrowableBuffer<B>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: BufferAllocator> Eq for GrowableBuffer<A> {}

impl<A: BufferAllocator> PartialEq<str> for GrowableBuffer<A> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: BufferAllocator> PartialEq<&str> for GrowableBuffer<A> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: BufferAllocator> fmt::Write for GrowableBuffer<A> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }
}

impl<A: BufferAllocator> fmt::Debug for GrowableBuffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("content", &self.view())
            .field("len", &self.len)
            .field("capacity", &self.storage.len())
            .finish_non_exhaustive()
    }
}
