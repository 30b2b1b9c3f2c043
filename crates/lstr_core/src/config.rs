//! Buffer configuration.

/// Default floor for the first allocation of a growable buffer, in bytes.
pub const DEFAULT_MIN_CAPACITY: usize = 256;

/// Growth-policy settings for [`GrowableBuffer`](crate::GrowableBuffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Minimum capacity of the first allocation.
    ///
    /// The first append allocates `max(min_capacity, requested)` bytes.
    pub min_capacity: usize,
}

impl BufferConfig {
    /// Configuration with the default capacity floor.
    pub const fn new() -> Self {
        BufferConfig {
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }

    /// Replace the capacity floor.
    #[must_use]
    pub const fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
