//! Error type shared by views and buffers.
//!
//! Every condition here is a caller bug rather than a runtime condition:
//! an append that does not fit a fixed buffer, an out-of-range index, or a
//! comparison against an absent argument. They are surfaced as values so the
//! caller decides whether to abort; nothing is truncated or wrapped silently.

use thiserror::Error;

/// Errors produced by `lstr_core` operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The append (or construction) needs more bytes than the buffer can hold.
    ///
    /// `requested` includes the trailing NUL terminator.
    #[error("buffer capacity exceeded: {requested} bytes requested, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// A bounds-checked byte access fell outside the view.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A comparison that requires a present argument was handed `None`.
    #[error("cannot compare against an absent string")]
    AbsentArgument,

    /// The allocator returned less storage than was requested.
    #[error("allocator returned {returned} bytes, {requested} requested")]
    AllocationFailed { requested: usize, returned: usize },

    /// A `Display` implementation failed while rendering a formatted append.
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Result alias for `lstr_core` operations.
pub type TextResult<T> = Result<T, TextError>;
