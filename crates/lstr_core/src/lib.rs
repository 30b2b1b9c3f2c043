//! Byte-string views, mutable string buffers, and a UTF-8 codec.
//!
//! This crate is the leaf of the `lstr` workspace and has no `lstr_*`
//! dependencies. It provides:
//!
//! - [`StrView`]: an immutable, borrowed byte span with equality and prefix
//!   operations. Views never own memory; their lifetime is tied to the
//!   buffer they borrow from.
//! - [`utf8`]: stateless forward/backward decoding and encoding of
//!   codepoints over raw byte spans.
//! - [`MutableBuffer`]: the append/format contract shared by every buffer
//!   variant, with two implementations:
//!   - [`FixedBuffer`]: inline, non-growing storage with a compile-time
//!     capacity.
//!   - [`GrowableBuffer`]: heap storage supplied by a pluggable
//!     [`BufferAllocator`], grown with a doubling-or-fit policy.
//!
//! Every buffer keeps its bytes NUL-terminated after each successful append;
//! the terminator is never counted in the buffer length.
//!
//! # Tracing
//!
//! Growable buffers emit `debug` events on allocation and reallocation.
//! Enable them in a host binary with `RUST_LOG=lstr_core=debug`.

pub mod buffer;
pub mod config;
pub mod error;
pub mod utf8;
pub mod view;

pub use buffer::{BufferAllocator, FixedBuffer, GrowableBuffer, HeapAllocator, MutableBuffer};
pub use config::BufferConfig;
pub use error::{TextError, TextResult};
pub use view::StrView;
