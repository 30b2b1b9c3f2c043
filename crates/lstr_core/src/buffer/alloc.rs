//! Allocator capability for growable buffers.

/// Storage provider injected into a [`GrowableBuffer`](super::GrowableBuffer).
///
/// `self` is the allocator context: an arena, a pool, a counting wrapper.
/// There is no deallocation hook; storage handed out is owned by the buffer
/// and dropped with it.
pub trait BufferAllocator {
    /// Provide fresh, zero-filled storage of exactly `size` bytes.
    fn alloc(&mut self, size: usize) -> Box<[u8]>;

    /// Resize `storage` to exactly `size` bytes, preserving its prefix.
    fn realloc(&mut self, storage: Box<[u8]>, size: usize) -> Box<[u8]>;
}

/// The process heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapAllocator;

impl BufferAllocator for HeapAllocator {
    fn alloc(&mut self, size: usize) -> Box<[u8]> {
        vec![0; size].into_boxed_slice()
    }

    fn realloc(&mut self, storage: Box<[u8]>, size: usize) -> Box<[u8]> {
        let mut bytes = storage.into_vec();
        bytes.resize(size, 0);
        bytes.into_boxed_slice()
    }
}

impl<A: BufferAllocator + ?Sized> BufferAllocator for &mut A {
    fn alloc(&mut self, size: usize) -> Box<[u8]> {
        (**self).alloc(size)
    }

    fn realloc(&mut self, storage: Box<[u8]>, size: usize) -> Box<[u8]> {
        (**self).realloc(storage, size)
    }
}
