//! `Chunk` — a dumb, capacity-managed element buffer.
//!
//! A chunk owns a contiguous buffer and a used prefix; it knows nothing about
//! logical indices. All relationships to the rest of the list (start offsets,
//! capacity caches, the fast map) are maintained by the chunk table.

/// A contiguous buffer of element slots. Elements occupy `[0, used)`; slots
/// above the used prefix hold no value (`Vec` move-out semantics).
#[derive(Debug)]
pub(super) struct Chunk<T> {
    buf: Vec<T>,
}

impl<T> Chunk<T> {
    /// Creates a chunk with `capacity = max(capacity_hint, base)` and no
    /// elements.
    pub(super) fn new(capacity_hint: usize, base: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity_hint.max(base)),
        }
    }

    /// Number of occupied slots.
    #[inline(always)]
    pub(super) fn used(&self) -> usize {
        self.buf.len()
    }

    /// Number of allocated slots.
    #[inline(always)]
    pub(super) fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if no free slot remains.
    #[inline(always)]
    pub(super) fn is_full(&self) -> bool {
        self.buf.len() == self.buf.capacity()
    }

    /// Grows the buffer by at least `delta` slots, preserving the used
    /// prefix.
    pub(super) fn grow(&mut self, delta: usize) {
        let want = self.buf.capacity() + delta;
        self.buf.reserve_exact(want - self.buf.len());
    }

    /// Appends to the used prefix. The caller ensures a free slot exists.
    #[inline]
    pub(super) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.buf.push(value);
    }

    /// Inserts at `offset`, shifting `[offset, used)` right by one.
    #[inline]
    pub(super) fn insert_at(&mut self, offset: usize, value: T) {
        self.buf.insert(offset, value);
    }

    /// Removes the element at `offset`, shifting `[offset + 1, used)` left by
    /// one. The vacated trailing slot holds no value afterwards.
    #[inline]
    pub(super) fn remove_at(&mut self, offset: usize) -> T {
        self.buf.remove(offset)
    }

    #[inline(always)]
    pub(super) fn get(&self, offset: usize) -> Option<&T> {
        self.buf.get(offset)
    }

    #[inline(always)]
    pub(super) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.buf.get_mut(offset)
    }

    #[inline(always)]
    pub(super) fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline(always)]
    pub(super) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Moves `[at, used)` out in order, leaving the source slots vacant.
    pub(super) fn drain_tail(&mut self, at: usize) -> std::vec::Drain<'_, T> {
        self.buf.drain(at..)
    }

    /// Moves every element out in order, leaving the chunk empty but
    /// allocated.
    pub(super) fn drain_all(&mut self) -> std::vec::Drain<'_, T> {
        self.buf.drain(..)
    }

    /// Refills an empty chunk from an iterator, up to `count` elements.
    pub(super) fn refill(&mut self, source: &mut impl Iterator<Item = T>, count: usize) {
        debug_assert!(self.buf.is_empty());
        self.buf.extend(source.take(count));
    }

    /// Absorbs elements drained from another chunk.
    pub(super) fn extend_from(&mut self, source: std::vec::Drain<'_, T>) {
        self.buf.extend(source);
    }

    pub(super) fn into_buf(self) -> Vec<T> {
        self.buf
    }
}

impl<T: Clone> Chunk<T> {
    /// Clones the chunk preserving its exact capacity, so the capacity cache
    /// of a cloned list stays truthful.
    pub(super) fn clone_preserving_capacity(&self) -> Self {
        let mut buf = Vec::with_capacity(self.buf.capacity());
        buf.extend(self.buf.iter().cloned());
        Self { buf }
    }
}
