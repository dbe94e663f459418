//! Chunk-table lifecycle and metadata repair.
//!
//! The table keeps three views of the same truth: the chunks, their logical
//! start indices, and a capacity cache. Every structural change funnels
//! through the repair passes here so the views move in lock-step, and the
//! sparse fast map is refreshed incrementally behind them.

use super::chunk::Chunk;
use super::ChunkedList;

impl<T> ChunkedList<T> {
    /// Appends `chunk` to the table, extending the parallel arrays and
    /// repairing the fast map from the new position.
    pub(super) fn add_chunk_back(&mut self, chunk: Chunk<T>) {
        let start = match self.chunks.len() {
            0 => 0,
            n => self.starts[n - 1] + self.chunks[n - 1].used(),
        };
        self.starts.push(start);
        self.caps.push(chunk.capacity());
        self.chunks.push(chunk);
        self.repair_fast_map(self.chunks.len() - 1);
    }

    /// Places `chunk` at table position `c`, shifting the tail of all three
    /// parallel arrays right by one.
    pub(super) fn insert_chunk_at(&mut self, c: usize, chunk: Chunk<T>) {
        self.caps.insert(c, chunk.capacity());
        self.starts.insert(c, 0); // placeholder, repaired below
        self.chunks.insert(c, chunk);
        self.recompute_starts_from(c);
    }

    /// Drops the chunk at table position `c`, shifting the tail left by one.
    pub(super) fn remove_chunk_at(&mut self, c: usize) {
        self.chunks.remove(c);
        self.starts.remove(c);
        self.caps.remove(c);
        self.recompute_starts_from(c);
    }

    /// Rebuilds `starts` and the capacity cache from chunk `c0` onward, then
    /// repairs the affected fast-map suffix and re-synchronizes the access
    /// hints with the new boundaries.
    pub(super) fn recompute_starts_from(&mut self, c0: usize) {
        let count = self.chunks.len();
        if count == 0 {
            self.hint_chunk.set(None);
            return;
        }
        let c0 = c0.min(count);
        let mut cursor = if c0 == 0 {
            0
        } else {
            self.starts[c0 - 1] + self.chunks[c0 - 1].used()
        };
        for c in c0..count {
            self.starts[c] = cursor;
            cursor += self.chunks[c].used();
            self.caps[c] = self.chunks[c].capacity();
        }
        self.repair_fast_map(c0.min(count - 1));
        self.sync_hints();
    }

    /// Incrementally refreshes fast-map entries starting at the first one a
    /// boundary change at chunk `c0` can affect.
    ///
    /// Entries are hints: the pass may stop once a computed value matches
    /// what is already stored, leaving later entries approximate. The
    /// locator's bounded scan absorbs the residue; [`Self::rebuild_fast_map`]
    /// makes every entry exact.
    pub(super) fn repair_fast_map(&mut self, c0: usize) {
        let count = self.chunks.len();
        if count == 0 {
            return;
        }
        let step = self.tuning.step;
        let needed = self.len.div_ceil(step);
        if needed == 0 {
            return;
        }
        let prev_len = self.fast_map.len();
        if prev_len < needed {
            self.fast_map.resize(needed.max(prev_len * 2), 0);
        }

        let first = if c0 == 0 { 0 } else { self.starts[c0] / step };
        let mut c = if first == 0 {
            0
        } else {
            self.fast_map[first - 1].min(count - 1)
        };
        // The seed entry predates this boundary change; walk it back if the
        // change moved its chunk past the stride point.
        while c > 0 && self.starts[c] > first * step {
            c -= 1;
        }
        for k in first..needed {
            let target = k * step;
            while c + 1 < count && self.starts[c + 1] <= target {
                c += 1;
            }
            if k > first && k < prev_len && self.fast_map[k] == c {
                break;
            }
            self.fast_map[k] = c;
        }
    }

    /// Rebuilds every fast-map entry exactly. Needed only after bulk
    /// rearrangement, or when entry-level precision is being checked.
    pub(super) fn rebuild_fast_map(&mut self) {
        let step = self.tuning.step;
        let needed = self.len.div_ceil(step);
        self.fast_map.clear();
        self.fast_map.resize(needed, 0);
        if needed == 0 || self.chunks.is_empty() {
            return;
        }
        let count = self.chunks.len();
        let mut c = 0usize;
        for k in 0..needed {
            let target = k * step;
            while c + 1 < count && self.starts[c + 1] <= target {
                c += 1;
            }
            self.fast_map[k] = c;
        }
    }

    /// Splits chunk `c` in two at half of its used prefix. No-op unless the
    /// chunk is both at the split threshold and densely populated.
    pub(super) fn split_chunk(&mut self, c: usize) {
        let used = self.chunks[c].used();
        if self.chunks[c].capacity() < self.tuning.split_threshold
            || used < self.tuning.base_chunk
        {
            return;
        }
        let half = used / 2;
        let mut tail = Chunk::new(used - half, self.tuning.base_chunk);
        tail.extend_from(self.chunks[c].drain_tail(half));
        if self.chunks[c].capacity() > self.tuning.base_chunk + self.tuning.base_chunk / 2 {
            self.normalize_chunk(c);
        }
        self.insert_chunk_at(c + 1, tail);
    }

    /// Replaces an oversized, sparsely used chunk with a standard-capacity
    /// one holding the same elements. Bounds steady-state per-chunk memory.
    pub(super) fn normalize_chunk(&mut self, c: usize) {
        let used = self.chunks[c].used();
        let capacity = self.chunks[c].capacity();
        let base = self.tuning.base_chunk;
        if capacity <= base || (used > base / 2 && capacity < base + base / 2) {
            return;
        }
        let mut fresh = Chunk::new(used, base);
        fresh.extend_from(self.chunks[c].drain_all());
        self.chunks[c] = fresh;
        self.caps[c] = self.chunks[c].capacity();
    }

    /// Re-synchronizes the access hints with the current table. A hint that
    /// no longer names a chunk is dropped rather than left pointing at a
    /// shifted slot.
    fn sync_hints(&self) {
        match self.hint_chunk.get() {
            Some(h) if h < self.chunks.len() => self.hint_start.set(self.starts[h]),
            Some(_) => self.hint_chunk.set(None),
            None => {}
        }
    }

    /// Debug-build verification of the container invariants: used counts sum
    /// to `len`, starts are cumulative, the capacity cache is truthful, and
    /// a non-empty list ends in a non-empty chunk.
    #[cfg(debug_assertions)]
    pub(super) fn debug_check(&self) {
        debug_assert_eq!(self.chunks.len(), self.starts.len());
        debug_assert_eq!(self.chunks.len(), self.caps.len());
        let mut expected_start = 0usize;
        for c in 0..self.chunks.len() {
            debug_assert_eq!(self.starts[c], expected_start, "chunk {c} start drifted");
            debug_assert_eq!(
                self.caps[c],
                self.chunks[c].capacity(),
                "chunk {c} capacity cache drifted"
            );
            debug_assert!(self.chunks[c].used() <= self.chunks[c].capacity());
            expected_start += self.chunks[c].used();
        }
        debug_assert_eq!(expected_start, self.len, "chunk used counts disagree with len");
        if self.len > 0 {
            debug_assert!(
                self.chunks.last().is_some_and(|c| c.used() > 0),
                "non-empty list ends in an empty chunk"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(super) fn debug_check(&self) {}
}
