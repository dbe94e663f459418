//! Logical-index resolution: cached hints, then the sparse fast map with a
//! bounded scan, then binary search over chunk starts.

use super::ChunkedList;
use crate::error::ListError;

impl<T> ChunkedList<T> {
    /// Resolves logical index `index` to `(chunk, offset)`.
    ///
    /// The caller guarantees `index < self.len`. Every successful resolution
    /// refreshes the last-access hints, which makes sequential access
    /// effectively free.
    pub(super) fn locate(&self, index: usize) -> Result<(usize, usize), ListError> {
        debug_assert!(index < self.len);
        if self.chunks.is_empty() {
            return Err(ListError::InternalInconsistency(
                "no chunks while resolving an in-range index",
            ));
        }

        // Hint path: the last located chunk, then its successor (forward
        // sequential access lands there).
        if let Some(h) = self.hint_chunk.get() {
            if h < self.chunks.len() {
                let start = self.hint_start.get();
                if index >= start && index < start + self.chunks[h].used() {
                    return Ok((h, index - start));
                }
                if h + 1 < self.chunks.len() {
                    let next_start = self.starts[h + 1];
                    if index >= next_start && index < next_start + self.chunks[h + 1].used() {
                        self.hint_chunk.set(Some(h + 1));
                        self.hint_start.set(next_start);
                        return Ok((h + 1, index - next_start));
                    }
                }
            }
        }

        // Fast-map path: the mapped entry is a hint that contains or precedes
        // the index; converge with a bounded scan in either direction.
        let k = index / self.tuning.step;
        let mut c = if k < self.fast_map.len() {
            // Entries are repaired incrementally and may lag a removal by one
            // pass; clamp before use, the scans below converge.
            self.fast_map[k].min(self.chunks.len() - 1)
        } else {
            self.chunk_for_index(index)
        };

        while c > 0 && self.starts[c] > index {
            c -= 1;
        }
        while c + 1 < self.chunks.len() && self.starts[c + 1] <= index {
            c += 1;
        }

        let start = self.starts[c];
        if start > index || index - start >= self.chunks[c].used() {
            return Err(ListError::InternalInconsistency(
                "locator converged outside the chunk's used prefix",
            ));
        }
        self.hint_chunk.set(Some(c));
        self.hint_start.set(start);
        Ok((c, index - start))
    }

    /// Binary search for the greatest chunk whose start is at or before
    /// `index`. With the start invariant this is the containing chunk: a run
    /// of equal starts means empty chunks, and the last of the run owns the
    /// index.
    pub(super) fn chunk_for_index(&self, index: usize) -> usize {
        debug_assert!(!self.chunks.is_empty());
        let after = self.starts.partition_point(|&start| start <= index);
        after.saturating_sub(1)
    }
}
