//! # `chunklist` - Chunked Random-Access List
//!
//! A random-access indexed sequence container that stores elements in a
//! dynamically managed set of contiguous chunks instead of one contiguous
//! buffer. The point: insertion and removal at arbitrary positions in large
//! sequences move at most one chunk's worth of elements, while appends stay
//! amortized O(1) and indexed access stays effectively O(1).
//!
//! ## How it works
//!
//! Three views of the sequence are kept in lock-step:
//!
//! 1. **Chunks**: each a contiguous buffer with a used prefix. A chunk
//!    absorbs nearby insertions by growing in place, and splits only once it
//!    is both oversized and densely populated.
//! 2. **Chunk table**: parallel arrays mapping each chunk to the logical
//!    index of its first element and caching its capacity.
//! 3. **Fast map**: a sparse array from `logical_index / STEP` to a chunk
//!    hint, repaired incrementally after every boundary change.
//!
//! Lookup tries the last-access hints, then the fast map with a bounded
//! scan, then binary search over chunk starts. In steady state the scan is
//! zero to two iterations.
//!
//! ## What this buys
//!
//! | Operation        | `Vec<T>`    | `ChunkedList<T>`          |
//! |------------------|-------------|---------------------------|
//! | push             | O(1) am.    | O(1) am.                  |
//! | get / set        | O(1)        | ~O(1)                     |
//! | insert at `i`    | O(n)        | O(chunk) + metadata       |
//! | remove at `i`    | O(n)        | O(chunk) + metadata       |
//!
//! ## Concurrency
//!
//! The list is a single-threaded value object. It is `Send` when `T: Send`
//! but not `Sync`: the read path refreshes last-access hints through
//! interior mutability. Structural mutation during borrowing iteration is
//! rejected at compile time; mutation mid-traversal goes through
//! [`CursorMut`], and range-scoped mutation through [`SubView`].
//!
//! ## Example
//!
//! ```rust
//! use chunklist::ChunkedList;
//!
//! let mut list: ChunkedList<u32> = (0..10).collect();
//! list.insert(5, 99)?;
//! assert_eq!(list.get(5), Some(&99));
//! assert_eq!(list.remove(5)?, 99);
//! assert_eq!(Vec::from(list), (0..10).collect::<Vec<_>>());
//! # Ok::<(), chunklist::ListError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::{
    ChunkedList, CursorMut, IntoIter, Iter, IterMut, SubView, Tuning, BASE_CHUNK,
    DEFAULT_CAPACITY, SPLIT_THRESHOLD, STEP,
};

// Compile-time sanity for the default tuning constants.
const _: () = {
    assert!(BASE_CHUNK > 0);
    assert!(STEP > 0);
    assert!(SPLIT_THRESHOLD >= BASE_CHUNK);
};
