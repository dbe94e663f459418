//! Error type shared by the fallible `ChunkedList` operations.

use core::fmt;

/// The error type for `ChunkedList` operations.
///
/// Every fallible operation reports through this enum; nothing is retried
/// internally. `InternalInconsistency` is a bug indicator rather than a
/// recoverable condition: it means a container invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index was outside the range the operation allows.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container (or view) length at the time of the call.
        len: usize,
    },
    /// An argument was structurally invalid, e.g. an inverted view range.
    IllegalArgument(&'static str),
    /// A callback-driven operation observed a structural mutation since its
    /// `mod_count` snapshot.
    StructuralConflict,
    /// An operation was called in a state that does not permit it, e.g.
    /// cursor `remove` without a preceding `next`/`previous`.
    IllegalState(&'static str),
    /// A container invariant did not hold. Indicates a defect in the
    /// container itself, never a user error.
    InternalInconsistency(&'static str),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::IllegalArgument(msg) => write!(f, "illegal argument: {msg}"),
            Self::StructuralConflict => {
                f.write_str("container was structurally modified during the operation")
            }
            Self::IllegalState(msg) => write!(f, "illegal state: {msg}"),
            Self::InternalInconsistency(msg) => {
                write!(f, "internal consistency violation: {msg}")
            }
        }
    }
}

impl std::error::Error for ListError {}
