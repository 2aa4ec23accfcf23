//! `MeshError`: unified error type for the hedge-mesh public APIs.
//!
//! Lookup misses (stale handle, out-of-range offset, null handle) are not
//! errors; they surface as `None` at the store boundary. `MeshError` covers
//! the structural violations reported by the invariant-validation surface.

use thiserror::Error;

use crate::topology::handle::ErasedIndex;

/// Unified error type for hedge-mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// An element field names another element that does not resolve.
    #[error("element {0:?} references missing element {1:?}")]
    DanglingReference(ErasedIndex, ErasedIndex),
    /// Walking `next` from a face's root edge did not return to the root
    /// within the live edge count.
    #[error("face {0:?} half-edge loop does not close within {1} edges")]
    UnclosedFaceLoop(ErasedIndex, usize),
    /// An edge reached on a face's boundary loop is owned by a different face.
    #[error("edge {0:?} on the loop of face {1:?} is owned by face {2:?}")]
    ForeignLoopEdge(ErasedIndex, ErasedIndex, ErasedIndex),
    /// `edge.adjacent.adjacent` did not lead back to `edge`.
    #[error("edge {0:?} adjacency is not reciprocal (adjacent {1:?})")]
    NonReciprocalAdjacency(ErasedIndex, ErasedIndex),
}
