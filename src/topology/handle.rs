//! `Handle<E>`: strong, generation-validated handles for mesh elements.
//!
//! Every element of a mesh (vertex, edge, face, point) is named by a handle
//! carrying a slot offset and a generation counter. Offset 0 is reserved in
//! every store for a permanently allocated sentinel element, so a
//! default-constructed handle doubles as the null handle. The element
//! category is part of the handle's *type*: an `EdgeIndex` can never be
//! passed where a `FaceIndex` is expected.
//!
//! Handles are plain values. Copying one, holding one past the life of the
//! element it names, or comparing handles from different meshes is always
//! safe; all fallibility lives in resolution against a store.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::topology::element::{Edge, Face, MeshElement, Point, Vertex};

/// Raw slot offset inside one element store.
pub type Offset = u32;
/// Per-slot reuse counter; see [`Handle`].
pub type Generation = u32;

/// Discriminant for the four element categories.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
    Point,
}

/// A typed handle to one element of one category.
///
/// `E` is the element type itself, used purely as a compile-time category
/// marker; the handle stores no `E` value. Two handles are equal iff they
/// have the same category, offset, and generation.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Handle<E> {
    offset: Offset,
    generation: Generation,
    #[serde(skip)]
    _kind: PhantomData<fn() -> E>,
}

/// Strong index for a [`Vertex`].
pub type VertexIndex = Handle<Vertex>;
/// Strong index for an [`Edge`].
pub type EdgeIndex = Handle<Edge>;
/// Strong index for a [`Face`].
pub type FaceIndex = Handle<Face>;
/// Strong index for a [`Point`].
pub type PointIndex = Handle<Point>;

impl<E> Handle<E> {
    /// Handle for `offset` at generation 0.
    #[inline]
    pub const fn new(offset: Offset) -> Self {
        Self::with_generation(offset, 0)
    }

    /// Handle for `offset` at an explicit generation.
    #[inline]
    pub const fn with_generation(offset: Offset, generation: Generation) -> Self {
        Self {
            offset,
            generation,
            _kind: PhantomData,
        }
    }

    /// Slot offset inside the category's store.
    #[inline]
    pub const fn offset(self) -> Offset {
        self.offset
    }

    /// Generation this handle was minted at.
    #[inline]
    pub const fn generation(self) -> Generation {
        self.generation
    }

    /// True iff this handle is not the null/sentinel handle.
    ///
    /// Existence is *not* verified; a valid handle may still fail to
    /// resolve once its slot has been recycled.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.offset != 0
    }

    /// Overwrite the generation, keeping the offset.
    ///
    /// Kernel bookkeeping: used to stamp freshly created or relocated
    /// elements and to heal a handle through `resolve`.
    #[inline]
    pub fn set_generation(&mut self, generation: Generation) {
        self.generation = generation;
    }
}

impl<E: MeshElement> Handle<E> {
    /// Category discriminant of this handle's type.
    #[inline]
    pub fn kind(self) -> ElementKind {
        E::KIND
    }
}

// Manual impls: the derives would put unwanted bounds on `E`, which only
// ever appears inside `PhantomData`.

impl<E> Default for Handle<E> {
    #[inline]
    fn default() -> Self {
        Self::with_generation(0, 0)
    }
}

impl<E> Copy for Handle<E> {}

impl<E> Clone for Handle<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> PartialEq for Handle<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.generation == other.generation
    }
}

impl<E> Eq for Handle<E> {}

impl<E> Hash for Handle<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
        self.generation.hash(state);
    }
}

impl<E> PartialOrd for Handle<E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Handle<E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.offset, self.generation).cmp(&(other.offset, other.generation))
    }
}

impl<E: MeshElement> fmt::Debug for Handle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}Index({}, {})", E::KIND, self.offset, self.generation)
    }
}

/// Kind-erased form of a handle, for diagnostics and cross-category
/// comparison. Unlike [`Handle`], the category is a runtime tag here, so
/// an edge index and a vertex index with identical offset/generation
/// compare unequal through this type as well.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErasedIndex {
    pub kind: ElementKind,
    pub offset: Offset,
    pub generation: Generation,
}

impl<E: MeshElement> From<Handle<E>> for ErasedIndex {
    #[inline]
    fn from(handle: Handle<E>) -> Self {
        Self {
            kind: E::KIND,
            offset: handle.offset(),
            generation: handle.generation(),
        }
    }
}

impl fmt::Debug for ErasedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}Index({}, {})", self.kind, self.offset, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        let def = EdgeIndex::default();
        assert_eq!(def.offset(), 0);
        assert_eq!(def.generation(), 0);
        assert!(!def.is_valid());
    }

    #[test]
    fn copy_and_compare() {
        let e1 = EdgeIndex::with_generation(1, 1);
        let e2 = e1;
        assert_eq!(e1, e2);
        assert_ne!(e1, EdgeIndex::default());
        assert_ne!(e1, EdgeIndex::with_generation(1, 2));
        assert_ne!(e1, EdgeIndex::with_generation(2, 1));
    }

    #[test]
    fn erased_distinguishes_kinds() {
        let edge = ErasedIndex::from(EdgeIndex::with_generation(1, 1));
        let vertex = ErasedIndex::from(VertexIndex::with_generation(1, 1));
        assert_ne!(edge, vertex);
        assert_eq!(edge, ErasedIndex::from(EdgeIndex::with_generation(1, 1)));
        assert_eq!(edge.kind, ElementKind::Edge);
        assert_eq!(vertex.kind, ElementKind::Vertex);
    }

    #[test]
    fn debug_names_the_kind() {
        let face = FaceIndex::with_generation(7, 2);
        assert_eq!(format!("{face:?}"), "FaceIndex(7, 2)");
    }

    #[test]
    fn ordering_and_hash() {
        use std::collections::HashSet;
        let a = PointIndex::new(1);
        let b = PointIndex::new(2);
        assert!(a < b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(a);
        assert_eq!(set.len(), 2);
    }
}
