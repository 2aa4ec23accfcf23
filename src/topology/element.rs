//! The half-edge topology records: [`Vertex`], [`Edge`], [`Face`], [`Point`].
//!
//! Elements are plain data. Their fields are strong indices into the other
//! categories, so the records together form the adjacency graph; resolving
//! those indices is the job of the kernel, never of the records themselves.
//! Every record additionally carries the generation counter its store
//! validates handles against, and a free-form status word.

use core::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::topology::handle::{
    EdgeIndex, ElementKind, FaceIndex, Generation, PointIndex, VertexIndex,
};

/// Per-element status flags, in the flag-word style of OpenMesh-like kernels.
///
/// The storage layer never interprets these bits; they are for consumers
/// marking elements during traversals and edits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementStatus(u32);

impl ElementStatus {
    /// Element is part of the consumer's current selection.
    pub const SELECTED: u32 = 1 << 0;
    /// Element has been visited by an in-progress traversal.
    pub const VISITED: u32 = 1 << 1;

    /// Set the given flag bits.
    #[inline]
    pub fn set(&mut self, flags: u32) {
        self.0 |= flags;
    }

    /// Clear the given flag bits.
    #[inline]
    pub fn clear(&mut self, flags: u32) {
        self.0 &= !flags;
    }

    /// True iff all of the given flag bits are set.
    #[inline]
    pub fn contains(self, flags: u32) -> bool {
        self.0 & flags == flags
    }

    /// The raw flag word.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Behavior shared by the four element categories so stores and kernels can
/// be generic over them.
///
/// The generation accessors exist for kernel bookkeeping; consumers
/// populate the topology fields and leave the generation alone.
pub trait MeshElement: Default + fmt::Debug {
    /// Runtime discriminant matching the static category.
    const KIND: ElementKind;

    /// Generation currently stamped on this element.
    fn generation(&self) -> Generation;
    /// Stamp a new generation on this element.
    fn set_generation(&mut self, generation: Generation);
    /// Status flag word.
    fn status(&self) -> ElementStatus;
    /// Mutable status flag word.
    fn status_mut(&mut self) -> &mut ElementStatus;
}

macro_rules! impl_mesh_element {
    ($element:ty, $kind:expr) => {
        impl MeshElement for $element {
            const KIND: ElementKind = $kind;

            #[inline]
            fn generation(&self) -> Generation {
                self.generation
            }
            #[inline]
            fn set_generation(&mut self, generation: Generation) {
                self.generation = generation;
            }
            #[inline]
            fn status(&self) -> ElementStatus {
                self.status
            }
            #[inline]
            fn status_mut(&mut self) -> &mut ElementStatus {
                &mut self.status
            }
        }
    };
}

/// A mesh vertex: one incident half-edge and the geometric point it sits on.
///
/// Multiple vertices may reference the same point (e.g. across a texture
/// seam); the point carries the position, the vertex carries connectivity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub(crate) generation: Generation,
    pub status: ElementStatus,
    pub point: PointIndex,
    pub edge: EdgeIndex,
}

/// A half-edge: one directed side of an undirected mesh edge.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Edge {
    pub(crate) generation: Generation,
    pub status: ElementStatus,
    /// Destination vertex.
    pub vertex: VertexIndex,
    /// Face this half-edge bounds.
    pub face: FaceIndex,
    /// Next half-edge around `face`.
    pub next: EdgeIndex,
    /// Previous half-edge around `face`.
    pub prev: EdgeIndex,
    /// Opposing half-edge across the undirected edge; null on a boundary.
    pub adjacent: EdgeIndex,
}

impl Edge {
    /// True iff no reciprocal half-edge has been assigned.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.adjacent.is_valid()
    }
}

/// A face, anchored at one half-edge of its boundary loop.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Face {
    pub(crate) generation: Generation,
    pub status: ElementStatus,
    pub edge: EdgeIndex,
}

/// A geometric point. Pure payload, no connectivity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub(crate) generation: Generation,
    pub status: ElementStatus,
    pub position: Vec3,
}

impl Point {
    /// Point at the given position.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Self::default()
        }
    }
}

impl_mesh_element!(Vertex, ElementKind::Vertex);
impl_mesh_element!(Edge, ElementKind::Edge);
impl_mesh_element!(Face, ElementKind::Face);
impl_mesh_element!(Point, ElementKind::Point);
