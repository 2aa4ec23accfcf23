//! # hedge-mesh
//!
//! hedge-mesh is a generation-validated arena storage engine for half-edge
//! polygon meshes. It stores topologically linked mesh elements (vertices,
//! half-edges, faces, points) in dense, swap-removable containers and hands
//! out strong, type-discriminated handles that stay safely checkable after
//! elements are removed and slots recycled.
//!
//! ## Pieces
//! - Strong indices: [`topology::handle::Handle`] and the per-category
//!   aliases, with offset 0 reserved as the null/sentinel slot
//! - Element stores: [`data::arena::ElementArena`], dense storage with
//!   generation validation and swap-removal
//! - The kernel boundary: [`topology::kernel::ElementStore`] /
//!   [`topology::kernel::Kernel`], with [`topology::kernel::ArenaKernel`]
//!   as the default backend; any conforming backend is drop-in
//! - Proxy cursors: [`topology::proxy`], live re-validating navigation
//! - The façade: [`mesh::Mesh`], counts/proxies/point access
//!
//! ## Handles go stale by design
//! Removal keeps storage dense by relocating the tail element into the
//! freed slot and bumping its generation, so handles to the relocated
//! element stop resolving. Algorithms that remove elements mid-walk must
//! re-fetch their handles afterwards (or heal them through `resolve`).
//!
//! ## Usage
//! ```rust
//! use hedge_mesh::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! let kernel = mesh.kernel_mut();
//! let (pi, point): (PointIndex, _) = kernel.create();
//! point.position = glam::Vec3::new(1.0, 0.0, 0.0);
//! let (vi, vertex): (VertexIndex, _) = kernel.create();
//! vertex.point = pi;
//!
//! assert_eq!(mesh.point_count(), 1);
//! assert_eq!(mesh.vertex_point(vi).unwrap().position.x, 1.0);
//! ```

pub mod data;
pub mod debug_invariants;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use mesh::Mesh;
pub use mesh_error::MeshError;

/// A convenient prelude importing the most-used traits and types.
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh::Mesh;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::element::{Edge, ElementStatus, Face, MeshElement, Point, Vertex};
    pub use crate::topology::handle::{
        EdgeIndex, ElementKind, ErasedIndex, FaceIndex, Handle, PointIndex, VertexIndex,
    };
    pub use crate::topology::kernel::{ArenaKernel, ElementStore, Kernel};
    pub use crate::topology::proxy::{EdgeFn, FaceFn, VertexFn};
}
