//! Mesh topology: strong indices, element records, the storage-kernel
//! boundary, proxy cursors, and structural validation.

pub mod element;
pub mod handle;
pub mod kernel;
pub mod proxy;
pub mod validation;

pub use element::{Edge, ElementStatus, Face, MeshElement, Point, Vertex};
pub use handle::{
    EdgeIndex, ElementKind, ErasedIndex, FaceIndex, Generation, Handle, Offset, PointIndex,
    VertexIndex,
};
pub use kernel::{ArenaKernel, ElementStore, Kernel};
pub use proxy::{EdgeFn, ElementFn, FaceFn, VertexFn};
