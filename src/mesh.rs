//! The mesh façade: owns a storage kernel, hands out counts, proxies, and
//! point lookups.
//!
//! `Mesh` adds no storage of its own. Consumers read topology through the
//! proxy cursors and geometry through the point accessors; they build and
//! edit topology through [`kernel_mut`](Mesh::kernel_mut); mutation always
//! flows through the kernel, never around it.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::element::{Edge, Face, Point, Vertex};
use crate::topology::handle::{EdgeIndex, FaceIndex, Offset, PointIndex, VertexIndex};
use crate::topology::kernel::store::{ElementStore, Kernel};
use crate::topology::kernel::ArenaKernel;
use crate::topology::proxy::{EdgeFn, FaceFn, VertexFn};
use crate::topology::validation::validate_kernel;

/// A half-edge mesh over a pluggable storage kernel.
#[derive(Clone, Debug)]
pub struct Mesh<K: Kernel = ArenaKernel> {
    kernel: K,
}

impl<K: Kernel> Default for Mesh<K> {
    fn default() -> Self {
        Self {
            kernel: K::default(),
        }
    }
}

impl Mesh<ArenaKernel> {
    /// Empty mesh over the default arena kernel.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Kernel> Mesh<K> {
    /// Mesh over an injected kernel.
    pub fn with_kernel(kernel: K) -> Self {
        Self { kernel }
    }

    /// The storage kernel.
    #[inline]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Mutable access to the storage kernel; all topology edits go here.
    #[inline]
    pub fn kernel_mut(&mut self) -> &mut K {
        &mut self.kernel
    }

    /// Number of vertices, excluding the reserved sentinel.
    pub fn vertex_count(&self) -> usize {
        self.kernel.vertex_count().saturating_sub(1)
    }

    /// Number of half-edges, excluding the reserved sentinel.
    pub fn edge_count(&self) -> usize {
        self.kernel.edge_count().saturating_sub(1)
    }

    /// Number of faces, excluding the reserved sentinel.
    pub fn face_count(&self) -> usize {
        self.kernel.face_count().saturating_sub(1)
    }

    /// Number of points, excluding the reserved sentinel.
    pub fn point_count(&self) -> usize {
        self.kernel.point_count().saturating_sub(1)
    }

    /// Edge cursor for `index`.
    pub fn edge(&self, index: EdgeIndex) -> EdgeFn<'_, K> {
        EdgeFn::new(&self.kernel, index)
    }

    /// Face cursor for `index`.
    pub fn face(&self, index: FaceIndex) -> FaceFn<'_, K> {
        FaceFn::new(&self.kernel, index)
    }

    /// Vertex cursor for `index`.
    pub fn vertex(&self, index: VertexIndex) -> VertexFn<'_, K> {
        VertexFn::new(&self.kernel, index)
    }

    /// Point by strong index.
    pub fn point(&self, index: PointIndex) -> Option<&Point> {
        self.kernel.get(index)
    }

    /// Point a vertex sits on.
    pub fn vertex_point(&self, index: VertexIndex) -> Option<&Point> {
        self.vertex(index).point()
    }

    /// Point by raw slot offset, resolved against the current occupant.
    pub fn point_at(&self, offset: Offset) -> Option<&Point> {
        let mut handle = PointIndex::new(offset);
        ElementStore::<Point>::resolve(&self.kernel, &mut handle)
    }

    /// The two endpoint points of an edge: the destination vertices of the
    /// edge itself and of its `next` half-edge around the face.
    pub fn edge_points(&self, index: EdgeIndex) -> Option<(&Point, &Point)> {
        let edge = self.edge(index);
        let start = edge.vertex().point()?;
        let end = edge.next().vertex().point()?;
        Some((start, end))
    }

    /// Live points and their handles, sentinel excluded.
    pub fn points(&self) -> impl Iterator<Item = (PointIndex, &Point)> {
        ElementStore::<Point>::iter(&self.kernel)
    }

    /// Live vertices and their handles, sentinel excluded.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &Vertex)> {
        ElementStore::<Vertex>::iter(&self.kernel)
    }

    /// Live edges and their handles, sentinel excluded.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge)> {
        ElementStore::<Edge>::iter(&self.kernel)
    }

    /// Live faces and their handles, sentinel excluded.
    pub fn faces(&self) -> impl Iterator<Item = (FaceIndex, &Face)> {
        ElementStore::<Face>::iter(&self.kernel)
    }
}

impl<K: Kernel> DebugInvariants for Mesh<K> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "mesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        validate_kernel(&self.kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mesh_reports_zero_external_counts() {
        let mesh = Mesh::<ArenaKernel>::new();
        assert_eq!(mesh.kernel().point_count(), 1);
        assert_eq!(mesh.kernel().vertex_count(), 1);
        assert_eq!(mesh.kernel().edge_count(), 1);
        assert_eq!(mesh.kernel().face_count(), 1);

        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn point_lookup_by_index_offset_and_vertex() {
        let mut mesh = Mesh::<ArenaKernel>::new();
        let kernel = mesh.kernel_mut();
        let (pi, point): (PointIndex, _) = kernel.create();
        point.position = glam::Vec3::new(1.0, 2.0, 3.0);
        let (vi, vertex): (VertexIndex, _) = kernel.create();
        vertex.point = pi;

        assert_eq!(mesh.point(pi).unwrap().position, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.point_at(pi.offset()).unwrap().position.z, 3.0);
        assert_eq!(mesh.vertex_point(vi).unwrap().position.y, 2.0);
        assert!(mesh.point_at(0).is_none());
    }

    #[test]
    fn counts_track_kernel_mutation() {
        let mut mesh = Mesh::<ArenaKernel>::new();
        let (pi, _): (PointIndex, _) = mesh.kernel_mut().create();
        assert_eq!(mesh.point_count(), 1);
        mesh.kernel_mut().remove(pi);
        assert_eq!(mesh.point_count(), 0);
    }
}
