//! Structural validation over a storage kernel.
//!
//! These checks cover the half-edge invariants the storage layer itself
//! cannot enforce: face boundary loops must close, adjacency must be
//! reciprocal, and element fields must not dangle. Partially built meshes
//! routinely violate them, so validation is an explicit call (or a
//! [`DebugInvariants`](crate::debug_invariants::DebugInvariants) assert),
//! never an implicit side effect of mutation.

use log::warn;

use crate::mesh_error::MeshError;
use crate::topology::element::{Edge, Face, Vertex};
use crate::topology::handle::ErasedIndex;
use crate::topology::kernel::store::{ElementStore, Kernel};

/// Validate every structural invariant, returning the first violation.
pub fn validate_kernel<K: Kernel>(kernel: &K) -> Result<(), MeshError> {
    let result = validate_vertices(kernel)
        .and_then(|()| validate_edges(kernel))
        .and_then(|()| validate_faces(kernel));
    if let Err(ref error) = result {
        warn!("mesh validation failed: {error}");
    }
    result
}

/// Non-null vertex fields must resolve.
pub fn validate_vertices<K: Kernel>(kernel: &K) -> Result<(), MeshError> {
    for (vi, vertex) in ElementStore::<Vertex>::iter(kernel) {
        if vertex.point.is_valid() && kernel.get(vertex.point).is_none() {
            return Err(MeshError::DanglingReference(vi.into(), vertex.point.into()));
        }
        if vertex.edge.is_valid() && kernel.get(vertex.edge).is_none() {
            return Err(MeshError::DanglingReference(vi.into(), vertex.edge.into()));
        }
    }
    Ok(())
}

/// Non-null edge fields must resolve and `adjacent` must be reciprocal.
pub fn validate_edges<K: Kernel>(kernel: &K) -> Result<(), MeshError> {
    for (ei, edge) in ElementStore::<Edge>::iter(kernel) {
        let erased: ErasedIndex = ei.into();
        if edge.vertex.is_valid() && kernel.get(edge.vertex).is_none() {
            return Err(MeshError::DanglingReference(erased, edge.vertex.into()));
        }
        if edge.face.is_valid() && kernel.get(edge.face).is_none() {
            return Err(MeshError::DanglingReference(erased, edge.face.into()));
        }
        for link in [edge.next, edge.prev] {
            if link.is_valid() && kernel.get(link).is_none() {
                return Err(MeshError::DanglingReference(erased, link.into()));
            }
        }
        if edge.adjacent.is_valid() {
            match kernel.get(edge.adjacent) {
                None => {
                    return Err(MeshError::DanglingReference(erased, edge.adjacent.into()));
                }
                Some(twin) if twin.adjacent != ei => {
                    return Err(MeshError::NonReciprocalAdjacency(
                        erased,
                        edge.adjacent.into(),
                    ));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Every face's `next` loop must return to its root edge within the live
/// edge count, and every edge on the loop must be owned by the face.
pub fn validate_faces<K: Kernel>(kernel: &K) -> Result<(), MeshError> {
    let max_steps = kernel.edge_count();
    for (fi, face) in ElementStore::<Face>::iter(kernel) {
        if !face.edge.is_valid() {
            // Disconnected face; nothing to walk.
            continue;
        }
        let mut cursor = face.edge;
        for _ in 0..max_steps {
            let Some(edge) = kernel.get(cursor) else {
                return Err(MeshError::DanglingReference(fi.into(), cursor.into()));
            };
            if edge.face != fi {
                return Err(MeshError::ForeignLoopEdge(
                    cursor.into(),
                    fi.into(),
                    edge.face.into(),
                ));
            }
            cursor = edge.next;
            if cursor == face.edge {
                break;
            }
        }
        if cursor != face.edge {
            return Err(MeshError::UnclosedFaceLoop(fi.into(), max_steps));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::handle::{EdgeIndex, FaceIndex, PointIndex, VertexIndex};
    use crate::topology::kernel::ArenaKernel;

    fn boundary_triangle(kernel: &mut ArenaKernel) -> (FaceIndex, [EdgeIndex; 3]) {
        let mut vertices = [VertexIndex::default(); 3];
        for slot in 0..3 {
            let (pi, _): (PointIndex, _) = kernel.create();
            let (vi, vertex): (VertexIndex, _) = kernel.create();
            vertex.point = pi;
            vertices[slot] = vi;
        }
        let mut edges = [EdgeIndex::default(); 3];
        for slot in 0..3 {
            let (ei, edge): (EdgeIndex, _) = kernel.create();
            edge.vertex = vertices[slot];
            edges[slot] = ei;
        }
        let (fi, face): (FaceIndex, _) = kernel.create();
        face.edge = edges[0];
        for slot in 0..3 {
            let edge = kernel.get_mut(edges[slot]).unwrap();
            edge.next = edges[(slot + 1) % 3];
            edge.prev = edges[(slot + 2) % 3];
            edge.face = fi;
        }
        (fi, edges)
    }

    #[test]
    fn well_formed_triangle_passes() {
        let mut kernel = ArenaKernel::new();
        boundary_triangle(&mut kernel);
        assert_eq!(validate_kernel(&kernel), Ok(()));
    }

    #[test]
    fn broken_loop_is_reported() {
        let mut kernel = ArenaKernel::new();
        let (fi, edges) = boundary_triangle(&mut kernel);
        // Divert the loop so it never returns to the root.
        kernel.get_mut(edges[2]).unwrap().next = edges[1];
        assert_eq!(
            validate_faces(&kernel),
            Err(MeshError::UnclosedFaceLoop(fi.into(), kernel.edge_count()))
        );
    }

    #[test]
    fn non_reciprocal_adjacency_is_reported() {
        let mut kernel = ArenaKernel::new();
        let (a, _): (EdgeIndex, _) = kernel.create();
        let (b, _): (EdgeIndex, _) = kernel.create();
        let (c, _): (EdgeIndex, _) = kernel.create();
        kernel.get_mut(a).unwrap().adjacent = b;
        kernel.get_mut(b).unwrap().adjacent = c;
        kernel.get_mut(c).unwrap().adjacent = b;
        assert_eq!(
            validate_edges(&kernel),
            Err(MeshError::NonReciprocalAdjacency(a.into(), b.into()))
        );
    }

    #[test]
    fn dangling_reference_is_reported() {
        let mut kernel = ArenaKernel::new();
        let (pi, _): (PointIndex, _) = kernel.create();
        let (vi, vertex): (VertexIndex, _) = kernel.create();
        vertex.point = pi;
        kernel.remove(pi);
        assert_eq!(
            validate_vertices(&kernel),
            Err(MeshError::DanglingReference(vi.into(), pi.into()))
        );
    }

    #[test]
    fn removal_mid_walk_leaves_a_detectable_dangle() {
        let mut kernel = ArenaKernel::new();
        let (fi, edges) = boundary_triangle(&mut kernel);
        kernel.remove(edges[1]);
        // The loop now names a stale edge; the face walk reports it.
        let result = validate_faces(&kernel);
        assert!(matches!(
            result,
            Err(MeshError::DanglingReference(from, _)) if from == fi.into()
        ));
    }
}
