//! Live proxy cursors ("function sets") for walking mesh topology.
//!
//! A proxy pairs a kernel reference with one strong index and re-resolves
//! the index on every call; proxies are live queries, never cached views.
//! Navigation degrades gracefully: if the current element fails to resolve,
//! the target category's null proxy comes back instead of an error, so a
//! chain like `edge.next().adjacent().face()` is always safe to write.

use core::fmt;

use crate::topology::element::{Edge, Face, MeshElement, Point, Vertex};
use crate::topology::handle::Handle;
use crate::topology::kernel::store::{ElementStore, Kernel};

/// Cursor over one element of category `E`, bound to a kernel.
///
/// The kernel reference is optional so a fully detached null proxy exists
/// ([`Default`]); it is boolean-false and navigates to further null
/// proxies without touching any storage.
pub struct ElementFn<'k, K, E: MeshElement> {
    kernel: Option<&'k K>,
    index: Handle<E>,
}

/// Edge cursor.
pub type EdgeFn<'k, K> = ElementFn<'k, K, Edge>;
/// Vertex cursor.
pub type VertexFn<'k, K> = ElementFn<'k, K, Vertex>;
/// Face cursor.
pub type FaceFn<'k, K> = ElementFn<'k, K, Face>;

impl<'k, K, E> ElementFn<'k, K, E>
where
    K: ElementStore<E>,
    E: MeshElement,
{
    /// Cursor over `index`, bound to `kernel`.
    pub fn new(kernel: &'k K, index: Handle<E>) -> Self {
        Self {
            kernel: Some(kernel),
            index,
        }
    }

    /// The bound index.
    #[inline]
    pub fn index(&self) -> Handle<E> {
        self.index
    }

    /// Resolve the current element. `None` when the proxy is detached, the
    /// index is null, or the slot no longer matches the index's generation.
    pub fn element(&self) -> Option<&'k E> {
        self.kernel.and_then(|kernel| kernel.get(self.index))
    }

    /// True iff the index currently resolves. Re-verified on every call.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.element().is_some()
    }

    /// Successor proxy of another category on the same kernel (or none).
    fn rebind<T: MeshElement>(&self, index: Handle<T>) -> ElementFn<'k, K, T> {
        ElementFn {
            kernel: self.kernel,
            index,
        }
    }
}

impl<'k, K: Kernel> ElementFn<'k, K, Edge> {
    /// Next half-edge around the owning face.
    pub fn next(&self) -> EdgeFn<'k, K> {
        self.rebind(self.element().map(|edge| edge.next).unwrap_or_default())
    }

    /// Previous half-edge around the owning face.
    pub fn prev(&self) -> EdgeFn<'k, K> {
        self.rebind(self.element().map(|edge| edge.prev).unwrap_or_default())
    }

    /// Opposing half-edge across the undirected edge.
    pub fn adjacent(&self) -> EdgeFn<'k, K> {
        self.rebind(self.element().map(|edge| edge.adjacent).unwrap_or_default())
    }

    /// Destination vertex.
    pub fn vertex(&self) -> VertexFn<'k, K> {
        self.rebind(self.element().map(|edge| edge.vertex).unwrap_or_default())
    }

    /// Owning face.
    pub fn face(&self) -> FaceFn<'k, K> {
        self.rebind(self.element().map(|edge| edge.face).unwrap_or_default())
    }

    /// True iff no reciprocal half-edge exists. A stale or missing edge is
    /// conservatively reported as boundary.
    pub fn is_boundary(&self) -> bool {
        self.element().map_or(true, Edge::is_boundary)
    }
}

impl<'k, K: Kernel> ElementFn<'k, K, Vertex> {
    /// Incident half-edge.
    pub fn edge(&self) -> EdgeFn<'k, K> {
        self.rebind(self.element().map(|vertex| vertex.edge).unwrap_or_default())
    }

    /// Geometric point this vertex sits on.
    pub fn point(&self) -> Option<&'k Point> {
        let index = self.element().map(|vertex| vertex.point)?;
        self.kernel.and_then(|kernel| kernel.get(index))
    }
}

impl<'k, K: Kernel> ElementFn<'k, K, Face> {
    /// Root half-edge of the boundary loop.
    pub fn edge(&self) -> EdgeFn<'k, K> {
        self.rebind(self.element().map(|face| face.edge).unwrap_or_default())
    }
}

impl<'k, K, E: MeshElement> Default for ElementFn<'k, K, E> {
    /// The fully detached null proxy: no kernel, null index.
    fn default() -> Self {
        Self {
            kernel: None,
            index: Handle::default(),
        }
    }
}

impl<'k, K, E: MeshElement> Copy for ElementFn<'k, K, E> {}

impl<'k, K, E: MeshElement> Clone for ElementFn<'k, K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'k, K, E: MeshElement> fmt::Debug for ElementFn<'k, K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFn")
            .field("index", &self.index)
            .field("bound", &self.kernel.is_some())
            .finish()
    }
}
