//! The default kernel: one [`ElementArena`] per element category.

use crate::data::arena::ElementArena;
use crate::topology::element::{Edge, Face, Point, Vertex};
use crate::topology::handle::Handle;
use crate::topology::kernel::store::{ElementStore, Kernel};

/// Arena-backed storage kernel.
#[derive(Clone, Debug, Default)]
pub struct ArenaKernel {
    vertices: ElementArena<Vertex>,
    edges: ElementArena<Edge>,
    faces: ElementArena<Face>,
    points: ElementArena<Point>,
}

impl ArenaKernel {
    /// Kernel with all four stores holding only their sentinels.
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! impl_element_store {
    ($element:ty, $arena:ident) => {
        impl ElementStore<$element> for ArenaKernel {
            fn get(&self, handle: Handle<$element>) -> Option<&$element> {
                self.$arena.get(handle)
            }
            fn get_mut(&mut self, handle: Handle<$element>) -> Option<&mut $element> {
                self.$arena.get_mut(handle)
            }
            fn create(&mut self) -> (Handle<$element>, &mut $element) {
                self.$arena.create()
            }
            fn remove(&mut self, handle: Handle<$element>) {
                self.$arena.remove(handle)
            }
            fn count(&self) -> usize {
                self.$arena.count()
            }
            fn resolve(&self, handle: &mut Handle<$element>) -> Option<&$element> {
                self.$arena.resolve(handle)
            }
            fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (Handle<$element>, &'a $element)> + 'a> {
                Box::new(self.$arena.iter())
            }
            fn reserve(&mut self, additional: usize) {
                self.$arena.reserve(additional)
            }
            fn clear(&mut self) {
                self.$arena.clear()
            }
        }
    };
}

impl_element_store!(Vertex, vertices);
impl_element_store!(Edge, edges);
impl_element_store!(Face, faces);
impl_element_store!(Point, points);

impl Kernel for ArenaKernel {}
