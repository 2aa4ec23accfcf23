//! `ElementArena`: dense, generation-validated storage for one element
//! category.
//!
//! The arena is a plain `Vec` kept dense by swap-removal. Slot 0 always
//! holds a default-constructed sentinel, inserted at construction and never
//! removed, so a null handle (offset 0) can never resolve. Alongside the
//! elements the arena keeps a per-slot generation table whose length never
//! shrinks: the table remembers the generation of slots whose occupants
//! were truncated away, which is what keeps a stale handle from validating
//! against a later occupant of the same offset.
//!
//! All access is by handle. References returned by `create`/`get` are
//! borrow-scoped and cannot survive the next mutating call; there is no
//! pointer-into-vector access path.

use log::trace;

use crate::topology::element::MeshElement;
use crate::topology::handle::{Generation, Handle, Offset};

/// Dense storage for elements of category `E`.
#[derive(Clone, Debug)]
pub struct ElementArena<E: MeshElement> {
    elements: Vec<E>,
    /// High-water generation per slot; index 0 belongs to the sentinel.
    slot_generations: Vec<Generation>,
}

impl<E: MeshElement> Default for ElementArena<E> {
    fn default() -> Self {
        Self {
            elements: vec![E::default()],
            slot_generations: vec![0],
        }
    }
}

impl<E: MeshElement> ElementArena<E> {
    /// Arena holding only its sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements, sentinel included.
    #[inline]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Reserve capacity for `additional` further elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Append a default element and hand back its handle together with a
    /// mutable reference for in-place population.
    ///
    /// The element is stamped with its slot's current generation: 0 for a
    /// slot that has never held an element, one past the previous occupant's
    /// generation for a slot re-occupied after truncation.
    pub fn create(&mut self) -> (Handle<E>, &mut E) {
        let offset = self.elements.len();
        let generation = match self.slot_generations.get(offset) {
            Some(&previous) => previous.wrapping_add(1),
            None => 0,
        };
        if offset < self.slot_generations.len() {
            self.slot_generations[offset] = generation;
        } else {
            self.slot_generations.push(generation);
        }

        let mut element = E::default();
        element.set_generation(generation);
        self.elements.push(element);

        let handle = Handle::with_generation(offset as Offset, generation);
        (handle, &mut self.elements[offset])
    }

    /// Resolve a handle, validating its generation against the slot.
    ///
    /// Returns `None` for the null handle, an out-of-range offset, or a
    /// generation mismatch. Never panics.
    pub fn get(&self, handle: Handle<E>) -> Option<&E> {
        if !handle.is_valid() {
            return None;
        }
        self.elements
            .get(handle.offset() as usize)
            .filter(|element| element.generation() == handle.generation())
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, handle: Handle<E>) -> Option<&mut E> {
        if !handle.is_valid() {
            return None;
        }
        self.elements
            .get_mut(handle.offset() as usize)
            .filter(|element| element.generation() == handle.generation())
    }

    /// Offset-only lookup, skipping the generation check. The kernel is the
    /// only permitted caller; everything else resolves through handles.
    pub(crate) fn get_by_offset(&self, offset: Offset) -> Option<&E> {
        if offset == 0 {
            return None;
        }
        self.elements.get(offset as usize)
    }

    /// Look the handle's slot up by offset alone and, if occupied, rewrite
    /// the handle's generation in place to match the current occupant.
    ///
    /// This is a deliberately permissive healing affordance, not a
    /// correctness guarantee: the occupant may be a different logical
    /// element than the one the handle was minted for.
    pub fn resolve(&self, handle: &mut Handle<E>) -> Option<&E> {
        let element = self.get_by_offset(handle.offset())?;
        handle.set_generation(element.generation());
        Some(element)
    }

    /// Remove the element a handle names. A stale, null, or out-of-range
    /// handle is a no-op, not an error.
    ///
    /// Removal keeps the arena dense: the tail element is relocated into
    /// the freed slot and its generation is bumped, so previously issued
    /// handles for the relocated element go stale: they named a logical
    /// address that no longer holds it. Callers removing elements mid-walk
    /// must re-fetch their handles afterwards.
    pub fn remove(&mut self, handle: Handle<E>) {
        if self.get(handle).is_none() {
            return;
        }
        let offset = handle.offset() as usize;
        let last = self.elements.len() - 1;
        if offset == last {
            self.elements.pop();
        } else {
            self.elements.swap_remove(offset);
            let generation = self.slot_generations[offset].wrapping_add(1);
            self.slot_generations[offset] = generation;
            self.elements[offset].set_generation(generation);
            trace!(
                "{:?} arena: relocated slot {} -> slot {} at generation {}",
                E::KIND,
                last,
                offset,
                generation
            );
        }
    }

    /// Drop every non-sentinel element. Handles issued before the clear
    /// stay stale afterwards: the generation table survives, so re-occupied
    /// slots are stamped past their previous occupants.
    pub fn clear(&mut self) {
        self.elements.truncate(1);
    }

    /// Enumerate live elements and their handles, skipping the sentinel.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<E>, &E)> {
        self.elements.iter().enumerate().skip(1).map(|(offset, element)| {
            (
                Handle::with_generation(offset as Offset, element.generation()),
                element,
            )
        })
    }
}
