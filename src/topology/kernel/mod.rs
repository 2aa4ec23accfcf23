//! The storage kernel: capability traits plus the default arena backend.
//!
//! A kernel aggregates one element store per category behind the
//! [`ElementStore`]/[`Kernel`] trait pair. Mesh and the proxies depend only
//! on the traits, so any backend honoring the sentinel-at-slot-0 and
//! generation conventions is drop-in substitutable for [`ArenaKernel`].

pub mod arena_kernel;
pub mod store;

pub use arena_kernel::ArenaKernel;
pub use store::{ElementStore, Kernel};
