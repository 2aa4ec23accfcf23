//! Data module: the dense element arena backing the default kernel.

pub mod arena;

pub use arena::ElementArena;
