//! Submodule defining the vertex capability.

use core::fmt::Debug;
use core::hash::Hash;

/// Blanket trait for values usable as vertices: integers, strings, and
/// anything else that is hashable and totally ordered.
pub trait Vertex: Clone + Eq + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Ord + Hash + Debug {}
