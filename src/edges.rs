//! Submodule defining the concrete edge kinds: three independent axes,
//! `{directed, undirected} x {dyadic, hyper} x {static, temporal}`, plus
//! the directed-delayed-temporal variant of each directed kind. Undirected
//! edges admit no delayed variant.
//!
//! Every struct canonicalizes its vertex order (or member order, for
//! hyperedges) at construction, never lazily, so that equality, hashing,
//! and the cause/effect orders agree without re-deriving a canonical form
//! on every comparison.

pub mod dyadic;
pub mod hyper;

pub use dyadic::{
    DirectedDelayedTemporalEdge, DirectedEdge, DirectedTemporalEdge, UndirectedEdge,
    UndirectedTemporalEdge,
};
pub use hyper::{
    DirectedDelayedTemporalHyperedge, DirectedHyperedge, DirectedTemporalHyperedge,
    UndirectedHyperedge, UndirectedTemporalHyperedge,
};
