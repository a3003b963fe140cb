//! Submodule defining zero-method marker traits distinguishes the edge
//! axes (directed/undirected, dyadic/hyper) at the type level, so
//! algorithms that only make sense for one axis value (e.g. topological
//! order for directed edges) can bound on the marker instead of inspecting
//! data at runtime.

/// Marker for edge kinds with distinct tail and head sets.
pub trait Directed {}

/// Marker for edge kinds whose tail and head sets coincide.
pub trait Undirected {}

/// Marker for edge kinds with singleton tail/head sets.
pub trait Dyadic {}

/// Marker for edge kinds with arbitrary-cardinality tail/head sets.
pub trait Hyper {}
