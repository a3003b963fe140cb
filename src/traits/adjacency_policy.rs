//! Submodule defining the temporal adjacency policy capability: a function
//! from `(edge, vertex)` to a nonnegative linger time bounding how long
//! after an event ends a causally-following event can still be considered
//! reachable from it.

use core::cmp::Ordering;
use core::ops::Add;

use crate::traits::{edge::TemporalEdge, time::Time, vertex::Vertex};

/// A linger time: either a finite duration or "no cutoff" (the `simple`
/// policy). Kept as an enum rather than relying on a sentinel `T::MAX` so
/// that `simple`'s "+∞" doesn't require `T: Bounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LingerTime<T> {
    /// A concrete, finite linger duration.
    Finite(T),
    /// No cutoff: any later event at a shared vertex counts as reachable.
    Infinite,
}

impl<T: Time> LingerTime<T> {
    /// Returns whether `elapsed` (an already-nonnegative duration) falls
    /// within this linger window.
    #[must_use]
    pub fn covers(&self, elapsed: T) -> bool {
        match self {
            LingerTime::Infinite => true,
            LingerTime::Finite(limit) => elapsed <= *limit,
        }
    }
}

impl<T: Time + Add<Output = T>> Add<T> for LingerTime<T> {
    type Output = LingerTime<T>;

    fn add(self, rhs: T) -> LingerTime<T> {
        match self {
            LingerTime::Infinite => LingerTime::Infinite,
            LingerTime::Finite(t) => LingerTime::Finite(t + rhs),
        }
    }
}

impl<T: Time> PartialOrd for LingerTime<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Time> Ord for LingerTime<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (LingerTime::Infinite, LingerTime::Infinite) => Ordering::Equal,
            (LingerTime::Infinite, LingerTime::Finite(_)) => Ordering::Greater,
            (LingerTime::Finite(_), LingerTime::Infinite) => Ordering::Less,
            (LingerTime::Finite(a), LingerTime::Finite(b)) => a.cmp(b),
        }
    }
}

/// A temporal adjacency policy: assigns a linger time `L(a, v)` to every
/// `(event, vertex)` pair. Event `a` reaches event `b` at shared vertex `v`
/// iff `t_e(a) <= t_c(b) <= t_e(a) + L(a, v)` (and the usual vertex-matching
/// rule from [`TemporalEdge::is_adjacent_to`]).
///
/// Stochastic policies (`exponential`, `geometric`) must be deterministic
/// functions of `(edge identity, seed, vertex)`: two calls with the same
/// inputs return the same linger.
pub trait TemporalAdjacency<V: Vertex, E: TemporalEdge<V>> {
    /// Returns the linger time for event `edge` at vertex `vertex`.
    fn linger(&self, edge: &E, vertex: &V) -> LingerTime<E::Time>;

    /// Returns the supremum of `linger` over all inputs, used to bound
    /// search windows in the implicit event graph.
    fn maximum_linger(&self) -> LingerTime<E::Time>;
}
