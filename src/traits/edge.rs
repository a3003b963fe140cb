//! Submodule defining the edge capability hierarchy: [`NetworkEdge`] is the
//! base capability every edge kind (static or temporal) provides; the
//! `Time` associated type degenerates to [`crate::traits::time::NoTime`]
//! for static edges so that [`crate::network::Network`] can share one
//! implementation across both.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::traits::{incident::Incident, time::Time, vertex::Vertex};

/// Capability shared by every edge kind: incidence, equality, and the
/// cause/effect total orders used to sort a network's adjacency indices.
///
/// For a static edge `Time = NoTime`, and both `cause_time`/`effect_time`
/// return the single `NoTime` value, so `cause_key`/`effect_key` degenerate
/// to the lexicographic order on canonicalized vertices, which is the
/// total order a static network sorts its adjacency indices by.
pub trait NetworkEdge<V: Vertex>: Incident<V> + Clone + Eq + Hash + Debug {
    /// The time coordinate of this edge kind ([`NoTime`](crate::traits::time::NoTime)
    /// for static edges).
    type Time: Time;

    /// The instant the edge begins affecting its head vertices. `NoTime`
    /// for static edges.
    fn cause_time(&self) -> Self::Time;

    /// The instant the edge finishes affecting its head vertices. Equal to
    /// `cause_time()` for every edge kind except directed-delayed temporal
    /// edges.
    fn effect_time(&self) -> Self::Time {
        self.cause_time()
    }

    /// The `(cause_time, tails, heads)` key defining the cause total order.
    fn cause_key(&self) -> (Self::Time, Vec<V>, Vec<V>) {
        (self.cause_time(), self.mutator_verts(), self.mutated_verts())
    }

    /// The `(effect_time, tails, heads)` key defining the effect total
    /// order.
    fn effect_key(&self) -> (Self::Time, Vec<V>, Vec<V>) {
        (self.effect_time(), self.mutator_verts(), self.mutated_verts())
    }
}

/// Capability for edges carrying an actual timestamp: temporal dyadic,
/// temporal hyper, and directed-delayed variants.
pub trait TemporalEdge<V: Vertex>: NetworkEdge<V> {
    /// The static edge kind this temporal edge projects down to once time
    /// is forgotten.
    type Static: NetworkEdge<V, Time = crate::traits::time::NoTime>;

    /// Strips the timestamp, returning the corresponding static edge.
    fn static_projection(&self) -> Self::Static;

    /// Returns whether `self` is δt-adjacent to `other`: `other` starts
    /// strictly after `self` ends, and some vertex `self` mutates is a
    /// vertex `other` mutates from (`head(self) ∩ tail(other) ≠ ∅`).
    ///
    /// This relation is irreflexive and acyclic for any finite edge set,
    /// since it strictly advances time.
    fn is_adjacent_to(&self, other: &Self) -> bool {
        other.cause_time() > self.effect_time()
            && self
                .mutated_verts()
                .iter()
                .any(|v| other.mutator_verts().contains(v))
    }
}

/// Capability for temporal edges with a nonzero delay between cause and
/// effect.
pub trait Delayed<V: Vertex>: TemporalEdge<V> {
    /// The delay `δ` such that `effect_time() == cause_time() + δ`.
    fn delay(&self) -> Self::Time;
}

/// Capability for constructing the virtual self-loop `(v, v, t, t)` that
/// [`crate::clusters::in_cluster_from`]/[`crate::clusters::out_cluster_from`]
/// seed a vertex-time search with, rather than an actual event.
pub trait SelfLoop<V: Vertex>: TemporalEdge<V> {
    /// Builds the self-loop event at vertex `v`, cause and effect time `t`.
    fn self_loop(v: V, t: Self::Time) -> Self;
}

/// Capability for rebuilding a temporal edge from a new set of mutator
/// (tail) vertices, mutated (head) vertices, and cause time, with
/// `t_e == t_c`. Implemented for the non-delayed temporal edge kinds only:
/// the microcanonical reference-model shuffles in
/// [`crate::reference_models`] that need this rebuild vertex sets and
/// timestamps, never a delay.
pub trait Relink<V: Vertex>: TemporalEdge<V> {
    /// Builds a new edge of this kind with mutator vertices `tails`,
    /// mutated vertices `heads`, at cause time `time`.
    fn relink(tails: Vec<V>, heads: Vec<V>, time: Self::Time) -> Self;
}
