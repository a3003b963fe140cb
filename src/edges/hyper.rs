//! Submodule defining the five hyperedge kinds: arbitrary-cardinality
//! tail/head (or incident, for undirected) vertex sets.

use alloc::vec::Vec;

use crate::traits::{
    edge::{Delayed, NetworkEdge, Relink, SelfLoop, TemporalEdge},
    incident::Incident,
    marker::{Directed, Hyper, Undirected},
    time::{NoTime, Time},
    vertex::Vertex,
};

fn canonicalize<V: Vertex>(mut verts: Vec<V>) -> Vec<V> {
    verts.sort();
    verts.dedup();
    verts
}

/// A directed static hyperedge: a tail set mutating a head set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedHyperedge<V> {
    tails: Vec<V>,
    heads: Vec<V>,
}

impl<V: Vertex> DirectedHyperedge<V> {
    /// Builds a new directed hyperedge, canonicalizing (sorting,
    /// deduplicating) both member lists.
    pub fn new(tails: Vec<V>, heads: Vec<V>) -> Self {
        Self { tails: canonicalize(tails), heads: canonicalize(heads) }
    }
}

impl<V: Vertex> Incident<V> for DirectedHyperedge<V> {
    fn mutator_verts(&self) -> Vec<V> {
        self.tails.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.heads.clone()
    }
}

impl<V: Vertex> NetworkEdge<V> for DirectedHyperedge<V> {
    type Time = NoTime;

    fn cause_time(&self) -> NoTime {
        NoTime
    }
}

impl<V> Directed for DirectedHyperedge<V> {}
impl<V> Hyper for DirectedHyperedge<V> {}

/// An undirected static hyperedge: an incident vertex set, canonicalized
/// (sorted, deduplicated) at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedHyperedge<V> {
    members: Vec<V>,
}

impl<V: Vertex> UndirectedHyperedge<V> {
    /// Builds a new undirected hyperedge from `members`, canonicalizing
    /// member order.
    pub fn new(members: Vec<V>) -> Self {
        Self { members: canonicalize(members) }
    }
}

impl<V: Vertex> Incident<V> for UndirectedHyperedge<V> {
    fn mutator_verts(&self) -> Vec<V> {
        self.members.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.members.clone()
    }

    fn is_incident(&self, vert: &V) -> bool {
        self.members.contains(vert)
    }
}

impl<V: Vertex> NetworkEdge<V> for UndirectedHyperedge<V> {
    type Time = NoTime;

    fn cause_time(&self) -> NoTime {
        NoTime
    }
}

impl<V> Undirected for UndirectedHyperedge<V> {}
impl<V> Hyper for UndirectedHyperedge<V> {}

/// A directed temporal hyperedge at cause time `t`, with `t_e == t_c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedTemporalHyperedge<V, T> {
    tails: Vec<V>,
    heads: Vec<V>,
    time: T,
}

impl<V: Vertex, T: Time> DirectedTemporalHyperedge<V, T> {
    /// Builds a new directed temporal hyperedge at cause time `time`.
    pub fn new(tails: Vec<V>, heads: Vec<V>, time: T) -> Self {
        Self { tails: canonicalize(tails), heads: canonicalize(heads), time }
    }
}

impl<V: Vertex, T: Time> Incident<V> for DirectedTemporalHyperedge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        self.tails.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.heads.clone()
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for DirectedTemporalHyperedge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for DirectedTemporalHyperedge<V, T> {
    type Static = DirectedHyperedge<V>;

    fn static_projection(&self) -> DirectedHyperedge<V> {
        DirectedHyperedge::new(self.tails.clone(), self.heads.clone())
    }
}

impl<V, T> Directed for DirectedTemporalHyperedge<V, T> {}
impl<V, T> Hyper for DirectedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for DirectedTemporalHyperedge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(alloc::vec![v.clone()], alloc::vec![v], t)
    }
}

impl<V: Vertex, T: Time> Relink<V> for DirectedTemporalHyperedge<V, T> {
    fn relink(tails: Vec<V>, heads: Vec<V>, time: T) -> Self {
        Self::new(tails, heads, time)
    }
}

/// An undirected temporal hyperedge at cause time `t`, with `t_e == t_c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedTemporalHyperedge<V, T> {
    members: Vec<V>,
    time: T,
}

impl<V: Vertex, T: Time> UndirectedTemporalHyperedge<V, T> {
    /// Builds a new undirected temporal hyperedge from `members` at cause
    /// time `time`.
    pub fn new(members: Vec<V>, time: T) -> Self {
        Self { members: canonicalize(members), time }
    }
}

impl<V: Vertex, T: Time> Incident<V> for UndirectedTemporalHyperedge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        self.members.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.members.clone()
    }

    fn is_incident(&self, vert: &V) -> bool {
        self.members.contains(vert)
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for UndirectedTemporalHyperedge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for UndirectedTemporalHyperedge<V, T> {
    type Static = UndirectedHyperedge<V>;

    fn static_projection(&self) -> UndirectedHyperedge<V> {
        UndirectedHyperedge::new(self.members.clone())
    }
}

impl<V, T> Undirected for UndirectedTemporalHyperedge<V, T> {}
impl<V, T> Hyper for UndirectedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for UndirectedTemporalHyperedge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(alloc::vec![v], t)
    }
}

impl<V: Vertex, T: Time> Relink<V> for UndirectedTemporalHyperedge<V, T> {
    fn relink(tails: Vec<V>, _heads: Vec<V>, time: T) -> Self {
        Self::new(tails, time)
    }
}

/// A directed delayed temporal hyperedge: `t_e = t_c + delay`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedDelayedTemporalHyperedge<V, T> {
    tails: Vec<V>,
    heads: Vec<V>,
    time: T,
    delay: T,
}

impl<V: Vertex, T: Time> DirectedDelayedTemporalHyperedge<V, T> {
    /// Builds a new directed delayed temporal hyperedge caused at `time`,
    /// taking effect `time + delay`.
    pub fn new(tails: Vec<V>, heads: Vec<V>, time: T, delay: T) -> Self {
        Self { tails: canonicalize(tails), heads: canonicalize(heads), time, delay }
    }
}

impl<V: Vertex, T: Time> Incident<V> for DirectedDelayedTemporalHyperedge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        self.tails.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.heads.clone()
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for DirectedDelayedTemporalHyperedge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time + self.delay
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for DirectedDelayedTemporalHyperedge<V, T> {
    type Static = DirectedHyperedge<V>;

    fn static_projection(&self) -> DirectedHyperedge<V> {
        DirectedHyperedge::new(self.tails.clone(), self.heads.clone())
    }
}

impl<V: Vertex, T: Time> Delayed<V> for DirectedDelayedTemporalHyperedge<V, T> {
    fn delay(&self) -> T {
        self.delay
    }
}

impl<V, T> Directed for DirectedDelayedTemporalHyperedge<V, T> {}
impl<V, T> Hyper for DirectedDelayedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for DirectedDelayedTemporalHyperedge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(alloc::vec![v.clone()], alloc::vec![v], t, T::zero())
    }
}
