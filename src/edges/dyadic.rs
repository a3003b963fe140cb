//! Submodule defining the five dyadic edge kinds.

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::{
    edge::{Delayed, NetworkEdge, Relink, SelfLoop, TemporalEdge},
    incident::Incident,
    marker::{Directed, Dyadic, Undirected},
    time::{NoTime, Time},
    vertex::Vertex,
};

/// A directed static edge `tail -> head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedEdge<V> {
    tail: V,
    head: V,
}

impl<V: Vertex> DirectedEdge<V> {
    /// Builds a new directed edge `tail -> head`.
    pub fn new(tail: V, head: V) -> Self {
        Self { tail, head }
    }
}

impl<V: Vertex> Incident<V> for DirectedEdge<V> {
    fn mutator_verts(&self) -> Vec<V> {
        vec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.head.clone()]
    }
}

impl<V: Vertex> NetworkEdge<V> for DirectedEdge<V> {
    type Time = NoTime;

    fn cause_time(&self) -> NoTime {
        NoTime
    }
}

impl<V> Directed for DirectedEdge<V> {}
impl<V> Dyadic for DirectedEdge<V> {}

/// An undirected static edge `{v1, v2}`, stored with `v1 <= v2` so
/// equality and hashing don't need to consider endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedEdge<V> {
    v1: V,
    v2: V,
}

impl<V: Vertex> UndirectedEdge<V> {
    /// Builds a new undirected edge `{a, b}`, canonicalizing endpoint
    /// order.
    pub fn new(a: V, b: V) -> Self {
        if a <= b {
            Self { v1: a, v2: b }
        } else {
            Self { v1: b, v2: a }
        }
    }
}

impl<V: Vertex> Incident<V> for UndirectedEdge<V> {
    fn mutator_verts(&self) -> Vec<V> {
        vec![self.v1.clone(), self.v2.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.v1.clone(), self.v2.clone()]
    }

    fn is_incident(&self, vert: &V) -> bool {
        self.v1 == *vert || self.v2 == *vert
    }
}

impl<V: Vertex> NetworkEdge<V> for UndirectedEdge<V> {
    type Time = NoTime;

    fn cause_time(&self) -> NoTime {
        NoTime
    }
}

impl<V> Undirected for UndirectedEdge<V> {}
impl<V> Dyadic for UndirectedEdge<V> {}

/// A directed temporal edge `tail -> head` at cause time `t`, with
/// `t_e == t_c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedTemporalEdge<V, T> {
    tail: V,
    head: V,
    time: T,
}

impl<V: Vertex, T: Time> DirectedTemporalEdge<V, T> {
    /// Builds a new directed temporal edge `tail -> head` at cause time
    /// `time`.
    pub fn new(tail: V, head: V, time: T) -> Self {
        Self { tail, head, time }
    }
}

impl<V: Vertex, T: Time> Incident<V> for DirectedTemporalEdge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        vec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.head.clone()]
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for DirectedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for DirectedTemporalEdge<V, T> {
    type Static = DirectedEdge<V>;

    fn static_projection(&self) -> DirectedEdge<V> {
        DirectedEdge::new(self.tail.clone(), self.head.clone())
    }
}

impl<V, T> Directed for DirectedTemporalEdge<V, T> {}
impl<V, T> Dyadic for DirectedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for DirectedTemporalEdge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(v.clone(), v, t)
    }
}

impl<V: Vertex, T: Time> Relink<V> for DirectedTemporalEdge<V, T> {
    fn relink(mut tails: Vec<V>, mut heads: Vec<V>, time: T) -> Self {
        Self::new(tails.remove(0), heads.remove(0), time)
    }
}

/// An undirected temporal edge `{v1, v2}` at cause time `t`, with
/// `t_e == t_c`. Endpoint order is canonicalized as in [`UndirectedEdge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedTemporalEdge<V, T> {
    v1: V,
    v2: V,
    time: T,
}

impl<V: Vertex, T: Time> UndirectedTemporalEdge<V, T> {
    /// Builds a new undirected temporal edge `{a, b}` at cause time `time`,
    /// canonicalizing endpoint order.
    pub fn new(a: V, b: V, time: T) -> Self {
        if a <= b {
            Self { v1: a, v2: b, time }
        } else {
            Self { v1: b, v2: a, time }
        }
    }
}

impl<V: Vertex, T: Time> Incident<V> for UndirectedTemporalEdge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        vec![self.v1.clone(), self.v2.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.v1.clone(), self.v2.clone()]
    }

    fn is_incident(&self, vert: &V) -> bool {
        self.v1 == *vert || self.v2 == *vert
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for UndirectedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for UndirectedTemporalEdge<V, T> {
    type Static = UndirectedEdge<V>;

    fn static_projection(&self) -> UndirectedEdge<V> {
        UndirectedEdge::new(self.v1.clone(), self.v2.clone())
    }
}

impl<V, T> Undirected for UndirectedTemporalEdge<V, T> {}
impl<V, T> Dyadic for UndirectedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for UndirectedTemporalEdge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(v.clone(), v, t)
    }
}

impl<V: Vertex, T: Time> Relink<V> for UndirectedTemporalEdge<V, T> {
    fn relink(mut tails: Vec<V>, _heads: Vec<V>, time: T) -> Self {
        let b = tails.remove(tails.len() - 1);
        let a = tails.remove(0);
        Self::new(a, b, time)
    }
}

/// A directed temporal edge `tail -> head` caused at `t_c` and taking
/// effect `delay` later, so `t_e = t_c + delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedDelayedTemporalEdge<V, T> {
    tail: V,
    head: V,
    time: T,
    delay: T,
}

impl<V: Vertex, T: Time> DirectedDelayedTemporalEdge<V, T> {
    /// Builds a new directed delayed temporal edge `tail -> head` caused at
    /// `time`, taking effect `time + delay`.
    pub fn new(tail: V, head: V, time: T, delay: T) -> Self {
        Self { tail, head, time, delay }
    }
}

impl<V: Vertex, T: Time> Incident<V> for DirectedDelayedTemporalEdge<V, T> {
    fn mutator_verts(&self) -> Vec<V> {
        vec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.head.clone()]
    }
}

impl<V: Vertex, T: Time> NetworkEdge<V> for DirectedDelayedTemporalEdge<V, T> {
    type Time = T;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time + self.delay
    }
}

impl<V: Vertex, T: Time> TemporalEdge<V> for DirectedDelayedTemporalEdge<V, T> {
    type Static = DirectedEdge<V>;

    fn static_projection(&self) -> DirectedEdge<V> {
        DirectedEdge::new(self.tail.clone(), self.head.clone())
    }
}

impl<V: Vertex, T: Time> Delayed<V> for DirectedDelayedTemporalEdge<V, T> {
    fn delay(&self) -> T {
        self.delay
    }
}

impl<V, T> Directed for DirectedDelayedTemporalEdge<V, T> {}
impl<V, T> Dyadic for DirectedDelayedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> SelfLoop<V> for DirectedDelayedTemporalEdge<V, T> {
    fn self_loop(v: V, t: T) -> Self {
        Self::new(v.clone(), v, t, T::zero())
    }
}
