//! Submodule implementing the implicit event graph: the DAG whose nodes
//! are a temporal network's edges and whose arcs are the δt-adjacency
//! relation under a chosen [`TemporalAdjacency`] policy.
//!
//! The event graph is never materialized eagerly: for `n` events that
//! would cost up to `O(n^2)` memory. [`ImplicitEventGraph::successors`] and
//! [`ImplicitEventGraph::predecessors`] instead binary-search the
//! per-vertex cause/effect orders already maintained by [`Network`] and
//! walk only as far as the policy's linger window allows.
//!
//! This module is grounded on `original_source/include/implicit_event_graph.hpp`, whose
//! `successors_vert`/`predecessors_vert` pair this mirrors, adapted to the
//! capability-trait edge model instead of a single templated edge type.
//! The dedicated deterministic shortcut that file reserves for undirected
//! temporal edges under the deterministic (limited-waiting-time) policy
//! (arXiv:1908.11831 appendix B) isn't given a separate code path here: the
//! generic walk below already terminates in `O(window size)` once bounded
//! by a finite `maximum_linger`, which is the shortcut's actual payoff, so
//! a second implementation of the same bound would be redundant.

use alloc::vec::Vec;

use crate::network::Network;
use crate::traits::{
    adjacency_policy::{LingerTime, TemporalAdjacency},
    edge::{NetworkEdge, TemporalEdge},
    incident::Incident,
    vertex::Vertex,
};

fn dedup_unordered<E: Eq>(items: Vec<E>) -> Vec<E> {
    let mut result: Vec<E> = Vec::with_capacity(items.len());
    for item in items {
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}

/// The implicit event graph of a temporal network `net` under adjacency
/// policy `policy`.
#[derive(Debug, Clone, Copy)]
pub struct ImplicitEventGraph<'n, V, E, P>
where
    V: Vertex,
    E: TemporalEdge<V>,
    P: TemporalAdjacency<V, E>,
{
    net: &'n Network<V, E>,
    policy: P,
}

impl<'n, V, E, P> ImplicitEventGraph<'n, V, E, P>
where
    V: Vertex,
    E: TemporalEdge<V>,
    P: TemporalAdjacency<V, E>,
{
    /// Builds the implicit event graph of `net` under `policy`.
    #[must_use]
    pub fn new(net: &'n Network<V, E>, policy: P) -> Self {
        Self { net, policy }
    }

    /// Returns the number of events (edges) in the underlying network.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.net.edge_count()
    }

    /// Returns the adjacency policy this event graph was built with, for
    /// callers (cluster construction) that need to re-derive a per-`(event,
    /// vertex)` linger alongside a traversal already in progress.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns `(min cause time, max effect time)` across all events, or
    /// `None` if the network has no edges.
    #[must_use]
    pub fn time_window(&self) -> Option<(E::Time, E::Time)> {
        let mut edges = self.net.edges();
        let first = edges.next()?;
        let mut min = first.cause_time();
        let mut max = first.effect_time();
        for edge in edges {
            if edge.cause_time() < min {
                min = edge.cause_time();
            }
            if edge.effect_time() > max {
                max = edge.effect_time();
            }
        }
        Some((min, max))
    }

    /// Returns the successors of `e` in the event graph: events `b` such
    /// that `e` is δt-adjacent to `b` under `policy`. If `just_first`,
    /// returns at most one successor per shared vertex instead of every
    /// qualifying event in the linger window.
    #[must_use]
    pub fn successors(&self, e: &E, just_first: bool) -> Vec<E> {
        let mut out = Vec::new();
        for v in e.mutated_verts() {
            self.successors_at_vertex(e, &v, just_first, &mut out);
        }
        dedup_unordered(out)
    }

    /// Returns the predecessors of `e` in the event graph: events `a` such
    /// that `a` is δt-adjacent to `e` under `policy`.
    #[must_use]
    pub fn predecessors(&self, e: &E, just_first: bool) -> Vec<E> {
        let mut out = Vec::new();
        for v in e.mutator_verts() {
            self.predecessors_at_vertex(e, &v, just_first, &mut out);
        }
        dedup_unordered(out)
    }

    fn successors_at_vertex(&self, e: &E, v: &V, just_first: bool, out: &mut Vec<E>) {
        let linger = self.policy.linger(e, v);
        let effect = e.effect_time();
        let candidates: Vec<&E> = self.net.out_edges_cause(v).collect();
        let start = candidates.partition_point(|c| c.cause_time() <= effect);

        for candidate in &candidates[start..] {
            let elapsed = candidate.cause_time() - effect;
            if !linger.covers(elapsed) {
                break;
            }
            out.push((*candidate).clone());
            if just_first {
                break;
            }
        }
    }

    fn predecessors_at_vertex(&self, e: &E, v: &V, just_first: bool, out: &mut Vec<E>) {
        let cause = e.cause_time();
        let candidates: Vec<&E> = self.net.in_edges_effect(v).collect();
        let end = candidates.partition_point(|c| c.effect_time() < cause);
        let max_linger = self.policy.maximum_linger();

        for candidate in candidates[..end].iter().rev() {
            let elapsed = cause - candidate.effect_time();
            if let LingerTime::Finite(bound) = max_linger {
                if elapsed > bound {
                    break;
                }
            }
            if self.policy.linger(candidate, v).covers(elapsed) {
                out.push((*candidate).clone());
                if just_first {
                    break;
                }
            }
        }
    }

    /// Materializes the event graph as an explicit adjacency map from
    /// event index (position in [`Network::edges`]) to successor event
    /// indices. Expensive: use only when the whole event graph genuinely
    /// needs to be inspected at once, e.g. for export.
    #[must_use]
    pub fn materialize(&self) -> alloc::collections::BTreeMap<usize, Vec<usize>> {
        let events: Vec<E> = self.net.edges().cloned().collect();

        let mut adjacency = alloc::collections::BTreeMap::new();
        for (i, e) in events.iter().enumerate() {
            let successor_indices: Vec<usize> = self
                .successors(e, false)
                .iter()
                .filter_map(|s| events.iter().position(|x| x == s))
                .collect();
            adjacency.insert(i, successor_indices);
        }
        adjacency
    }
}
