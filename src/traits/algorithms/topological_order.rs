//! Submodule providing Kahn's algorithm for topological sorting of a static
//! directed network.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::{
    error::TopologicalOrderError,
    network::Network,
    traits::{edge::NetworkEdge, incident::Incident, marker::Directed, vertex::Vertex},
};

/// Returns a topological order of the vertices of `net`, breaking ties by
/// vertex order for reproducibility (a min-heap frontier rather than a
/// plain queue).
///
/// # Errors
///
/// Returns [`TopologicalOrderError::NotAcyclic`] if `net` contains a cycle.
pub fn topological_order<V, E>(net: &Network<V, E>) -> Result<Vec<V>, TopologicalOrderError>
where
    V: Vertex,
    E: NetworkEdge<V> + Directed,
{
    let mut in_degree: alloc::collections::BTreeMap<V, usize> =
        net.vertices().iter().map(|v| (v.clone(), 0usize)).collect();

    for edge in net.edges() {
        for head in edge.mutated_verts() {
            if let Some(d) = in_degree.get_mut(&head) {
                *d += 1;
            }
        }
    }

    let mut frontier: BinaryHeap<Reverse<V>> = in_degree
        .iter()
        .filter(|(_, &d)| d == 0)
        .map(|(v, _)| Reverse(v.clone()))
        .collect();

    let mut order = Vec::with_capacity(net.vertices().len());

    while let Some(Reverse(v)) = frontier.pop() {
        order.push(v.clone());
        for successor in net.successors(&v) {
            if let Some(d) = in_degree.get_mut(&successor) {
                *d -= 1;
                if *d == 0 {
                    frontier.push(Reverse(successor));
                }
            }
        }
    }

    if order.len() != net.vertices().len() {
        return Err(TopologicalOrderError::NotAcyclic);
    }

    Ok(order)
}
