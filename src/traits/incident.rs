//! Submodule defining the incidence capability shared by every edge kind.

use alloc::vec::Vec;

use crate::traits::vertex::Vertex;

/// Trait exposing the tail/head/incident vertex sets of an edge, uniformly
/// across dyadic and hyper, directed and undirected edges.
///
/// For undirected edges `mutator_verts()` and `mutated_verts()` coincide
/// with the incident set. For directed edges they are the tail and head
/// sets respectively.
pub trait Incident<V: Vertex> {
    /// Returns the tail (mutator) vertices of the edge.
    fn mutator_verts(&self) -> Vec<V>;

    /// Returns the head (mutated) vertices of the edge.
    fn mutated_verts(&self) -> Vec<V>;

    /// Returns the union of tail and head vertices, deduplicated.
    fn incident_verts(&self) -> Vec<V> {
        let mut verts = self.mutator_verts();
        for v in self.mutated_verts() {
            if !verts.contains(&v) {
                verts.push(v);
            }
        }
        verts
    }

    /// Returns whether `vert` is a tail (mutator) vertex.
    fn is_out_incident(&self, vert: &V) -> bool {
        self.mutator_verts().iter().any(|v| v == vert)
    }

    /// Returns whether `vert` is a head (mutated) vertex.
    fn is_in_incident(&self, vert: &V) -> bool {
        self.mutated_verts().iter().any(|v| v == vert)
    }

    /// Returns whether `vert` is incident to the edge at all.
    fn is_incident(&self, vert: &V) -> bool {
        self.is_out_incident(vert) || self.is_in_incident(vert)
    }
}
