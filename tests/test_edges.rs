//! Integration tests for edge construction, canonicalization, and the
//! incidence/marker trait hierarchy.

use dagtime::edges::{
    DirectedDelayedTemporalEdge, DirectedEdge, DirectedHyperedge, DirectedTemporalEdge,
    UndirectedEdge, UndirectedHyperedge, UndirectedTemporalEdge,
};
use dagtime::traits::{Delayed, Incident, NetworkEdge, TemporalEdge};

#[test]
fn undirected_edge_canonicalizes_endpoint_order() {
    let a = UndirectedEdge::new(3, 1);
    let b = UndirectedEdge::new(1, 3);
    assert_eq!(a, b);
    assert_eq!(a.mutator_verts(), vec![1, 3]);
}

#[test]
fn undirected_edge_mutator_and_mutated_coincide() {
    let e = UndirectedEdge::new(5, 2);
    assert_eq!(e.mutator_verts(), e.mutated_verts());
    assert!(e.is_incident(&5));
    assert!(e.is_incident(&2));
    assert!(!e.is_incident(&9));
}

#[test]
fn directed_edge_distinguishes_tail_and_head() {
    let e = DirectedEdge::new(1, 2);
    assert_eq!(e.mutator_verts(), vec![1]);
    assert_eq!(e.mutated_verts(), vec![2]);
    assert!(e.is_out_incident(&1));
    assert!(e.is_in_incident(&2));
    assert!(!e.is_out_incident(&2));
}

#[test]
fn directed_edge_tail_equal_head_differs_from_reversed() {
    let forward = DirectedEdge::new(1, 2);
    let backward = DirectedEdge::new(2, 1);
    assert_ne!(forward, backward);
}

#[test]
fn temporal_edge_static_projection_drops_time() {
    let e = DirectedTemporalEdge::new(1, 2, 7i64);
    assert_eq!(e.static_projection(), DirectedEdge::new(1, 2));
    assert_eq!(e.cause_time(), 7);
    assert_eq!(e.effect_time(), 7);
}

#[test]
fn undirected_temporal_edge_canonicalizes_like_its_static_edge() {
    let e = UndirectedTemporalEdge::new(9, 4, 2i64);
    assert_eq!(e.static_projection(), UndirectedEdge::new(4, 9));
}

#[test]
fn delayed_edge_effect_time_is_cause_plus_delay() {
    let e = DirectedDelayedTemporalEdge::new(1, 2, 10i64, 3i64);
    assert_eq!(e.cause_time(), 10);
    assert_eq!(e.delay(), 3);
    assert_eq!(e.effect_time(), 13);
}

#[test]
fn zero_delay_edge_has_equal_cause_and_effect() {
    let e = DirectedDelayedTemporalEdge::new(1, 2, 10i64, 0i64);
    assert_eq!(e.cause_time(), e.effect_time());
}

#[test]
fn hyperedge_canonicalizes_and_deduplicates_members() {
    let e = UndirectedHyperedge::new(vec![3, 1, 2, 1]);
    assert_eq!(e.mutator_verts(), vec![1, 2, 3]);
}

#[test]
fn directed_hyperedge_keeps_tails_and_heads_separate() {
    let e = DirectedHyperedge::new(vec![2, 1], vec![4, 3]);
    assert_eq!(e.mutator_verts(), vec![1, 2]);
    assert_eq!(e.mutated_verts(), vec![3, 4]);
}

#[test]
fn is_adjacent_to_requires_strictly_later_cause_time() {
    let a = DirectedTemporalEdge::new(1, 2, 5i64);
    let simultaneous = DirectedTemporalEdge::new(2, 3, 5i64);
    let later = DirectedTemporalEdge::new(2, 3, 6i64);
    assert!(!a.is_adjacent_to(&simultaneous));
    assert!(a.is_adjacent_to(&later));
}

#[test]
fn is_adjacent_to_requires_shared_mutated_to_mutator_vertex() {
    let a = DirectedTemporalEdge::new(1, 2, 5i64);
    let unrelated = DirectedTemporalEdge::new(3, 4, 6i64);
    assert!(!a.is_adjacent_to(&unrelated));
}
