//! Integration tests reproducing the worked examples for the implicit
//! event graph, temporal clusters, weak connectivity, and static
//! projection over small, hand-checkable temporal networks.

use dagtime::clusters::{
    in_cluster, out_cluster, out_cluster_from, static_projection, weakly_connected_components,
};
use dagtime::edges::{DirectedDelayedTemporalEdge, DirectedTemporalEdge, UndirectedTemporalEdge};
use dagtime::event_graph::ImplicitEventGraph;
use dagtime::network::Network;
use dagtime::policies::LimitedWaitingTime;
use dagtime::traits::{Delayed, Incident, NetworkEdge};

fn s1_network() -> Network<i32, DirectedTemporalEdge<i32, i64>> {
    Network::new(vec![
        DirectedTemporalEdge::new(1, 2, 1),
        DirectedTemporalEdge::new(2, 1, 2),
        DirectedTemporalEdge::new(1, 2, 5),
        DirectedTemporalEdge::new(2, 3, 6),
        DirectedTemporalEdge::new(3, 4, 8),
    ])
}

#[test]
fn scenario_event_graph_small_delta_t() {
    let net = s1_network();
    let eg = ImplicitEventGraph::new(&net, LimitedWaitingTime::new(2i64));
    let adjacency = eg.materialize();

    let events: Vec<_> = net.edges().cloned().collect();
    let idx = |tail, head, t| {
        events.iter().position(|e| *e == DirectedTemporalEdge::new(tail, head, t)).unwrap()
    };

    let e1 = idx(1, 2, 1);
    let e2 = idx(2, 1, 2);
    let e3 = idx(1, 2, 5);
    let e4 = idx(2, 3, 6);
    let e5 = idx(3, 4, 8);

    assert_eq!(adjacency[&e1], vec![e2]);
    assert_eq!(adjacency[&e2], Vec::<usize>::new());
    assert_eq!(adjacency[&e3], vec![e4]);
    assert_eq!(adjacency[&e4], vec![e5]);
    assert_eq!(adjacency[&e5], Vec::<usize>::new());

    let total_arcs: usize = adjacency.values().map(Vec::len).sum();
    assert_eq!(total_arcs, 3);
}

#[test]
fn scenario_event_graph_wider_delta_t_adds_two_arcs() {
    let net = s1_network();
    let eg = ImplicitEventGraph::new(&net, LimitedWaitingTime::new(5i64));
    let adjacency = eg.materialize();

    let total_arcs: usize = adjacency.values().map(Vec::len).sum();
    assert_eq!(total_arcs, 5);

    let events: Vec<_> = net.edges().cloned().collect();
    let idx = |tail, head, t| {
        events.iter().position(|e| *e == DirectedTemporalEdge::new(tail, head, t)).unwrap()
    };
    let e1 = idx(1, 2, 1);
    let e2 = idx(2, 1, 2);
    let e3 = idx(1, 2, 5);
    let e4 = idx(2, 3, 6);

    assert!(adjacency[&e1].contains(&e2));
    assert!(adjacency[&e1].contains(&e4));
    assert!(adjacency[&e2].contains(&e3));
}

fn s3_network() -> Network<i32, DirectedDelayedTemporalEdge<i32, i64>> {
    Network::new(vec![
        DirectedDelayedTemporalEdge::new(1, 2, 1, 4),
        DirectedDelayedTemporalEdge::new(2, 1, 2, 1),
        DirectedDelayedTemporalEdge::new(1, 2, 5, 0),
        DirectedDelayedTemporalEdge::new(2, 3, 6, 1),
        DirectedDelayedTemporalEdge::new(3, 4, 8, 1),
        DirectedDelayedTemporalEdge::new(5, 6, 1, 2),
    ])
}

/// Comparable key for a directed delayed temporal edge, used only to give
/// test assertions a deterministic sort order independent of `Network`'s
/// own cause ordering.
fn sort_key(e: &DirectedDelayedTemporalEdge<i32, i64>) -> (Vec<i32>, Vec<i32>, i64, i64) {
    (e.mutator_verts(), e.mutated_verts(), e.cause_time(), e.delay())
}

#[test]
fn scenario_in_cluster_of_a_directed_delayed_network() {
    let net = s3_network();
    let eg = ImplicitEventGraph::new(&net, LimitedWaitingTime::new(2i64));
    let seed = DirectedDelayedTemporalEdge::new(2, 3, 6, 1);

    let cluster = in_cluster(&eg, &seed);
    let mut events: Vec<_> = cluster.events().cloned().collect();
    events.sort_by_key(sort_key);

    let mut expected = vec![
        DirectedDelayedTemporalEdge::new(2, 1, 2, 1),
        DirectedDelayedTemporalEdge::new(2, 3, 6, 1),
        DirectedDelayedTemporalEdge::new(1, 2, 5, 0),
        DirectedDelayedTemporalEdge::new(1, 2, 1, 4),
    ];
    expected.sort_by_key(sort_key);

    assert_eq!(events, expected);
}

#[test]
fn scenario_out_cluster_seeded_at_a_vertex_time() {
    let net = s3_network();
    let eg = ImplicitEventGraph::new(&net, LimitedWaitingTime::new(2i64));

    let cluster = out_cluster_from(&eg, 1, 3i64);
    let mut events: Vec<_> = cluster.events().cloned().collect();
    events.sort_by_key(sort_key);

    let mut expected = vec![
        DirectedDelayedTemporalEdge::new(1, 1, 3, 0),
        DirectedDelayedTemporalEdge::new(1, 2, 5, 0),
        DirectedDelayedTemporalEdge::new(2, 3, 6, 1),
        DirectedDelayedTemporalEdge::new(3, 4, 8, 1),
    ];
    expected.sort_by_key(sort_key);

    assert_eq!(events, expected);
}

#[test]
fn scenario_weakly_connected_component_spans_the_whole_causal_chain() {
    let net = s3_network();
    let components = weakly_connected_components(&net, LimitedWaitingTime::new(2i64));

    let big = components.iter().find(|c| c.contains(&3)).expect("component containing vertex 3");
    let mut big_sorted = big.clone();
    big_sorted.sort();
    assert_eq!(big_sorted, vec![1, 2, 3, 4]);

    let small = components.iter().find(|c| c.contains(&5)).expect("component containing vertex 5");
    let mut small_sorted = small.clone();
    small_sorted.sort();
    assert_eq!(small_sorted, vec![5, 6]);

    assert_eq!(components.len(), 2);
}

#[test]
fn scenario_temporal_cluster_mass_lifetime_and_covers() {
    let net = Network::new(vec![
        UndirectedTemporalEdge::new(1, 2, 1i64),
        UndirectedTemporalEdge::new(1, 3, 3i64),
        UndirectedTemporalEdge::new(2, 5, 3i64),
        UndirectedTemporalEdge::new(4, 5, 5i64),
    ]);
    let eg = ImplicitEventGraph::new(&net, LimitedWaitingTime::new(3i64));
    let seed = UndirectedTemporalEdge::new(1, 2, 1i64);

    let cluster = out_cluster(&eg, &seed);

    assert_eq!(cluster.volume(), 5);
    assert_eq!(cluster.lifetime(), (1, 8));
    // Vertex 1 and 2 each cover [1, 6) via the two events incident to them,
    // vertex 3 covers [3, 6), vertex 4 covers [5, 8), and vertex 5's two
    // incident events' windows overlap into a single [3, 8) span: 5 + 5 + 3
    // + 3 + 5 = 21, not the naive per-event sum of 12 a sum over events
    // ignoring shared vertex coverage would give.
    assert_eq!(cluster.mass(), 21);
    assert!(cluster.covers(&3, 5));
    assert!(!cluster.covers(&5, 15));
}

#[test]
fn scenario_static_projection_deduplicates_repeated_links() {
    let net = s1_network();
    let projected = static_projection(&net);
    let mut edges: Vec<(i32, i32)> = projected
        .edges()
        .map(|e| (e.mutator_verts()[0], e.mutated_verts()[0]))
        .collect();
    edges.sort();
    assert_eq!(edges, vec![(1, 2), (2, 1), (2, 3), (3, 4)]);
    assert_eq!(projected.edge_count(), 4);
}
