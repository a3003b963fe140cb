//! Integration tests for the graph generators.

use dagtime::generators::{
    barabasi_albert_graph, complete_directed_graph, complete_graph, configuration_model,
    configuration_model_directed, expected_degree_graph, fully_mixed_temporal_network,
    gnp_directed_graph, gnp_undirected_graph, path_graph, regular_ring_lattice, square_grid_graph,
};
use dagtime::traits::NetworkEdge;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn gnp_undirected_graph_never_exceeds_the_maximum_edge_count() {
    let mut rng = SmallRng::seed_from_u64(1);
    let net = gnp_undirected_graph::<u32>(10, 1.0, &mut rng);
    assert_eq!(net.edge_count(), 10 * 9 / 2);
    assert_eq!(net.vertices().len(), 10);
}

#[test]
fn gnp_undirected_graph_with_zero_probability_is_edgeless_but_keeps_all_vertices() {
    let mut rng = SmallRng::seed_from_u64(2);
    let net = gnp_undirected_graph::<u32>(6, 0.0, &mut rng);
    assert_eq!(net.edge_count(), 0);
    assert_eq!(net.vertices().len(), 6);
}

#[test]
fn gnp_directed_graph_never_exceeds_the_maximum_edge_count() {
    let mut rng = SmallRng::seed_from_u64(3);
    let net = gnp_directed_graph::<u32>(5, 1.0, &mut rng);
    assert_eq!(net.edge_count(), 5 * 4);
}

#[test]
fn configuration_model_rejects_an_odd_degree_sum() {
    let mut rng = SmallRng::seed_from_u64(4);
    let result = configuration_model::<u32>(&[1, 1, 1], &mut rng);
    assert!(result.is_err());
}

#[test]
fn configuration_model_matches_the_requested_total_degree() {
    let mut rng = SmallRng::seed_from_u64(5);
    let degrees = [2, 2, 2, 2];
    let net = configuration_model::<u32>(&degrees, &mut rng).expect("even degree sum");
    let realized: usize = (0..degrees.len() as u32).map(|v| net.degree(&v)).sum();
    // Self-loop stubs that couldn't be rewired are dropped entirely, so the
    // realized total only ever matches or falls short of the request.
    assert!(realized <= degrees.iter().sum::<usize>());
}

#[test]
fn configuration_model_directed_rejects_mismatched_sums() {
    let mut rng = SmallRng::seed_from_u64(6);
    let result = configuration_model_directed::<u32>(&[1, 1], &[2], &mut rng);
    assert!(result.is_err());
}

#[test]
fn configuration_model_directed_accepts_matching_sums() {
    let mut rng = SmallRng::seed_from_u64(7);
    let result = configuration_model_directed::<u32>(&[1, 1, 1], &[1, 1, 1], &mut rng);
    assert!(result.is_ok());
}

#[test]
fn expected_degree_graph_rejects_a_negative_weight() {
    let mut rng = SmallRng::seed_from_u64(8);
    let result = expected_degree_graph::<u32>(&[1.0, -1.0], &mut rng);
    assert!(result.is_err());
}

#[test]
fn expected_degree_graph_with_zero_weights_is_edgeless() {
    let mut rng = SmallRng::seed_from_u64(9);
    let net = expected_degree_graph::<u32>(&[0.0, 0.0, 0.0], &mut rng).expect("non-negative weights");
    assert_eq!(net.edge_count(), 0);
    assert_eq!(net.vertices().len(), 3);
}

#[test]
fn barabasi_albert_graph_adds_exactly_m_edges_per_new_vertex() {
    let mut rng = SmallRng::seed_from_u64(10);
    let net = barabasi_albert_graph::<u32>(10, 3, &mut rng);
    assert_eq!(net.edge_count(), (10 - 3) * 3);
    assert_eq!(net.vertices().len(), 10);
}

#[test]
fn fully_mixed_temporal_network_keeps_every_event_within_the_requested_window() {
    let mut rng = SmallRng::seed_from_u64(11);
    let net = fully_mixed_temporal_network::<u32, i64>(8, 0.2, 50, &mut rng);
    for edge in net.edges() {
        let t = edge.cause_time();
        assert!(t >= 0 && t < 50);
    }
}

#[test]
fn regular_ring_lattice_rejects_an_odd_degree() {
    let result = regular_ring_lattice::<u32>(10, 3);
    assert!(result.is_err());
}

#[test]
fn regular_ring_lattice_rejects_a_degree_exceeding_n_minus_one() {
    let result = regular_ring_lattice::<u32>(4, 4);
    assert!(result.is_err());
}

#[test]
fn regular_ring_lattice_has_exactly_n_times_k_over_two_edges() {
    let net = regular_ring_lattice::<u32>(10, 4).expect("valid lattice parameters");
    assert_eq!(net.edge_count(), 10 * 4 / 2);
    for v in 0..10u32 {
        assert_eq!(net.degree(&v), 4);
    }
}

#[test]
fn path_graph_non_periodic_has_n_minus_one_edges() {
    let net = path_graph::<u32>(5, false);
    assert_eq!(net.edge_count(), 4);
}

#[test]
fn path_graph_periodic_closes_into_a_cycle() {
    let net = path_graph::<u32>(5, true);
    assert_eq!(net.edge_count(), 5);
    for v in 0..5u32 {
        assert_eq!(net.degree(&v), 2);
    }
}

#[test]
fn complete_graph_has_the_full_pair_count() {
    let net = complete_graph::<u32>(6);
    assert_eq!(net.edge_count(), 6 * 5 / 2);
}

#[test]
fn complete_directed_graph_has_every_ordered_pair() {
    let net = complete_directed_graph::<u32>(6);
    assert_eq!(net.edge_count(), 6 * 5);
}

#[test]
fn square_grid_graph_non_periodic_two_dimensions_has_boundary() {
    // A 3x3 bounded grid has 2 * 3 * (3 - 1) = 12 edges.
    let net = square_grid_graph::<u32>(3, 2, false);
    assert_eq!(net.vertices().len(), 9);
    assert_eq!(net.edge_count(), 12);
}

#[test]
fn square_grid_graph_periodic_two_dimensions_forms_a_torus() {
    // Every vertex of a 3x3 torus has degree 2*dims = 4.
    let net = square_grid_graph::<u32>(3, 2, true);
    assert_eq!(net.vertices().len(), 9);
    for v in 0..9u32 {
        assert_eq!(net.degree(&v), 4);
    }
}
