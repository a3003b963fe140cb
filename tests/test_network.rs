//! Integration tests for the `Network` container: construction,
//! deduplication, adjacency indices, and the set-theoretic combinators.

use std::collections::BTreeSet;

use dagtime::edges::{DirectedEdge, UndirectedEdge};
use dagtime::network::{
    cartesian_product, graph_union, occupy_edges, occupy_vertices, relabel_nodes,
    vertex_induced_subgraph, with_edges, with_vertices, without_edges, without_vertices, Network,
};
use dagtime::traits::Incident;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn construction_deduplicates_equal_edges() {
    let net = Network::new(vec![
        UndirectedEdge::new(1, 2),
        UndirectedEdge::new(2, 1),
        UndirectedEdge::new(1, 3),
    ]);
    assert_eq!(net.edge_count(), 2);
    assert_eq!(net.vertices().len(), 3);
}

#[test]
fn with_isolated_adds_vertices_without_edges() {
    let net = Network::new(vec![DirectedEdge::new(1, 2)]).with_isolated([3, 4]);
    assert_eq!(net.vertices().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(net.edge_count(), 1);
    assert_eq!(net.degree(&3), 0);
}

#[test]
fn out_and_in_edges_partition_directed_adjacency() {
    let net = Network::new(vec![DirectedEdge::new(1, 2), DirectedEdge::new(3, 2), DirectedEdge::new(2, 3)]);
    assert_eq!(net.out_degree(&2), 1);
    assert_eq!(net.in_degree(&2), 2);
    assert_eq!(net.successors(&1), vec![2]);
    assert_eq!(net.predecessors(&2), vec![1, 3]);
}

#[test]
fn degree_counts_distinct_incident_edges_not_in_plus_out() {
    // An undirected edge is both an out- and in-incidence of each endpoint;
    // `degree` must not double count it.
    let net = Network::new(vec![UndirectedEdge::new(1, 2)]);
    assert_eq!(net.degree(&1), 1);
    assert_eq!(net.in_degree(&1) + net.out_degree(&1), 2);
}

#[test]
fn neighbours_is_union_of_successors_and_predecessors() {
    let net = Network::new(vec![DirectedEdge::new(1, 2), DirectedEdge::new(3, 1)]);
    assert_eq!(net.neighbours(&1), vec![2, 3]);
}

#[test]
fn graph_union_combines_edges_and_vertices() {
    let a = Network::new(vec![UndirectedEdge::new(1, 2)]);
    let b = Network::new(vec![UndirectedEdge::new(2, 3)]).with_isolated([9]);
    let u = graph_union(&a, &b);
    assert_eq!(u.edge_count(), 2);
    assert!(u.vertices().contains(&9));
}

#[test]
fn with_edges_and_without_edges_are_inverse_on_a_fresh_edge() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2)]);
    let extra = UndirectedEdge::new(3, 4);
    let grown = with_edges(&net, [extra]);
    assert_eq!(grown.edge_count(), 2);
    let shrunk = without_edges(&grown, &[extra]);
    assert_eq!(shrunk.edge_count(), 1);
    assert!(shrunk.vertices().contains(&3));
    assert!(shrunk.vertices().contains(&4));
}

#[test]
fn without_vertices_also_removes_incident_edges() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    let trimmed = without_vertices(&net, &[2]);
    assert_eq!(trimmed.edge_count(), 0);
    assert!(!trimmed.vertices().contains(&2));
    assert!(trimmed.vertices().contains(&1));
    assert!(trimmed.vertices().contains(&3));
}

#[test]
fn with_vertices_adds_isolated_vertices() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2)]);
    let grown = with_vertices(&net, [5, 6]);
    assert_eq!(grown.edge_count(), 1);
    assert!(grown.vertices().contains(&5));
}

#[test]
fn vertex_induced_subgraph_keeps_only_fully_interior_edges() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    let subset: BTreeSet<i32> = [1, 2].into_iter().collect();
    let induced = vertex_induced_subgraph(&net, &subset);
    assert_eq!(induced.edge_count(), 1);
    assert!(induced.vertices().contains(&1) && induced.vertices().contains(&2));
    assert!(!induced.vertices().contains(&3));
}

#[test]
fn relabel_nodes_is_a_dense_bijection_in_ascending_order() {
    let net = Network::new(vec![UndirectedEdge::new(10, 20), UndirectedEdge::new(20, 30)]);
    let labels = relabel_nodes(&net);
    let mut by_label: Vec<(i32, usize)> = labels.into_iter().collect();
    by_label.sort_by_key(|&(_, i)| i);
    assert_eq!(by_label, vec![(10, 0), (20, 1), (30, 2)]);
}

#[test]
fn occupy_edges_with_probability_zero_drops_everything_but_vertices() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let thinned = occupy_edges(&net, 0.0, &mut rng);
    assert_eq!(thinned.edge_count(), 0);
    assert_eq!(thinned.vertices(), net.vertices());
}

#[test]
fn occupy_edges_with_probability_one_keeps_everything() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let kept = occupy_edges(&net, 1.0, &mut rng);
    assert_eq!(kept.edge_count(), net.edge_count());
}

#[test]
fn occupy_vertices_with_probability_zero_leaves_no_vertices_or_edges() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2)]);
    let mut rng = SmallRng::seed_from_u64(7);
    let thinned = occupy_vertices(&net, 0.0, &mut rng);
    assert_eq!(thinned.vertices().len(), 0);
    assert_eq!(thinned.edge_count(), 0);
}

#[test]
fn occupy_vertices_never_leaves_a_dangling_edge() {
    let net = Network::new(vec![
        UndirectedEdge::new(1, 2),
        UndirectedEdge::new(2, 3),
        UndirectedEdge::new(3, 4),
    ]);
    let mut rng = SmallRng::seed_from_u64(42);
    let thinned = occupy_vertices(&net, 0.5, &mut rng);
    for e in thinned.edges_cause() {
        for v in e.incident_verts() {
            assert!(thinned.vertices().contains(&v));
        }
    }
}

#[test]
fn cartesian_product_vertex_set_is_the_full_pair_set() {
    let g = Network::new(vec![UndirectedEdge::new(0, 1)]);
    let h = Network::new(vec![UndirectedEdge::new('a', 'b')]);
    let product = cartesian_product(&g, &h);
    assert_eq!(product.vertices().len(), 4);
    assert!(product.vertices().contains(&(0, 'a')));
    assert!(product.vertices().contains(&(1, 'b')));
}

#[test]
fn cartesian_product_edge_count_matches_the_grid_formula() {
    // |E(G x H)| = |V(G)|*|E(H)| + |E(G)|*|V(H)|
    let g = Network::new(vec![UndirectedEdge::new(0, 1), UndirectedEdge::new(1, 2)]);
    let h = Network::new(vec![UndirectedEdge::new(0, 1)]);
    let product = cartesian_product(&g, &h);
    let expected = g.vertices().len() * h.edge_count() + g.edge_count() * h.vertices().len();
    assert_eq!(product.edge_count(), expected);
}
