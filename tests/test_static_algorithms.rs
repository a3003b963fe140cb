//! Integration tests for the static graph algorithms: topological order,
//! strongly/weakly connected components, and reachability.

use dagtime::edges::{DirectedEdge, UndirectedEdge};
use dagtime::network::Network;
use dagtime::traits::{
    is_reachable, strongly_connected_components, topological_order, weakly_connected_components,
};

#[test]
fn topological_order_respects_every_edge() {
    let net = Network::new(vec![
        DirectedEdge::new(1, 2),
        DirectedEdge::new(1, 3),
        DirectedEdge::new(2, 4),
        DirectedEdge::new(3, 4),
    ]);
    let order = topological_order(&net).expect("dag has a topological order");
    assert_eq!(order.len(), net.vertices().len());
    let position = |v: &i32| order.iter().position(|x| x == v).unwrap();
    assert!(position(&1) < position(&2));
    assert!(position(&1) < position(&3));
    assert!(position(&2) < position(&4));
    assert!(position(&3) < position(&4));
}

#[test]
fn topological_order_rejects_a_cycle() {
    let net = Network::new(vec![
        DirectedEdge::new(1, 2),
        DirectedEdge::new(2, 3),
        DirectedEdge::new(3, 1),
    ]);
    assert!(topological_order(&net).is_err());
}

#[test]
fn topological_order_breaks_ties_by_vertex_order() {
    // No edges at all: the whole frontier starts at in-degree zero, so the
    // order must be exactly the ascending vertex order.
    let net = Network::new(Vec::<DirectedEdge<i32>>::new()).with_isolated([3, 1, 2]);
    assert_eq!(topological_order(&net).unwrap(), vec![1, 2, 3]);
}

#[test]
fn strongly_connected_components_group_mutual_reachability() {
    let net = Network::new(vec![
        DirectedEdge::new(1, 2),
        DirectedEdge::new(2, 3),
        DirectedEdge::new(3, 1),
        DirectedEdge::new(3, 4),
    ]);
    let mut sccs = strongly_connected_components(&net);
    sccs.sort();
    assert_eq!(sccs, vec![vec![1, 2, 3], vec![4]]);
}

#[test]
fn weakly_connected_components_ignore_edge_direction() {
    let net = Network::new(vec![DirectedEdge::new(1, 2), DirectedEdge::new(3, 2)])
        .with_isolated([9]);
    let mut wccs = weakly_connected_components(&net);
    wccs.sort();
    assert_eq!(wccs, vec![vec![1, 2, 3], vec![9]]);
}

#[test]
fn is_reachable_follows_directed_paths_only() {
    let net = Network::new(vec![DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)]);
    assert!(is_reachable(&net, &1, &3));
    assert!(!is_reachable(&net, &3, &1));
    assert!(is_reachable(&net, &1, &1));
}

#[test]
fn is_reachable_on_undirected_network_treats_both_endpoints_as_successors() {
    let net = Network::new(vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    assert!(is_reachable(&net, &1, &3));
    assert!(is_reachable(&net, &3, &1));
}
