//! Submodule for fuzzing `topological_order` against arbitrary directed
//! static edge lists, including ones that contain cycles.

use dagtime::edges::DirectedEdge;
use dagtime::network::Network;
use dagtime::traits::topological_order;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|raw_edges: Vec<(u8, u8)>| {
            let edges: Vec<DirectedEdge<u8>> =
                raw_edges.into_iter().map(|(t, h)| DirectedEdge::new(t, h)).collect();
            let net = Network::new(edges);
            if let Ok(order) = topological_order(&net) {
                assert_eq!(order.len(), net.vertices().len());
                for v in net.vertices() {
                    assert!(order.contains(v));
                }
            }
        });
    }
}
