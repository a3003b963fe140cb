//! Submodule providing Tarjan's algorithm for strongly connected
//! components of a static directed network. Uses an explicit stack rather
//! than a naive recursive formulation, which would overflow the call
//! stack on long chains.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{
    network::Network,
    traits::{edge::NetworkEdge, marker::Directed, vertex::Vertex},
};

/// One stack frame of the simulated DFS call: the node being visited, its
/// successors, how far we've iterated through them, and the parent node to
/// propagate `lowlink` back into once this frame finishes.
struct Frame<V> {
    node: V,
    successors: Vec<V>,
    next: usize,
    parent: Option<V>,
}

/// Returns the strongly connected components of `net`, each as a sorted
/// vector of vertices.
pub fn strongly_connected_components<V, E>(net: &Network<V, E>) -> Vec<Vec<V>>
where
    V: Vertex,
    E: NetworkEdge<V> + Directed,
{
    let mut index_counter = 0usize;
    let mut indices: BTreeMap<V, usize> = BTreeMap::new();
    let mut lowlink: BTreeMap<V, usize> = BTreeMap::new();
    let mut on_stack: BTreeMap<V, bool> = BTreeMap::new();
    let mut tarjan_stack: Vec<V> = Vec::new();
    let mut components: Vec<Vec<V>> = Vec::new();

    for start in net.vertices() {
        if indices.contains_key(start) {
            continue;
        }

        let mut call_stack: Vec<Frame<V>> = alloc::vec![Frame {
            node: start.clone(),
            successors: net.successors(start),
            next: 0,
            parent: None,
        }];
        indices.insert(start.clone(), index_counter);
        lowlink.insert(start.clone(), index_counter);
        index_counter += 1;
        tarjan_stack.push(start.clone());
        on_stack.insert(start.clone(), true);

        while let Some(frame) = call_stack.last_mut() {
            if frame.next < frame.successors.len() {
                let successor = frame.successors[frame.next].clone();
                frame.next += 1;

                if !indices.contains_key(&successor) {
                    indices.insert(successor.clone(), index_counter);
                    lowlink.insert(successor.clone(), index_counter);
                    index_counter += 1;
                    tarjan_stack.push(successor.clone());
                    on_stack.insert(successor.clone(), true);

                    let parent = frame.node.clone();
                    call_stack.push(Frame {
                        successors: net.successors(&successor),
                        node: successor,
                        next: 0,
                        parent: Some(parent),
                    });
                } else if *on_stack.get(&successor).unwrap_or(&false) {
                    let successor_index = indices[&successor];
                    let node = frame.node.clone();
                    let node_low = lowlink[&node];
                    lowlink.insert(node, node_low.min(successor_index));
                }
            } else {
                let finished = call_stack.pop().expect("frame exists");

                if lowlink[&finished.node] == indices[&finished.node] {
                    let mut component = Vec::new();
                    loop {
                        let w = tarjan_stack.pop().expect("stack non-empty until root popped");
                        on_stack.insert(w.clone(), false);
                        let is_root = w == finished.node;
                        component.push(w);
                        if is_root {
                            break;
                        }
                    }
                    component.sort();
                    components.push(component);
                }

                if let Some(parent) = finished.parent {
                    let finished_low = lowlink[&finished.node];
                    let parent_low = lowlink[&parent];
                    lowlink.insert(parent, parent_low.min(finished_low));
                }
            }
        }
    }

    components
}
