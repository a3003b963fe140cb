//! Submodule providing weakly connected components via union-find over
//! incident vertex pairs.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{
    network::Network,
    traits::{edge::NetworkEdge, incident::Incident, vertex::Vertex},
};

struct UnionFind<V: Vertex> {
    parent: BTreeMap<V, V>,
    rank: BTreeMap<V, usize>,
}

impl<V: Vertex> UnionFind<V> {
    fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut parent = BTreeMap::new();
        let mut rank = BTreeMap::new();
        for v in vertices {
            rank.insert(v.clone(), 0);
            parent.insert(v.clone(), v);
        }
        Self { parent, rank }
    }

    fn find(&mut self, v: &V) -> V {
        let p = self.parent.get(v).cloned().unwrap_or_else(|| v.clone());
        if &p == v {
            return p;
        }
        let root = self.find(&p);
        self.parent.insert(v.clone(), root.clone());
        root
    }

    fn union(&mut self, a: &V, b: &V) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let rank_a = *self.rank.get(&ra).unwrap_or(&0);
        let rank_b = *self.rank.get(&rb).unwrap_or(&0);
        if rank_a < rank_b {
            self.parent.insert(ra, rb);
        } else if rank_a > rank_b {
            self.parent.insert(rb, ra);
        } else {
            self.parent.insert(rb.clone(), ra.clone());
            *self.rank.entry(ra).or_insert(0) += 1;
        }
    }
}

/// Returns the weakly connected components of `net` as vectors of vertices,
/// sorted by their smallest member for reproducibility.
pub fn weakly_connected_components<V, E>(net: &Network<V, E>) -> Vec<Vec<V>>
where
    V: Vertex,
    E: NetworkEdge<V>,
{
    let mut uf = UnionFind::new(net.vertices().iter().cloned());

    for edge in net.edges() {
        let incident = edge.incident_verts();
        if let Some(first) = incident.first() {
            for other in &incident[1..] {
                uf.union(first, other);
            }
        }
    }

    let mut groups: BTreeMap<V, Vec<V>> = BTreeMap::new();
    for v in net.vertices() {
        let root = uf.find(v);
        groups.entry(root).or_default().push(v.clone());
    }

    let mut components: Vec<Vec<V>> = groups.into_values().collect();
    for component in &mut components {
        component.sort();
    }
    components.sort_by(|a, b| a.first().cmp(&b.first()));
    components
}
