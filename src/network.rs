//! Submodule defining the [`Network`] container: an immutable, deduplicated
//! edge multiset together with the four vertex-indexed adjacency indices
//! (in/out x cause/effect) and the set-theoretic combinators built on top
//! of it.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use rand::Rng;

use crate::edges::UndirectedEdge;
use crate::traits::{edge::NetworkEdge, incident::Incident, vertex::Vertex};

/// An immutable temporal (or static) network: a deduplicated edge set plus
/// four vertex-indexed adjacency views sorted by cause or effect order.
///
/// Adjacency indices store positions into the edge arena rather than
/// cloned edges, so hyperedges (whose clones are expensive) aren't
/// duplicated per incident vertex.
#[derive(Debug, Clone)]
pub struct Network<V: Vertex, E: NetworkEdge<V>> {
    edges: Vec<E>,
    effect_order: Vec<u32>,
    vertices: BTreeSet<V>,
    out_cause: BTreeMap<V, Vec<u32>>,
    in_cause: BTreeMap<V, Vec<u32>>,
    out_effect: BTreeMap<V, Vec<u32>>,
    in_effect: BTreeMap<V, Vec<u32>>,
}

/// Builder for [`Network`], for the capacity-hinted / explicit-supplemental-
/// vertex-set construction path.
#[derive(Debug, Clone)]
pub struct NetworkBuilder<V: Vertex, E: NetworkEdge<V>> {
    edges: Vec<E>,
    vertices: BTreeSet<V>,
}

impl<V: Vertex, E: NetworkEdge<V>> Default for NetworkBuilder<V, E> {
    fn default() -> Self {
        Self { edges: Vec::new(), vertices: BTreeSet::new() }
    }
}

impl<V: Vertex, E: NetworkEdge<V>> NetworkBuilder<V, E> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves capacity for at least `additional` more edges.
    #[must_use]
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.edges.reserve(additional);
        self
    }

    /// Adds `edges` to the edge multiset.
    #[must_use]
    pub fn edges(mut self, edges: impl IntoIterator<Item = E>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Declares additional isolated vertices (vertices with no incident
    /// edge) that should still appear in `vertices()`.
    #[must_use]
    pub fn supplemental_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Builds the immutable [`Network`].
    #[must_use]
    pub fn build(self) -> Network<V, E> {
        Network::from_parts(self.edges, self.vertices)
    }
}

impl<V: Vertex, E: NetworkEdge<V>> Network<V, E> {
    /// Builds a network from an edge multiset. Duplicate edges (by
    /// equality) collapse to one; the vertex set is the union of incident
    /// vertices.
    #[must_use]
    pub fn new(edges: impl IntoIterator<Item = E>) -> Self {
        Self::from_parts(edges.into_iter().collect(), BTreeSet::new())
    }

    fn from_parts(raw_edges: Vec<E>, supplemental_vertices: BTreeSet<V>) -> Self {
        // Deduplicate on equality. All equal writes are identical, so which
        // one survives doesn't matter.
        let mut seen: Vec<E> = Vec::with_capacity(raw_edges.len());
        for edge in raw_edges {
            if !seen.contains(&edge) {
                seen.push(edge);
            }
        }
        seen.sort_by_key(NetworkEdge::cause_key);

        let mut vertices = supplemental_vertices;
        for edge in &seen {
            vertices.extend(edge.incident_verts());
        }

        let mut out_cause: BTreeMap<V, Vec<u32>> = BTreeMap::new();
        let mut in_cause: BTreeMap<V, Vec<u32>> = BTreeMap::new();
        for (idx, edge) in seen.iter().enumerate() {
            let idx = idx as u32;
            for v in edge.mutator_verts() {
                out_cause.entry(v).or_default().push(idx);
            }
            for v in edge.mutated_verts() {
                in_cause.entry(v).or_default().push(idx);
            }
        }

        let mut effect_order: Vec<u32> = (0..seen.len() as u32).collect();
        effect_order.sort_by_key(|&idx| seen[idx as usize].effect_key());

        let mut effect_rank = alloc::vec![0u32; seen.len()];
        for (rank, &idx) in effect_order.iter().enumerate() {
            effect_rank[idx as usize] = rank as u32;
        }

        let mut out_effect = out_cause.clone();
        for indices in out_effect.values_mut() {
            indices.sort_by_key(|&idx| effect_rank[idx as usize]);
        }
        let mut in_effect = in_cause.clone();
        for indices in in_effect.values_mut() {
            indices.sort_by_key(|&idx| effect_rank[idx as usize]);
        }

        Self {
            edges: seen,
            effect_order,
            vertices,
            out_cause,
            in_cause,
            out_effect,
            in_effect,
        }
    }

    /// Returns all edges, sorted in cause order.
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    /// Returns all edges, sorted in cause order. Alias for [`Self::edges`].
    pub fn edges_cause(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    /// Returns all edges, sorted in effect order.
    pub fn edges_effect(&self) -> impl Iterator<Item = &E> + '_ {
        self.effect_order.iter().map(move |&idx| &self.edges[idx as usize])
    }

    /// Returns the number of distinct edges in the network.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex set, in ascending order.
    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    fn edges_at(indices: &[u32], edges: &[E]) -> impl Iterator<Item = &E> {
        indices.iter().map(move |&idx| &edges[idx as usize])
    }

    /// Returns the edges for which `v` is a mutator (tail) vertex, in cause
    /// order.
    pub fn out_edges_cause(&self, v: &V) -> impl Iterator<Item = &E> {
        static EMPTY: &[u32] = &[];
        let indices = self.out_cause.get(v).map_or(EMPTY.as_slice(), Vec::as_slice);
        Self::edges_at(indices, &self.edges)
    }

    /// Returns the edges for which `v` is a mutated (head) vertex, in cause
    /// order.
    pub fn in_edges_cause(&self, v: &V) -> impl Iterator<Item = &E> {
        static EMPTY: &[u32] = &[];
        let indices = self.in_cause.get(v).map_or(EMPTY.as_slice(), Vec::as_slice);
        Self::edges_at(indices, &self.edges)
    }

    /// Returns the edges for which `v` is a mutator (tail) vertex, in
    /// effect order.
    pub fn out_edges_effect(&self, v: &V) -> impl Iterator<Item = &E> {
        static EMPTY: &[u32] = &[];
        let indices = self.out_effect.get(v).map_or(EMPTY.as_slice(), Vec::as_slice);
        Self::edges_at(indices, &self.edges)
    }

    /// Returns the edges for which `v` is a mutated (head) vertex, in
    /// effect order.
    pub fn in_edges_effect(&self, v: &V) -> impl Iterator<Item = &E> {
        static EMPTY: &[u32] = &[];
        let indices = self.in_effect.get(v).map_or(EMPTY.as_slice(), Vec::as_slice);
        Self::edges_at(indices, &self.edges)
    }

    /// Returns the successors of `v`: the union of head vertices of edges
    /// where `v` is a tail, excluding `v` itself, deduplicated.
    #[must_use]
    pub fn successors(&self, v: &V) -> Vec<V> {
        let mut out: BTreeSet<V> = BTreeSet::new();
        for edge in self.out_edges_cause(v) {
            out.extend(edge.mutated_verts().into_iter().filter(|h| h != v));
        }
        out.into_iter().collect()
    }

    /// Returns the predecessors of `v`: the union of tail vertices of
    /// edges where `v` is a head, excluding `v` itself, deduplicated.
    #[must_use]
    pub fn predecessors(&self, v: &V) -> Vec<V> {
        let mut out: BTreeSet<V> = BTreeSet::new();
        for edge in self.in_edges_cause(v) {
            out.extend(edge.mutator_verts().into_iter().filter(|t| t != v));
        }
        out.into_iter().collect()
    }

    /// Returns the neighbours of `v`: `successors(v) ∪ predecessors(v)`.
    #[must_use]
    pub fn neighbours(&self, v: &V) -> Vec<V> {
        let mut out: BTreeSet<V> = self.successors(v).into_iter().collect();
        out.extend(self.predecessors(v));
        out.into_iter().collect()
    }

    /// Returns the in-degree of `v`: the number of edges for which `v` is a
    /// head.
    #[must_use]
    pub fn in_degree(&self, v: &V) -> usize {
        self.in_cause.get(v).map_or(0, Vec::len)
    }

    /// Returns the out-degree of `v`: the number of edges for which `v` is
    /// a tail.
    #[must_use]
    pub fn out_degree(&self, v: &V) -> usize {
        self.out_cause.get(v).map_or(0, Vec::len)
    }

    /// Adds `vertices` to the vertex set as (possibly isolated) vertices,
    /// without touching the edge set or its indices. Used by generators
    /// that need every vertex `0..n` to appear even when some end up with
    /// no incident edge.
    #[must_use]
    pub fn with_isolated(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Returns the total degree of `v`: the number of distinct edges
    /// incident to it (not `in_degree + out_degree`, which would
    /// double-count edges that are both, as every undirected edge is).
    #[must_use]
    pub fn degree(&self, v: &V) -> usize {
        let mut incident: BTreeSet<u32> = BTreeSet::new();
        if let Some(idx) = self.out_cause.get(v) {
            incident.extend(idx.iter().copied());
        }
        if let Some(idx) = self.in_cause.get(v) {
            incident.extend(idx.iter().copied());
        }
        incident.len()
    }
}

/// Builds a new network containing every edge and vertex in either `a` or
/// `b`.
#[must_use]
pub fn graph_union<V: Vertex, E: NetworkEdge<V>>(a: &Network<V, E>, b: &Network<V, E>) -> Network<V, E> {
    let mut vertices: BTreeSet<V> = a.vertices().clone();
    vertices.extend(b.vertices().iter().cloned());
    let edges: Vec<E> = a.edges().chain(b.edges()).cloned().collect();
    Network::from_parts(edges, vertices)
}

/// Builds a new network with `edges` added to `net`'s edge set.
#[must_use]
pub fn with_edges<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    edges: impl IntoIterator<Item = E>,
) -> Network<V, E> {
    let merged: Vec<E> = net.edges().cloned().chain(edges).collect();
    Network::from_parts(merged, net.vertices().clone())
}

/// Builds a new network with `edges` removed from `net`'s edge set (by
/// equality). Vertices are kept as-is, so removing an edge never silently
/// drops a vertex.
#[must_use]
pub fn without_edges<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    edges: &[E],
) -> Network<V, E> {
    let remaining: Vec<E> = net.edges().filter(|e| !edges.contains(e)).cloned().collect();
    Network::from_parts(remaining, net.vertices().clone())
}

/// Builds a new network with `vertices` added as (possibly isolated)
/// vertices.
#[must_use]
pub fn with_vertices<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    vertices: impl IntoIterator<Item = V>,
) -> Network<V, E> {
    let mut all_vertices = net.vertices().clone();
    all_vertices.extend(vertices);
    Network::from_parts(net.edges().cloned().collect(), all_vertices)
}

/// Builds a new network with `vertices` removed. Any edge incident to a
/// removed vertex is removed as well.
#[must_use]
pub fn without_vertices<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    vertices: &[V],
) -> Network<V, E> {
    let remaining_edges: Vec<E> = net
        .edges()
        .filter(|e| !e.incident_verts().iter().any(|v| vertices.contains(v)))
        .cloned()
        .collect();
    let remaining_vertices: BTreeSet<V> =
        net.vertices().iter().filter(|v| !vertices.contains(v)).cloned().collect();
    Network::from_parts(remaining_edges, remaining_vertices)
}

/// Builds the subgraph induced by `vertices`: every edge with all incident
/// vertices in the set, plus the vertices themselves (including any that
/// end up isolated).
#[must_use]
pub fn vertex_induced_subgraph<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    vertices: &BTreeSet<V>,
) -> Network<V, E> {
    let edges: Vec<E> = net
        .edges()
        .filter(|e| e.incident_verts().iter().all(|v| vertices.contains(v)))
        .cloned()
        .collect();
    Network::from_parts(edges, vertices.clone())
}

/// Builds the subgraph induced by `edges`: those edges plus every vertex
/// they touch.
#[must_use]
pub fn edge_induced_subgraph<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    edges: &[E],
) -> Network<V, E> {
    let kept: Vec<E> = net.edges().filter(|e| edges.contains(e)).cloned().collect();
    Network::from_parts(kept, BTreeSet::new())
}

/// Returns a bijection from `net`'s vertex set to the compact range
/// `0..vertices().len()`, in ascending vertex order.
#[must_use]
pub fn relabel_nodes<V: Vertex, E: NetworkEdge<V>>(net: &Network<V, E>) -> BTreeMap<V, usize> {
    net.vertices().iter().enumerate().map(|(i, v)| (v.clone(), i)).collect()
}

/// Bond percolation: keeps each edge of `net` independently with
/// probability `p`, dropping the rest. Vertices are kept as-is.
#[must_use]
pub fn occupy_edges<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    p: f64,
    rng: &mut impl Rng,
) -> Network<V, E> {
    let kept: Vec<E> = net.edges().filter(|_| rng.gen_bool(p)).cloned().collect();
    Network::from_parts(kept, net.vertices().clone())
}

/// Site percolation: keeps each vertex of `net` independently with
/// probability `p`; any edge losing an incident vertex is dropped along
/// with it.
#[must_use]
pub fn occupy_vertices<V: Vertex, E: NetworkEdge<V>>(
    net: &Network<V, E>,
    p: f64,
    rng: &mut impl Rng,
) -> Network<V, E> {
    let kept_vertices: BTreeSet<V> =
        net.vertices().iter().filter(|_| rng.gen_bool(p)).cloned().collect();
    let kept_edges: Vec<E> = net
        .edges()
        .filter(|e| e.incident_verts().iter().all(|v| kept_vertices.contains(v)))
        .cloned()
        .collect();
    Network::from_parts(kept_edges, kept_vertices)
}

/// Builds the Cartesian product of two undirected static networks: the
/// vertex set is `V(g) x V(h)`, and `(u, x) ~ (v, x)` for every edge
/// `{u, v}` of `g` and vertex `x` of `h`, symmetrically `(u, x) ~ (u, y)`
/// for every vertex `u` of `g` and edge `{x, y}` of `h`.
#[must_use]
pub fn cartesian_product<V: Vertex, W: Vertex>(
    g: &Network<V, UndirectedEdge<V>>,
    h: &Network<W, UndirectedEdge<W>>,
) -> Network<(V, W), UndirectedEdge<(V, W)>> {
    let mut edges = Vec::new();
    for e in g.edges() {
        let verts = e.mutator_verts();
        for x in h.vertices() {
            edges.push(UndirectedEdge::new(
                (verts[0].clone(), x.clone()),
                (verts[1].clone(), x.clone()),
            ));
        }
    }
    for e in h.edges() {
        let verts = e.mutator_verts();
        for u in g.vertices() {
            edges.push(UndirectedEdge::new(
                (u.clone(), verts[0].clone()),
                (u.clone(), verts[1].clone()),
            ));
        }
    }
    let vertices: BTreeSet<(V, W)> = g
        .vertices()
        .iter()
        .flat_map(|u| h.vertices().iter().map(move |x| (u.clone(), x.clone())))
        .collect();
    Network::from_parts(edges, vertices)
}
