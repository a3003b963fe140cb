//! Random and deterministic graph generators, generic over an injected
//! `rand::Rng`.
//!
//! Every generator returning a [`Network`] produces vertices `0..n` (via
//! [`num_traits::NumCast`], so any integer vertex type works) and never
//! mutates its `rng` argument beyond drawing from it, so two calls with the
//! same seeded RNG state are reproducible.

use alloc::vec::Vec;

use num_traits::NumCast;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::edges::{DirectedEdge, UndirectedEdge, UndirectedTemporalEdge};
use crate::error::GeneratorError;
use crate::network::Network;
use crate::traits::{time::Time, vertex::Vertex};

fn vertex_at<V: Vertex + NumCast>(i: usize) -> V {
    NumCast::from(i).expect("vertex index must fit the requested vertex type")
}

fn vertices<V: Vertex + NumCast>(n: usize) -> impl Iterator<Item = V> {
    (0..n).map(vertex_at)
}

/// Generates an Erdős–Rényi undirected `G(n, p)` graph: each of the
/// `n*(n-1)/2` possible undirected pairs is included independently with
/// probability `p`.
#[must_use]
pub fn gnp_undirected_graph<V: Vertex + NumCast>(
    n: usize,
    p: f64,
    rng: &mut impl Rng,
) -> Network<V, UndirectedEdge<V>> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < p {
                edges.push(UndirectedEdge::new(vertex_at(i), vertex_at(j)));
            }
        }
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates an Erdős–Rényi directed `G(n, p)` graph: each of the
/// `n*(n-1)` possible ordered pairs is included independently with
/// probability `p`.
#[must_use]
pub fn gnp_directed_graph<V: Vertex + NumCast>(
    n: usize,
    p: f64,
    rng: &mut impl Rng,
) -> Network<V, DirectedEdge<V>> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen::<f64>() < p {
                edges.push(DirectedEdge::new(vertex_at(i), vertex_at(j)));
            }
        }
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Attempts to rewire a self-loop stub pairing `(a, a)` by swapping with the
/// partner of a later, distinct pair. Gives up (leaving the self-loop in
/// place) after `stubs.len()` attempts; callers filter self-loops out
/// explicitly instead of relying on this to always succeed.
fn rewire_self_loops(stubs: &mut [usize], rng: &mut impl Rng) {
    let pairs = stubs.len() / 2;
    for attempt in 0..pairs {
        let (a, b) = (stubs[2 * attempt], stubs[2 * attempt + 1]);
        if a != b {
            continue;
        }
        for _ in 0..stubs.len() {
            let other = rng.gen_range(0..pairs);
            if other == attempt {
                continue;
            }
            let partner_idx = 2 * other + 1;
            if stubs[2 * attempt] != stubs[partner_idx] && stubs[2 * other] != stubs[2 * attempt + 1] {
                stubs.swap(2 * attempt + 1, partner_idx);
                break;
            }
        }
    }
}

/// Generates an undirected graph matching `degree_sequence` via stub
/// (configuration-model) matching, avoiding self-loops on a best-effort
/// basis. Returns [`GeneratorError::InvalidArgument`] if the degree sum is
/// odd (no valid matching exists).
pub fn configuration_model<V: Vertex + NumCast>(
    degree_sequence: &[usize],
    rng: &mut impl Rng,
) -> Result<Network<V, UndirectedEdge<V>>, GeneratorError> {
    let sum: usize = degree_sequence.iter().sum();
    if sum % 2 != 0 {
        return Err(GeneratorError::InvalidArgument {
            reason: alloc::string::String::from("degree sequence sums to an odd number of stubs"),
        });
    }

    let mut stubs: Vec<usize> =
        degree_sequence.iter().enumerate().flat_map(|(v, &d)| core::iter::repeat(v).take(d)).collect();
    stubs.shuffle(rng);
    rewire_self_loops(&mut stubs, rng);

    let edges: Vec<UndirectedEdge<V>> = stubs
        .chunks_exact(2)
        .filter(|pair| pair[0] != pair[1])
        .map(|pair| UndirectedEdge::new(vertex_at(pair[0]), vertex_at(pair[1])))
        .collect();
    Ok(Network::new(edges).with_isolated(vertices(degree_sequence.len())))
}

/// Generates a directed graph matching `in_degrees`/`out_degrees` via stub
/// matching, avoiding self-loops on a best-effort basis. Returns
/// [`GeneratorError::InvalidArgument`] if the two sequences don't sum to the
/// same total (no valid matching exists).
pub fn configuration_model_directed<V: Vertex + NumCast>(
    in_degrees: &[usize],
    out_degrees: &[usize],
    rng: &mut impl Rng,
) -> Result<Network<V, DirectedEdge<V>>, GeneratorError> {
    let in_sum: usize = in_degrees.iter().sum();
    let out_sum: usize = out_degrees.iter().sum();
    if in_sum != out_sum {
        return Err(GeneratorError::InvalidArgument {
            reason: alloc::string::String::from("in-degree and out-degree sequences have unequal sums"),
        });
    }

    let mut out_stubs: Vec<usize> =
        out_degrees.iter().enumerate().flat_map(|(v, &d)| core::iter::repeat(v).take(d)).collect();
    let mut in_stubs: Vec<usize> =
        in_degrees.iter().enumerate().flat_map(|(v, &d)| core::iter::repeat(v).take(d)).collect();
    out_stubs.shuffle(rng);
    in_stubs.shuffle(rng);

    for attempt in 0..out_stubs.len() {
        if out_stubs[attempt] != in_stubs[attempt] {
            continue;
        }
        for _ in 0..in_stubs.len() {
            let other = rng.gen_range(0..in_stubs.len());
            if other != attempt && in_stubs[other] != out_stubs[attempt] {
                in_stubs.swap(attempt, other);
                break;
            }
        }
    }

    let edges: Vec<DirectedEdge<V>> = out_stubs
        .iter()
        .zip(in_stubs.iter())
        .filter(|(&tail, &head)| tail != head)
        .map(|(&tail, &head)| DirectedEdge::new(vertex_at(tail), vertex_at(head)))
        .collect();
    let n = in_degrees.len().max(out_degrees.len());
    Ok(Network::new(edges).with_isolated(vertices(n)))
}

/// Generates an undirected graph via the Chung–Lu expected-degree model: an
/// edge `{i, j}` appears independently with probability
/// `min(weights[i]*weights[j] / sum(weights), 1)`. Returns
/// [`GeneratorError::InvalidArgument`] for a negative weight.
pub fn expected_degree_graph<V: Vertex + NumCast>(
    weights: &[f64],
    rng: &mut impl Rng,
) -> Result<Network<V, UndirectedEdge<V>>, GeneratorError> {
    if weights.iter().any(|&w| w < 0.0) {
        return Err(GeneratorError::InvalidArgument {
            reason: alloc::string::String::from("expected-degree weights must be non-negative"),
        });
    }
    let total: f64 = weights.iter().sum();
    let mut edges = Vec::new();
    if total > 0.0 {
        for i in 0..weights.len() {
            for j in (i + 1)..weights.len() {
                let p = (weights[i] * weights[j] / total).min(1.0);
                if rng.gen::<f64>() < p {
                    edges.push(UndirectedEdge::new(vertex_at(i), vertex_at(j)));
                }
            }
        }
    }
    Ok(Network::new(edges).with_isolated(vertices(weights.len())))
}

/// Generates an undirected graph via linear preferential attachment
/// (Barabási–Albert): starting from `m` isolated vertices, each of the
/// remaining `n - m` vertices attaches `m` edges to existing vertices drawn
/// proportionally to their current degree.
#[must_use]
pub fn barabasi_albert_graph<V: Vertex + NumCast>(
    n: usize,
    m: usize,
    rng: &mut impl Rng,
) -> Network<V, UndirectedEdge<V>> {
    let mut edges: Vec<UndirectedEdge<V>> = Vec::with_capacity((n.saturating_sub(m)) * m);
    // repeated_nodes holds one entry per edge endpoint seen so far, so
    // drawing uniformly from it is equivalent to drawing proportional to
    // degree.
    let mut repeated_nodes: Vec<usize> = (0..m).collect();
    for new_vertex in m..n {
        let mut targets: Vec<usize> = Vec::with_capacity(m);
        while targets.len() < m {
            let candidate = *repeated_nodes.choose(rng).unwrap_or(&0);
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        for &target in &targets {
            edges.push(UndirectedEdge::new(vertex_at(new_vertex), vertex_at(target)));
            repeated_nodes.push(target);
        }
        repeated_nodes.extend(core::iter::repeat(new_vertex).take(m));
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates a fully-mixed undirected temporal network: every unordered
/// pair of the `n` vertices independently exchanges a Poisson process of
/// events at `rate` events per tick over `[0, max_t)`.
#[must_use]
pub fn fully_mixed_temporal_network<V: Vertex + NumCast, T: Time + NumCast>(
    n: usize,
    rate: f64,
    max_t: u64,
    rng: &mut impl Rng,
) -> Network<V, UndirectedTemporalEdge<V, T>> {
    let poisson = Poisson::new(rate * max_t as f64).expect("rate*max_t must be positive");
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let count = poisson.sample(rng).round() as u64;
            for _ in 0..count {
                let t: u64 = rng.gen_range(0..max_t.max(1));
                edges.push(UndirectedTemporalEdge::new(
                    vertex_at(i),
                    vertex_at(j),
                    <T as NumCast>::from(t).expect("tick must fit the requested time type"),
                ));
            }
        }
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates a `k`-regular ring lattice: `n` vertices arranged in a cycle,
/// each connected to its `k/2` nearest neighbours on either side. Returns
/// [`GeneratorError::InvalidArgument`] if `k` is odd or `k > n - 1`.
pub fn regular_ring_lattice<V: Vertex + NumCast>(
    n: usize,
    k: usize,
) -> Result<Network<V, UndirectedEdge<V>>, GeneratorError> {
    if k % 2 != 0 {
        return Err(GeneratorError::InvalidArgument {
            reason: alloc::string::String::from("ring lattice degree k must be even"),
        });
    }
    if n == 0 || k > n - 1 {
        return Err(GeneratorError::InvalidArgument {
            reason: alloc::string::String::from("ring lattice degree k must not exceed n - 1"),
        });
    }

    let mut edges = Vec::with_capacity(n * k / 2);
    for i in 0..n {
        for step in 1..=(k / 2) {
            let j = (i + step) % n;
            edges.push(UndirectedEdge::new(vertex_at(i), vertex_at(j)));
        }
    }
    Ok(Network::new(edges).with_isolated(vertices(n)))
}

/// Generates a path graph on `n` vertices `0 - 1 - ... - (n - 1)`. If
/// `periodic`, also connects `n - 1` back to `0`, forming a cycle.
#[must_use]
pub fn path_graph<V: Vertex + NumCast>(n: usize, periodic: bool) -> Network<V, UndirectedEdge<V>> {
    let mut edges = Vec::new();
    for i in 0..n.saturating_sub(1) {
        edges.push(UndirectedEdge::new(vertex_at(i), vertex_at(i + 1)));
    }
    if periodic && n > 2 {
        edges.push(UndirectedEdge::new(vertex_at(n - 1), vertex_at(0)));
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates the complete undirected graph on `n` vertices: every pair is
/// connected.
#[must_use]
pub fn complete_graph<V: Vertex + NumCast>(n: usize) -> Network<V, UndirectedEdge<V>> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(UndirectedEdge::new(vertex_at(i), vertex_at(j)));
        }
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates the complete directed graph on `n` vertices: every ordered
/// pair of distinct vertices is connected.
#[must_use]
pub fn complete_directed_graph<V: Vertex + NumCast>(n: usize) -> Network<V, DirectedEdge<V>> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                edges.push(DirectedEdge::new(vertex_at(i), vertex_at(j)));
            }
        }
    }
    Network::new(edges).with_isolated(vertices(n))
}

/// Generates an undirected `dims`-dimensional square grid graph with side
/// length `n`: vertices are flattened `dims`-tuples of coordinates in
/// `0..n`, connected to their axis-aligned neighbours. If `periodic`, each
/// axis wraps around (forming a torus); otherwise the grid has boundary.
#[must_use]
pub fn square_grid_graph<V: Vertex + NumCast>(
    n: usize,
    dims: usize,
    periodic: bool,
) -> Network<V, UndirectedEdge<V>> {
    let total = n.checked_pow(dims as u32).unwrap_or(0);
    let coords = |idx: usize| -> Vec<usize> {
        let mut c = Vec::with_capacity(dims);
        let mut rest = idx;
        for _ in 0..dims {
            c.push(rest % n);
            rest /= n;
        }
        c
    };
    let index = |c: &[usize]| -> usize {
        let mut idx = 0;
        for &x in c.iter().rev() {
            idx = idx * n + x;
        }
        idx
    };

    let mut edges = Vec::new();
    for idx in 0..total {
        let c = coords(idx);
        for axis in 0..dims {
            if periodic {
                let mut neighbour = c.clone();
                neighbour[axis] = (c[axis] + 1) % n;
                let nidx = index(&neighbour);
                if nidx != idx {
                    edges.push(UndirectedEdge::new(vertex_at(idx), vertex_at(nidx)));
                }
            } else if c[axis] + 1 < n {
                let mut neighbour = c.clone();
                neighbour[axis] += 1;
                let nidx = index(&neighbour);
                edges.push(UndirectedEdge::new(vertex_at(idx), vertex_at(nidx)));
            }
        }
    }
    Network::new(edges).with_isolated(vertices(total))
}
