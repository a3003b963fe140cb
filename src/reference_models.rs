//! Microcanonical reference models (MRRMs): constrained shuffles of a
//! temporal network's edge set used to build null models that preserve a
//! declared hierarchy of structural invariants, from "only the timestamp
//! multiset" up to "the exact per-link inter-event gap multiset".
//!
//! Every shuffle here is bounded to dyadic temporal edges
//! (`E: Relink<V> + Dyadic`): a "link" is the static `(tail, head)` pair an
//! edge projects to, and the stub-rewiring these shuffles do (pairing a
//! tail pool against a head pool) only has a well-defined meaning when
//! every edge has exactly one tail and one head. Hyperedges would need a
//! different rewiring scheme entirely and are out of scope here.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MrrmError;
use crate::network::Network;
use crate::traits::{
    edge::{NetworkEdge, Relink, TemporalEdge},
    marker::Dyadic,
    time::Time,
    vertex::Vertex,
};

fn rebuild<V, E>(tail: V, head: V, time: E::Time) -> E
where
    V: Vertex,
    E: Relink<V>,
{
    E::relink(alloc::vec![tail], alloc::vec![head], time)
}

fn endpoints<V, E>(edge: &E) -> (V, V)
where
    V: Vertex,
    E: NetworkEdge<V> + Dyadic,
{
    let tail = edge.mutator_verts().into_iter().next().expect("dyadic edge has one tail");
    let head = edge.mutated_verts().into_iter().next().expect("dyadic edge has one head");
    (tail, head)
}

fn group_by_time<V, E>(net: &Network<V, E>) -> BTreeMap<E::Time, Vec<(V, V)>>
where
    V: Vertex,
    E: TemporalEdge<V> + Dyadic,
{
    let mut groups: BTreeMap<E::Time, Vec<(V, V)>> = BTreeMap::new();
    for edge in net.edges() {
        groups.entry(edge.cause_time()).or_default().push(endpoints(edge));
    }
    groups
}

/// Groups edges into links (their static `(tail, head)` pair) and the
/// sorted list of cause times each link occurs at.
fn group_by_link<V, E>(net: &Network<V, E>) -> BTreeMap<(V, V), Vec<E::Time>>
where
    V: Vertex,
    E: TemporalEdge<V> + Dyadic,
{
    let mut links: BTreeMap<(V, V), Vec<E::Time>> = BTreeMap::new();
    for edge in net.edges() {
        links.entry(endpoints(edge)).or_default().push(edge.cause_time());
    }
    for times in links.values_mut() {
        times.sort();
    }
    links
}

fn rebuild_network<V, E>(net: &Network<V, E>, edges: Vec<E>) -> Network<V, E>
where
    V: Vertex,
    E: TemporalEdge<V> + Dyadic,
{
    Network::new(edges).with_isolated(net.vertices().iter().cloned())
}

/// Preserves the vertex set and the multiset of timestamps, but nothing
/// about which vertices participate in which event: every edge keeps its
/// own `(tail, head)` pair, and the timestamps are shuffled across the
/// whole edge set.
#[must_use]
pub fn instant_event_shuffling<V, E>(net: &Network<V, E>, rng: &mut impl Rng) -> Network<V, E>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
{
    let mut times: Vec<E::Time> = net.edges().map(NetworkEdge::cause_time).collect();
    times.shuffle(rng);
    let edges: Vec<E> = net
        .edges()
        .zip(times)
        .map(|(e, t)| {
            let (tail, head) = endpoints(e);
            rebuild(tail, head, t)
        })
        .collect();
    rebuild_network(net, edges)
}

/// Preserves the vertex set, timestamp multiset, and degree-per-timestamp
/// sequence: at each distinct time, the tail endpoints of that time's
/// events are shuffled against its head endpoints, so the same vertices
/// participate the same number of times at that instant, just paired up
/// differently.
#[must_use]
pub fn link_shuffling<V, E>(net: &Network<V, E>, rng: &mut impl Rng) -> Network<V, E>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
{
    let groups = group_by_time(net);
    let mut edges = Vec::new();
    for (time, pairs) in groups {
        let mut tails: Vec<V> = pairs.iter().map(|(t, _)| t.clone()).collect();
        let heads: Vec<V> = pairs.into_iter().map(|(_, h)| h).collect();
        tails.shuffle(rng);
        for (tail, head) in tails.into_iter().zip(heads) {
            edges.push(rebuild(tail, head, time));
        }
    }
    rebuild_network(net, edges)
}

/// As [`link_shuffling`], but the stub rewiring at each timestamp only
/// swaps endpoints within the same weakly connected component of the
/// static projection, so that partition is preserved exactly alongside
/// everything [`link_shuffling`] preserves.
#[must_use]
pub fn connected_link_shuffling<V, E>(net: &Network<V, E>, rng: &mut impl Rng) -> Network<V, E>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
{
    let components = crate::traits::algorithms::weakly_connected_components(net);
    let mut component_of: BTreeMap<V, usize> = BTreeMap::new();
    for (idx, component) in components.iter().enumerate() {
        for v in component {
            component_of.insert(v.clone(), idx);
        }
    }

    let groups = group_by_time(net);
    let mut edges = Vec::new();
    for (time, pairs) in groups {
        let mut by_component: BTreeMap<usize, (Vec<V>, Vec<V>)> = BTreeMap::new();
        for (tail, head) in pairs {
            let comp = component_of[&tail];
            let entry = by_component.entry(comp).or_default();
            entry.0.push(tail);
            entry.1.push(head);
        }
        for (mut tails, heads) in by_component.into_values() {
            tails.shuffle(rng);
            for (tail, head) in tails.into_iter().zip(heads) {
                edges.push(rebuild(tail, head, time));
            }
        }
    }
    rebuild_network(net, edges)
}

/// As [`connected_link_shuffling`], but the static projection edge set is
/// kept exactly: no link is created or destroyed, only the timestamp
/// multiset is redistributed across the existing links (preserving each
/// link's presence, though not necessarily its exact event count).
#[must_use]
pub fn topology_constrained_link_shuffling<V, E>(net: &Network<V, E>, rng: &mut impl Rng) -> Network<V, E>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
{
    let links = group_by_link(net);
    let link_keys: Vec<(V, V)> = links.keys().cloned().collect();
    if link_keys.is_empty() {
        return rebuild_network(net, Vec::new());
    }

    let mut all_times: Vec<E::Time> = links.values().flatten().copied().collect();
    all_times.shuffle(rng);

    // Every link keeps at least one event; remaining timestamps are
    // dealt out round-robin to the shuffled link order.
    let mut counts = alloc::vec![1usize; link_keys.len()];
    let mut remaining = all_times.len().saturating_sub(link_keys.len());
    let mut next_link = 0usize;
    while remaining > 0 {
        counts[next_link % link_keys.len()] += 1;
        next_link += 1;
        remaining -= 1;
    }

    let mut edges = Vec::with_capacity(all_times.len());
    let mut cursor = 0usize;
    for (idx, (tail, head)) in link_keys.into_iter().enumerate() {
        for _ in 0..counts[idx] {
            edges.push(rebuild(tail.clone(), head.clone(), all_times[cursor]));
            cursor += 1;
        }
    }
    rebuild_network(net, edges)
}

fn time_window<V, E>(net: &Network<V, E>) -> Result<(E::Time, E::Time), MrrmError>
where
    V: Vertex,
    E: TemporalEdge<V> + Dyadic,
{
    let mut times = net.edges().map(NetworkEdge::cause_time);
    let first = times.next().ok_or(MrrmError::EmptyTimeWindow)?;
    let (min, max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
    Ok((min, max))
}

fn uniform_time<T: Time + num_traits::NumCast>(lo: T, hi: T, rng: &mut impl Rng) -> T {
    let lo_f: f64 = num_traits::cast(lo).expect("time bound must cast to f64");
    let hi_f: f64 = num_traits::cast(hi).expect("time bound must cast to f64");
    let draw = if hi_f > lo_f { rng.gen_range(lo_f..=hi_f) } else { lo_f };
    num_traits::cast(draw.round()).expect("resampled time must fit the time type")
}

/// Preserves the exact static projection and the network's overall time
/// window: each link keeps its original event count, but the timestamps
/// themselves are redrawn uniformly within `[min_time, max_time]`.
pub fn timeline_shuffling<V, E>(
    net: &Network<V, E>,
    rng: &mut impl Rng,
) -> Result<Network<V, E>, MrrmError>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
    E::Time: num_traits::NumCast,
{
    let (lo, hi) = time_window(net)?;
    let links = group_by_link(net);
    let mut edges = Vec::new();
    for ((tail, head), times) in links {
        for _ in times {
            edges.push(rebuild(tail.clone(), head.clone(), uniform_time(lo, hi, rng)));
        }
    }
    Ok(rebuild_network(net, edges))
}

/// As [`timeline_shuffling`], with per-link event count treated as a
/// declared invariant rather than an incidental one: same construction,
/// the count preservation is load-bearing here rather than free.
pub fn weight_constrained_timeline_shuffling<V, E>(
    net: &Network<V, E>,
    rng: &mut impl Rng,
) -> Result<Network<V, E>, MrrmError>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
    E::Time: num_traits::NumCast,
{
    timeline_shuffling(net, rng)
}

/// As [`weight_constrained_timeline_shuffling`], but each link's first and
/// last event time are held fixed; only the interior events (if any) are
/// redrawn, uniformly within `[first, last]`.
pub fn activity_constrained_timeline_shuffling<V, E>(
    net: &Network<V, E>,
    rng: &mut impl Rng,
) -> Result<Network<V, E>, MrrmError>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
    E::Time: num_traits::NumCast,
{
    if net.edge_count() == 0 {
        return Err(MrrmError::EmptyTimeWindow);
    }
    let links = group_by_link(net);
    let mut edges = Vec::new();
    for ((tail, head), times) in links {
        let first = *times.first().expect("link has at least one event");
        let last = *times.last().expect("link has at least one event");
        edges.push(rebuild(tail.clone(), head.clone(), first));
        let interior = times.len().saturating_sub(2);
        for _ in 0..interior {
            edges.push(rebuild(tail.clone(), head.clone(), uniform_time(first, last, rng)));
        }
        if times.len() > 1 {
            edges.push(rebuild(tail.clone(), head.clone(), last));
        }
    }
    Ok(rebuild_network(net, edges))
}

/// As [`activity_constrained_timeline_shuffling`], but each link's
/// interior events are placed by permuting the multiset of inter-event
/// gaps rather than redrawing fresh times, so the gap multiset (not just
/// the endpoints) is preserved exactly.
pub fn inter_event_shuffling<V, E>(
    net: &Network<V, E>,
    rng: &mut impl Rng,
) -> Result<Network<V, E>, MrrmError>
where
    V: Vertex,
    E: Relink<V> + Dyadic,
{
    if net.edge_count() == 0 {
        return Err(MrrmError::EmptyTimeWindow);
    }
    let links = group_by_link(net);
    let mut edges = Vec::new();
    for ((tail, head), times) in links {
        let mut gaps: Vec<E::Time> = times.windows(2).map(|w| w[1] - w[0]).collect();
        gaps.shuffle(rng);

        let mut cursor = times[0];
        edges.push(rebuild(tail.clone(), head.clone(), cursor));
        for gap in gaps {
            cursor = cursor + gap;
            edges.push(rebuild(tail.clone(), head.clone(), cursor));
        }
    }
    Ok(rebuild_network(net, edges))
}
