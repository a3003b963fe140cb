//! Submodule implementing the temporal adjacency policies: `simple`
//! (infinite linger), `limited_waiting_time` (constant linger), and the
//! stochastic `exponential`/`geometric` policies, whose
//! linger draw is a deterministic function of `(edge identity, seed,
//! vertex)` rather than of RNG call order, so that two runs over the same
//! network and seed agree edge for edge.

use core::hash::{Hash, Hasher};

use num_traits::NumCast;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp, Geometric as GeometricDist};

use crate::traits::{
    adjacency_policy::{LingerTime, TemporalAdjacency},
    edge::TemporalEdge,
    time::Time,
    vertex::Vertex,
};

/// FNV-1a accumulator, used only to derive a per-`(edge, vertex)` RNG seed
/// deterministically. Not a general-purpose hash.
struct SeedHasher(u64);

impl Default for SeedHasher {
    fn default() -> Self {
        SeedHasher(0xcbf2_9ce4_8422_2325)
    }
}

impl Hasher for SeedHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u64::from(b);
            self.0 = self.0.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
}

fn seeded_rng<V: Vertex, E: TemporalEdge<V>>(edge: &E, vertex: &V, seed: u64) -> SmallRng {
    let mut hasher = SeedHasher::default();
    seed.hash(&mut hasher);
    edge.hash(&mut hasher);
    vertex.hash(&mut hasher);
    SmallRng::seed_from_u64(hasher.finish())
}

/// The `simple` policy: an event remains reachable from any earlier event
/// at a shared vertex indefinitely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl<V: Vertex, E: TemporalEdge<V>> TemporalAdjacency<V, E> for Simple {
    fn linger(&self, _edge: &E, _vertex: &V) -> LingerTime<E::Time> {
        LingerTime::Infinite
    }

    fn maximum_linger(&self) -> LingerTime<E::Time> {
        LingerTime::Infinite
    }
}

/// The `limited_waiting_time` policy: a constant linger window `w` after
/// every event ends, the same at every vertex.
#[derive(Debug, Clone, Copy)]
pub struct LimitedWaitingTime<T> {
    window: T,
}

impl<T: Time> LimitedWaitingTime<T> {
    /// Builds a new limited-waiting-time policy with window `window`.
    #[must_use]
    pub fn new(window: T) -> Self {
        Self { window }
    }
}

impl<V, E> TemporalAdjacency<V, E> for LimitedWaitingTime<E::Time>
where
    V: Vertex,
    E: TemporalEdge<V>,
{
    fn linger(&self, _edge: &E, _vertex: &V) -> LingerTime<E::Time> {
        LingerTime::Finite(self.window)
    }

    fn maximum_linger(&self) -> LingerTime<E::Time> {
        LingerTime::Finite(self.window)
    }
}

/// The `exponential` policy: linger times drawn from an exponential
/// distribution with rate `rate`, rounded up to the nearest tick. The
/// distribution's support is unbounded, so [`TemporalAdjacency::maximum_linger`]
/// reports [`LingerTime::Infinite`] rather than a loose finite bound.
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    rate: f64,
    seed: u64,
}

impl Exponential {
    /// Builds a new exponential policy with rate `rate` (events per tick)
    /// and `seed` mixed into every per-`(edge, vertex)` draw.
    #[must_use]
    pub fn new(rate: f64, seed: u64) -> Self {
        Self { rate, seed }
    }
}

impl<V, E> TemporalAdjacency<V, E> for Exponential
where
    V: Vertex,
    E: TemporalEdge<V>,
    E::Time: NumCast,
{
    fn linger(&self, edge: &E, vertex: &V) -> LingerTime<E::Time> {
        let mut rng = seeded_rng(edge, vertex, self.seed);
        let dist: Exp<f64> = Exp::new(self.rate).expect("exponential rate must be positive");
        let draw = dist.sample(&mut rng);
        let ticks =
            <E::Time as NumCast>::from(draw.ceil()).expect("linger draw must fit the time type");
        LingerTime::Finite(ticks)
    }

    fn maximum_linger(&self) -> LingerTime<E::Time> {
        LingerTime::Infinite
    }
}

/// The `geometric` policy: linger times (in whole ticks) drawn from a
/// geometric distribution with per-trial success probability `p`. Like
/// [`Exponential`], the support is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct Geometric {
    success_probability: f64,
    seed: u64,
}

impl Geometric {
    /// Builds a new geometric policy with success probability
    /// `success_probability` and `seed` mixed into every per-`(edge,
    /// vertex)` draw.
    #[must_use]
    pub fn new(success_probability: f64, seed: u64) -> Self {
        Self { success_probability, seed }
    }
}

impl<V, E> TemporalAdjacency<V, E> for Geometric
where
    V: Vertex,
    E: TemporalEdge<V>,
    E::Time: NumCast,
{
    fn linger(&self, edge: &E, vertex: &V) -> LingerTime<E::Time> {
        let mut rng = seeded_rng(edge, vertex, self.seed);
        let dist = GeometricDist::new(self.success_probability)
            .expect("geometric success probability must be in (0, 1]");
        let draw: u64 = dist.sample(&mut rng);
        let ticks = <E::Time as NumCast>::from(draw).expect("linger draw must fit the time type");
        LingerTime::Finite(ticks)
    }

    fn maximum_linger(&self) -> LingerTime<E::Time> {
        LingerTime::Infinite
    }
}
