//! Submodule defining the cardinality estimator capability shared by the
//! exact (hash-set backed) and sketch (HyperLogLog backed) cluster
//! representations.

/// Capability for a structure that can accumulate items and report (exactly
/// or approximately) how many distinct items it has seen.
///
/// The exact and sketch cluster variants present the same interface;
/// algorithms that only need "some cardinality estimator" are written
/// generically over this trait so the exact and sketch paths share code.
pub trait CardinalityEstimator<T>: Clone {
    /// Inserts `item`, a no-op if it was already present (exact) or
    /// probabilistically absorbed (sketch).
    fn insert(&mut self, item: &T);

    /// Merges `other` into `self` in place.
    fn merge(&mut self, other: &Self);

    /// Returns the (exact or estimated) number of distinct items inserted.
    fn estimate(&self) -> f64;
}
