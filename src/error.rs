//! Submodule defining the error taxonomy surfaced across the crate boundary.

use alloc::string::String;

/// Errors produced by [`crate::traits::algorithms::topological_order`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologicalOrderError {
    /// The graph contains a cycle, so no topological order exists.
    #[error("graph is not acyclic: no topological order exists")]
    NotAcyclic,
}

/// Errors produced while constructing random graphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The requested vertex space is too small to represent the generated
    /// graph (e.g. a vertex index type too narrow for `n`).
    #[error("vertex type cannot represent a graph of the requested size")]
    VertexTypeTooSmall,
    /// An argument to the generator is infeasible.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable explanation of why the argument is rejected.
        reason: String,
    },
}

/// Errors produced while parsing or writing the text edgelist format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IoError {
    /// A line could not be parsed under the expected field layout for the
    /// edge kind being read.
    #[error("malformed edgelist line {line}: {reason}")]
    Malformed {
        /// 1-indexed line number (comments and blank lines still count).
        line: usize,
        /// Human-readable explanation of the parse failure.
        reason: String,
    },
}

/// Errors produced by microcanonical reference model shufflers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MrrmError {
    /// The shuffle was asked to preserve a time window on an empty network.
    #[error("cannot compute a time window for an empty temporal network")]
    EmptyTimeWindow,
}

/// The union of every error kind this crate can surface at its public
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// See [`TopologicalOrderError`].
    #[error(transparent)]
    TopologicalOrder(#[from] TopologicalOrderError),
    /// See [`GeneratorError`].
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// See [`IoError`].
    #[error(transparent)]
    Io(#[from] IoError),
    /// See [`MrrmError`].
    #[error(transparent)]
    Mrrm(#[from] MrrmError),
}
