#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod clusters;
pub mod edges;
pub mod error;
pub mod estimators;
pub mod event_graph;
pub mod generators;
pub mod io;
pub mod network;
pub mod policies;
pub mod reference_models;
pub mod traits;

/// Re-exports the pieces most callers need: the edge kinds, the network
/// container, adjacency policies, and the cluster/event-graph algorithms.
pub mod prelude {
    pub use crate::{
        clusters::*, edges::*, event_graph::ImplicitEventGraph, network::Network,
        policies::*, traits::*,
    };
}
