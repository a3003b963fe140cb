//! Submodule collecting the static graph algorithms: topological order,
//! strongly/weakly connected components, and reachability.

pub mod reachability;
pub mod strongly_connected;
pub mod topological_order;
pub mod weakly_connected;

pub use reachability::is_reachable;
pub use strongly_connected::strongly_connected_components;
pub use topological_order::topological_order;
pub use weakly_connected::weakly_connected_components;
