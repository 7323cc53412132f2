//! lazysp - shortest-path search over implicit, lazily expanded state graphs
//!
//! This library answers three query shapes over a graph that is never stored
//! anywhere: the minimal traversal cost between two states, the minimal-cost
//! path between two states, and the minimal cost and predecessor of every
//! state reachable from a start state. The graph is defined entirely by a
//! caller-supplied expansion function that produces the neighbors of a state
//! on demand, so the state space may be unbounded.
//!
//! Two strategies share one architecture: uninformed best-first search in
//! [`algorithm::dijkstra`] and heuristic-guided best-first search in
//! [`algorithm::astar`]. Both assume non-negative, additive costs; violating
//! that assumption has undefined behavior.

pub mod algorithm;
pub mod data_structures;

pub use algorithm::astar;
pub use algorithm::dijkstra;
pub use algorithm::{CostOrder, Expand, ExpandGuided, NaturalOrder, PathNode, SearchConfig};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frontier was exhausted before any state satisfied the goal. This
    /// is how the engine reports an unreachable target, not a crash.
    #[error("map exhausted without reaching the target state")]
    NoPathToTarget,

    /// The predecessor chain walked during path reconstruction did not
    /// terminate at the start state. Unreachable given a correct ledger.
    #[error("predecessor chain from the goal does not terminate at the start state")]
    DisconnectedLedger,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
