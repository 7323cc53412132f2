pub mod astar;
pub mod dijkstra;
mod path;
pub mod traits;

pub use traits::{CostOrder, Expand, ExpandGuided, NaturalOrder, PathNode, SearchConfig};
