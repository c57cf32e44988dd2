//! The station graph and the search-state set built on top of it.

mod graph;
mod unvisited;

pub use graph::{Graph, Station};
pub use unvisited::UnvisitedSet;
