//! Generalized best-first search algorithms over state spaces.
//!
//! To use these search algorithms, implement the trait [Problem],
//! then hand it to [ucs()] or [astar()]. Both return a [SearchReport]
//! with the cheapest path to a goal, if there is one.

pub mod algorithm;
mod errors;
pub mod frontier;
pub mod node;
mod report;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use report::{SearchReport, Solution};
pub use traits::Cost;
pub use traits::Problem;

pub use algorithm::astar;
pub use algorithm::astar::{astar, astar_with};
pub use algorithm::cache::{BestCost, Explored, ExploredSet};
pub use algorithm::ucs;
pub use algorithm::ucs::ucs;
pub use algorithm::SearchOptions;
pub use frontier::PriorityFrontier;
pub use node::SearchNode;
