//! Priority queue and uniform-cost search over implicit graphs
//!
//! The puzzles in `aoc-solutions` that need shortest paths describe their
//! graph with two closures (neighbors with step costs, and a goal test) and
//! hand them to one of the searches here:
//!
//! - [`UniformCostSearch`]: cheapest cost to the first goal, optionally with
//!   the path that achieves it.
//! - [`all_cheapest_paths`]: cheapest cost plus every route that achieves it.
//!
//! Both are built on [`PriorityQueue`], a binary heap that pops either the
//! smallest or the largest priority first and breaks ties by insertion order.

mod all_paths;
mod cost;
mod queue;
mod uniform_cost;

pub use all_paths::{CheapestPaths, all_cheapest_paths};
pub use cost::Cost;
pub use queue::{HeapOrder, PriorityItem, PriorityQueue};
pub use uniform_cost::{SearchResult, UniformCostSearch};
