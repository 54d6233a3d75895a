//! Memoization for dynamic programming over a dependency DAG
//!
//! A problem names, for every index, the indices it depends on and how to
//! combine their values. [`DpCache`] resolves the dependencies lazily and
//! stores each value exactly once in a [`Backend`]:
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: any `Hash + Eq` index
//!
//! # Example: trait-based
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Lattice paths from the origin to `(r, c)`
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
//!         match (r, c) {
//!             (0, _) | (_, 0) => vec![],
//!             _ => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), Some(70));
//! ```
//!
//! # Example: closure-based
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
//!
//! let fib = DpCache::new(
//!     VecBackend::new(),
//!     |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
//!     |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
//! );
//!
//! assert_eq!(fib.get(&90), Some(2880067194370816120));
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};
