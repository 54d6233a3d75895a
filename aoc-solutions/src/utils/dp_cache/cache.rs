//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// Memoization table that resolves dependencies on demand
///
/// Each value is computed at most once. Dependencies are resolved with an
/// explicit stack rather than recursion, so deep chains (long suffixes, many
/// blinks) cannot overflow the call stack.
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
///
/// // Binomial coefficients via Pascal's rule
/// let cache = DpCache::new(
///     HashMapBackend::new(),
///     |&(n, k): &(u32, u32)| {
///         if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
///     },
///     |_: &(u32, u32), deps: Vec<u64>| deps.iter().sum::<u64>().max(1),
/// );
///
/// assert_eq!(cache.get(&(10, 3)), Some(120));
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

/// Pending work: an index, and its dependency list once expanded
type Frame<I> = (I, Option<Vec<I>>);

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + PartialEq,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and any missing dependencies first.
    ///
    /// Returns `None` if `index` (transitively) depends on itself.
    pub fn get(&self, index: &I) -> Option<K> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Some(value.clone());
        }

        // Expanded frames on the stack always form the current dependency
        // chain, so meeting one of them again means a cycle.
        let mut stack: Vec<Frame<I>> = vec![(index.clone(), None)];
        while let Some((current, deps)) = stack.pop() {
            match deps {
                None => {
                    if self.backend.borrow().get(&current).is_some() {
                        continue;
                    }
                    let deps = self.problem.deps(&current);
                    let missing: Vec<I> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .filter(|dep| backend.get(dep).is_none())
                            .cloned()
                            .collect()
                    };
                    let in_chain = |dep: &I| {
                        *dep == current
                            || stack
                                .iter()
                                .any(|(idx, expanded)| expanded.is_some() && idx == dep)
                    };
                    if missing.iter().any(in_chain) {
                        return None;
                    }
                    stack.push((current, Some(deps)));
                    stack.extend(missing.into_iter().map(|dep| (dep, None)));
                }
                Some(deps) => {
                    let values: Vec<K> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .map(|dep| backend.get(dep).cloned())
                            .collect::<Option<_>>()?
                    };
                    let value = self.problem.compute(&current, values);
                    self.backend.borrow_mut().insert(current, value);
                }
            }
        }

        self.backend.borrow().get(index).cloned()
    }

    /// Number of values computed so far
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone + PartialEq,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Build a cache from a dependency closure and a compute closure
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
