//! Uniform-cost search that keeps every cheapest path

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::cost::Cost;
use crate::queue::PriorityQueue;

/// Every cheapest route from a start state to the goal set
///
/// Holds the optimal cost, each goal state reached at that cost and, for
/// every state discovered during the search, all predecessors through which
/// it can be reached at its best cost.
#[derive(Debug, Clone)]
pub struct CheapestPaths<T, C> {
    cost: C,
    start: T,
    goals: Vec<T>,
    predecessors: HashMap<T, Vec<T>>,
}

impl<T, C> CheapestPaths<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy,
{
    /// The optimal cost shared by all returned paths
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Goal states reached at the optimal cost, in the order they were popped
    pub fn goals(&self) -> &[T] {
        &self.goals
    }

    /// Every state lying on at least one cheapest path, start and goals
    /// included
    pub fn states(&self) -> HashSet<T> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&T> = self.goals.iter().collect();
        while let Some(state) = stack.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            if let Some(previous) = self.predecessors.get(state) {
                stack.extend(previous);
            }
        }
        seen
    }

    /// Enumerate each cheapest path from start to goal.
    ///
    /// The number of paths can grow exponentially with the number of ties;
    /// prefer [`states`](Self::states) when only membership matters.
    pub fn paths(&self) -> Vec<Vec<T>> {
        let mut paths = Vec::new();
        // Walk backwards from each goal; every stack entry is a reversed
        // partial path.
        let mut stack: Vec<Vec<T>> = self.goals.iter().map(|g| vec![g.clone()]).collect();
        while let Some(partial) = stack.pop() {
            let Some(head) = partial.last() else {
                continue;
            };
            if *head == self.start {
                let mut path = partial;
                path.reverse();
                paths.push(path);
                continue;
            }
            for previous in self.predecessors.get(head).into_iter().flatten() {
                // Zero-cost cycles can produce ties that loop back on the path
                if partial.contains(previous) {
                    continue;
                }
                let mut extended = partial.clone();
                extended.push(previous.clone());
                stack.push(extended);
            }
        }
        paths
    }
}

/// Find the optimal cost from `start` to any goal state and keep every route
/// achieving it
///
/// The frontier is min-first. Neighbors are relaxed on strict improvement
/// (replacing their predecessor list) and gain an extra predecessor on ties.
/// Once the first goal is popped its cost bounds the search; it stops as soon
/// as a costlier entry surfaces. Returns `None` when no goal is reachable.
///
/// # Example
///
/// ```
/// use aoc_search::all_cheapest_paths;
///
/// // A diamond: two equally cheap routes from 0 to 3, one expensive shortcut.
/// let edges = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (0, 3, 5)];
/// let found = all_cheapest_paths(
///     0,
///     |n: &u8| edges.iter().filter(|e| e.0 == *n).map(|e| (e.1, e.2)).collect::<Vec<_>>(),
///     |n: &u8| *n == 3,
/// )
/// .unwrap();
///
/// assert_eq!(found.cost(), 2u32);
/// assert_eq!(found.states().len(), 4);
/// assert_eq!(found.paths().len(), 2);
/// ```
pub fn all_cheapest_paths<T, C, E, I, G>(start: T, expand: E, is_goal: G) -> Option<CheapestPaths<T, C>>
where
    T: Clone + Eq + Hash,
    C: Cost,
    E: Fn(&T) -> I,
    I: IntoIterator<Item = (T, C)>,
    G: Fn(&T) -> bool,
{
    let mut frontier = PriorityQueue::min_first();
    let mut best: HashMap<T, C> = HashMap::new();
    let mut predecessors: HashMap<T, Vec<T>> = HashMap::new();
    let mut goals = Vec::new();
    let mut bound: Option<C> = None;

    best.insert(start.clone(), C::zero());
    frontier.push(start.clone(), C::zero());

    while let Some((state, cost)) = frontier.pop() {
        if bound.is_some_and(|limit| cost > limit) {
            break;
        }
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        if is_goal(&state) {
            bound = Some(cost);
            goals.push(state);
            continue;
        }

        for (next, step) in expand(&state) {
            debug_assert!(step >= C::zero(), "negative step cost {step:?}");
            let candidate = cost + step;
            match best.get(&next) {
                Some(&known) if candidate > known => {}
                Some(&known) if candidate == known => {
                    predecessors.entry(next).or_default().push(state.clone());
                }
                _ => {
                    best.insert(next.clone(), candidate);
                    predecessors.insert(next.clone(), vec![state.clone()]);
                    frontier.push(next, candidate);
                }
            }
        }
    }

    let cost = bound?;
    Some(CheapestPaths {
        cost,
        start,
        goals,
        predecessors,
    })
}
