//! Single-path uniform-cost search

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::cost::Cost;
use crate::queue::{HeapOrder, PriorityQueue};

/// A goal reached by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T, C> {
    /// Minimum accumulated cost from the start to `goal`
    pub cost: C,
    /// The goal state that was reached
    pub goal: T,
    /// Start-to-goal states, both ends included. Only filled in when the
    /// search was built with [`UniformCostSearch::track_path`].
    pub path: Option<Vec<T>>,
}

/// Best-first search over an implicit graph, ordered by accumulated cost
///
/// The graph is described by two closures: `expand` maps a state to its
/// neighbors and the cost of stepping to each of them, `is_goal` recognises
/// a target state. Every call to [`run`](Self::run) owns its own frontier,
/// cost map and predecessor map, so one search value can be reused (and
/// shared between threads if the closures allow it).
///
/// Step costs must be non-negative. The reachable state space must be finite
/// for the search to terminate when no goal is reachable.
///
/// # Example
///
/// ```
/// use aoc_search::UniformCostSearch;
///
/// // Walk along the number line; +1 costs 1, +5 costs 3.
/// let search = UniformCostSearch::new(
///     |&n: &u32| if n < 20 { vec![(n + 1, 1u32), (n + 5, 3)] } else { vec![] },
///     |&n: &u32| n == 12,
/// )
/// .track_path();
///
/// let found = search.run(0).unwrap();
/// assert_eq!(found.cost, 8); // two +5 steps and two +1 steps
/// let path = found.path.unwrap();
/// assert_eq!((path.len(), path[0], path[4]), (5, 0, 12));
///
/// assert!(UniformCostSearch::new(|_: &u32| Vec::<(u32, u32)>::new(), |&n: &u32| n == 1)
///     .run(0)
///     .is_none());
/// ```
#[derive(Debug, Clone)]
pub struct UniformCostSearch<E, G> {
    expand: E,
    is_goal: G,
    order: HeapOrder,
    track_path: bool,
}

impl<E, G> UniformCostSearch<E, G> {
    /// Create a min-first search that reports only the cost
    pub fn new(expand: E, is_goal: G) -> Self {
        Self {
            expand,
            is_goal,
            order: HeapOrder::MinFirst,
            track_path: false,
        }
    }

    /// Select the frontier order.
    ///
    /// [`HeapOrder::MaxFirst`] turns the run into a label-correcting search:
    /// nothing is settled on pop, goals do not end the run, and the cheapest
    /// goal seen is returned once the frontier is empty. The result is still
    /// the minimum cost, but every reachable state is explored.
    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// Record predecessors so that the result carries the full path
    pub fn track_path(mut self) -> Self {
        self.track_path = true;
        self
    }

    /// Search from `start`; `None` means no goal is reachable
    pub fn run<T, C, I>(&self, start: T) -> Option<SearchResult<T, C>>
    where
        T: Clone + Eq + Hash,
        C: Cost,
        E: Fn(&T) -> I,
        I: IntoIterator<Item = (T, C)>,
        G: Fn(&T) -> bool,
    {
        let mut run = Run {
            frontier: PriorityQueue::new(self.order),
            cost_so_far: HashMap::new(),
            came_from: HashMap::new(),
            track_path: self.track_path,
        };
        run.cost_so_far.insert(start.clone(), C::zero());
        run.frontier.push(start, C::zero());

        let (goal, cost) = match self.order {
            HeapOrder::MinFirst => self.settle_until_goal(&mut run)?,
            HeapOrder::MaxFirst => self.exhaust(&mut run)?,
        };

        let path = self.track_path.then(|| run.reconstruct(&goal));
        Some(SearchResult { cost, goal, path })
    }

    fn settle_until_goal<T, C, I>(&self, run: &mut Run<T, C>) -> Option<(T, C)>
    where
        T: Clone + Eq + Hash,
        C: Cost,
        E: Fn(&T) -> I,
        I: IntoIterator<Item = (T, C)>,
        G: Fn(&T) -> bool,
    {
        let mut settled = HashSet::new();

        while let Some((state, cost)) = run.frontier.pop() {
            if run.is_stale(&state, cost) || !settled.insert(state.clone()) {
                continue;
            }
            if (self.is_goal)(&state) {
                return Some((state, cost));
            }
            run.relax_neighbors(&state, cost, &self.expand);
        }
        None
    }

    fn exhaust<T, C, I>(&self, run: &mut Run<T, C>) -> Option<(T, C)>
    where
        T: Clone + Eq + Hash,
        C: Cost,
        E: Fn(&T) -> I,
        I: IntoIterator<Item = (T, C)>,
        G: Fn(&T) -> bool,
    {
        let mut best: Option<(T, C)> = None;

        while let Some((state, cost)) = run.frontier.pop() {
            if run.is_stale(&state, cost) {
                continue;
            }
            if (self.is_goal)(&state) {
                if best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
                    best = Some((state, cost));
                }
                continue;
            }
            run.relax_neighbors(&state, cost, &self.expand);
        }
        best
    }
}

/// Per-call search state
struct Run<T, C> {
    frontier: PriorityQueue<T, C>,
    cost_so_far: HashMap<T, C>,
    came_from: HashMap<T, T>,
    track_path: bool,
}

impl<T, C> Run<T, C>
where
    T: Clone + Eq + Hash,
    C: Cost,
{
    /// A popped entry is stale once a cheaper route to its state was recorded
    fn is_stale(&self, state: &T, cost: C) -> bool {
        self.cost_so_far
            .get(state)
            .is_some_and(|&known| cost > known)
    }

    fn relax_neighbors<E, I>(&mut self, state: &T, cost: C, expand: &E)
    where
        E: Fn(&T) -> I,
        I: IntoIterator<Item = (T, C)>,
    {
        for (next, step) in expand(state) {
            debug_assert!(step >= C::zero(), "negative step cost {step:?}");
            let candidate = cost + step;
            if self
                .cost_so_far
                .get(&next)
                .is_some_and(|&known| known <= candidate)
            {
                continue;
            }
            self.cost_so_far.insert(next.clone(), candidate);
            if self.track_path {
                self.came_from.insert(next.clone(), state.clone());
            }
            self.frontier.push(next, candidate);
        }
    }

    fn reconstruct(&self, goal: &T) -> Vec<T> {
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(previous) = self.came_from.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed weighted graph given as an adjacency list
    fn graph(edges: &[(u8, u8, u32)]) -> impl Fn(&u8) -> Vec<(u8, u32)> + '_ {
        move |node: &u8| {
            edges
                .iter()
                .filter(|(from, _, _)| from == node)
                .map(|&(_, to, cost)| (to, cost))
                .collect()
        }
    }

    #[test]
    fn test_prefers_cheaper_longer_route() {
        let edges = [(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 1)
            .track_path()
            .run(0)
            .unwrap();

        assert_eq!(found.cost, 3);
        assert_eq!(found.goal, 1);
        assert_eq!(found.path, Some(vec![0, 2, 3, 1]));
    }

    #[test]
    fn test_start_is_goal() {
        let edges = [(0, 1, 1)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 0)
            .track_path()
            .run(0)
            .unwrap();

        assert_eq!(found.cost, 0);
        assert_eq!(found.path, Some(vec![0]));
    }

    #[test]
    fn test_unreachable_goal_is_none() {
        let edges = [(0, 1, 1), (1, 0, 1), (2, 3, 1)];
        let search = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 3);
        assert!(search.run(0).is_none());
        assert!(search.order(HeapOrder::MaxFirst).run(0).is_none());
    }

    #[test]
    fn test_zero_cost_path_is_found_not_confused_with_absence() {
        let edges = [(0, 1, 0), (1, 2, 0)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 2)
            .run(0)
            .unwrap();
        assert_eq!(found.cost, 0);
        assert_eq!(found.path, None);
    }

    #[test]
    fn test_max_first_still_returns_minimum() {
        // Max-first pops the expensive direct edge to the goal first.
        let edges = [(0, 9, 100), (0, 1, 1), (1, 2, 1), (2, 9, 1)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 9)
            .order(HeapOrder::MaxFirst)
            .track_path()
            .run(0)
            .unwrap();

        assert_eq!(found.cost, 3);
        assert_eq!(found.path, Some(vec![0, 1, 2, 9]));
    }

    #[test]
    fn test_cycles_terminate() {
        let edges = [(0, 1, 1), (1, 0, 1), (1, 2, 5), (2, 1, 1), (2, 3, 2)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n == 3)
            .run(0)
            .unwrap();
        assert_eq!(found.cost, 8);
    }

    #[test]
    fn test_first_of_several_goals() {
        let edges = [(0, 1, 4), (0, 2, 2)];
        let found = UniformCostSearch::new(graph(&edges), |&n: &u8| n > 0)
            .run(0)
            .unwrap();
        assert_eq!((found.goal, found.cost), (2, 2));
    }
}
