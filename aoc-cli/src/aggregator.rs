//! Re-ordering of solver results that arrive out of order
//!
//! Workers finish in any order; output must follow (year, day, part). Two
//! min-heaps do the bookkeeping:
//! - keys still expected, smallest first
//! - results received early, held until their key comes up

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Output position of a result, ordered ascending by year then day then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Min-heap adapter for `SolverResult`
struct Held(SolverResult);

impl Ord for Held {
    fn cmp(&self, other: &Self) -> Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for Held {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Held {}

impl PartialEq for Held {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    held: BinaryHeap<Held>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            held: BinaryHeap::new(),
        }
    }

    /// Accept a result and return every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.held.push(Held(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.expected.peek(), self.held.peek()) {
            if ResultKey::from(&top.0) != *next {
                break;
            }
            self.expected.pop();
            if let Some(Held(result)) = self.held.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still held, in order; used once the channel closes
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.held.drain().map(|h| h.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> ResultKey {
        ResultKey {
            year: 2024,
            day,
            part,
        }
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            year: 2024,
            day,
            part,
            answer: Ok(format!("{day}.{part}")),
            parse_duration: Some(TimeDelta::milliseconds(2)),
            solve_duration: TimeDelta::milliseconds(7),
        }
    }

    fn order(results: &[SolverResult]) -> Vec<(u8, u8)> {
        results.iter().map(|r| (r.day, r.part)).collect()
    }

    #[test]
    fn test_in_order_results_pass_straight_through() {
        let mut agg = ResultAggregator::new([key(1, 1), key(1, 2)]);

        assert_eq!(order(&agg.add(make_result(1, 1))), vec![(1, 1)]);
        assert_eq!(order(&agg.add(make_result(1, 2))), vec![(1, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_early_results_are_held() {
        let mut agg = ResultAggregator::new([key(16, 1), key(16, 2), key(17, 1)]);

        assert!(agg.add(make_result(16, 2)).is_empty());
        assert!(agg.add(make_result(17, 1)).is_empty());

        let ready = agg.add(make_result(16, 1));
        assert_eq!(order(&ready), vec![(16, 1), (16, 2), (17, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_returns_stragglers() {
        let mut agg = ResultAggregator::new([key(3, 1), key(3, 2), key(4, 1)]);
        agg.add(make_result(4, 1));
        agg.add(make_result(3, 2));

        assert_eq!(order(&agg.drain()), vec![(3, 2), (4, 1)]);
        assert!(!agg.is_complete());
    }

    proptest! {
        #[test]
        fn test_any_arrival_order_is_emitted_sorted(
            keys in proptest::collection::btree_set((1u8..=25, 1u8..=2), 1..30)
                .prop_map(|s| s.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.iter().map(|&(d, p)| key(d, p)));
            let mut emitted = Vec::new();
            for &(day, part) in &keys {
                emitted.extend(order(&agg.add(make_result(day, part))));
            }

            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
