use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct Solver;

/// Number of stones one engraved stone turns into after some blinks.
///
/// `None` when an engraving or a count no longer fits in a `u64`.
pub struct Blink;

/// `(engraving, blinks remaining)`
type Stone = (u64, u8);

fn split_digits(n: u64) -> Option<(u64, u64)> {
    let digits = n.checked_ilog10()? + 1;
    (digits % 2 == 0).then(|| {
        let half = 10u64.pow(digits / 2);
        (n / half, n % half)
    })
}

impl DpProblem<Stone, Option<u64>> for Blink {
    /// An overflowing engraving has no dependencies
    fn deps(&self, &(stone, blinks): &Stone) -> Vec<Stone> {
        if blinks == 0 {
            return vec![];
        }
        let next = blinks - 1;
        if stone == 0 {
            vec![(1, next)]
        } else if let Some((left, right)) = split_digits(stone) {
            vec![(left, next), (right, next)]
        } else {
            stone
                .checked_mul(2024)
                .map(|engraving| vec![(engraving, next)])
                .unwrap_or_default()
        }
    }

    fn compute(&self, &(_, blinks): &Stone, deps: Vec<Option<u64>>) -> Option<u64> {
        if blinks == 0 {
            return Some(1);
        }
        if deps.is_empty() {
            return None;
        }
        deps.into_iter()
            .try_fold(0u64, |total, count| total.checked_add(count?))
    }
}

pub struct Stones {
    engravings: Vec<u64>,
    /// Shared by both parts; 25-blink counts are reused by the 75-blink run
    counts: DpCache<Stone, Option<u64>, HashMapBackend<Stone, Option<u64>>, Blink>,
}

impl Stones {
    fn count_after(&self, blinks: u8) -> Result<u64, SolveError> {
        self.engravings.iter().try_fold(0u64, |total, &stone| {
            let count = self
                .counts
                .get(&(stone, blinks))
                .ok_or_else(|| SolveError::failed(format!("stone {stone} depends on itself")))?
                .ok_or_else(|| {
                    SolveError::failed(format!("stone {stone} outgrows u64 within {blinks} blinks"))
                })?;
            total
                .checked_add(count)
                .ok_or_else(|| SolveError::failed("stone count overflows u64"))
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Stones;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let engravings: Vec<u64> =
            text::numbers(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if engravings.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(Stones {
            engravings,
            counts: DpCache::with_problem(HashMapBackend::new(), Blink),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_after(25)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_after(75)?.to_string())
    }
}
