use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["lists"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        text::parse_all(text::lines(input), text::numbers::<i32>)
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Strictly monotone with every step between 1 and 3
fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
    let mut direction = 0;
    for (a, b) in levels.tuple_windows() {
        let step = b - a;
        if !(1..=3).contains(&step.abs()) {
            return false;
        }
        if direction == 0 {
            direction = step.signum();
        } else if step.signum() != direction {
            return false;
        }
    }
    true
}

fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &level)| level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}
