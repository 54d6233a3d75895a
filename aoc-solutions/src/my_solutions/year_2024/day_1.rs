use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["lists"])]
pub struct Solver;

/// The two location-ID columns, each sorted ascending
#[derive(Debug)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = text::parse_all(text::lines(input), text::numbers_n::<i64, 2>)
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        let (mut left, mut right): (Vec<_>, Vec<_>) =
            pairs.into_iter().map(|[l, r]| (l, r)).unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: i64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &r in &shared.right {
            *counts.entry(r).or_default() += 1;
        }
        let similarity: i64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
