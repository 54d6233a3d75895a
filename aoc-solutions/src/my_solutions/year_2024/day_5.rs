use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct PrintQueue {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = PrintQueue;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sections = text::sections(input);
        let &[rules, updates] = sections.as_slice() else {
            return Err(ParseError::MissingData(format!(
                "expected rules and updates sections, found {} sections",
                sections.len()
            )));
        };

        let rules = text::parse_all(text::lines(rules), |line| -> anyhow::Result<(u32, u32)> {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("rule without '|'"))?;
            Ok((before.trim().parse()?, after.trim().parse()?))
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let updates = text::parse_all(text::lines(updates), text::numbers::<u32>)
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        Ok(PrintQueue {
            rules: rules.into_iter().collect(),
            updates,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|update| !shared.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| shared.compare(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}
