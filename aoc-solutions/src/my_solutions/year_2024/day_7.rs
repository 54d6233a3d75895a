use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["recursion"])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        text::parse_all(text::lines(input), |line| {
            let (target, operands) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("missing ':'"))?;
            let operands = text::numbers(operands)?;
            if operands.is_empty() {
                return Err(anyhow!("no operands"));
            }
            Ok(Equation {
                target: target.trim().parse()?,
                operands,
            })
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Strip `suffix`'s decimal digits from the end of `value`
fn unconcat(value: u64, suffix: u64) -> Option<u64> {
    let mut modulus: u64 = 10;
    while modulus <= suffix {
        // A suffix this wide cannot sit below any other digits of a u64
        modulus = modulus.checked_mul(10)?;
    }
    (value > suffix && value % modulus == suffix).then(|| value / modulus)
}

/// Work backwards from the target, undoing the last operator each step.
/// Operators apply strictly left to right.
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    (target >= last && solvable(target - last, rest, concat))
        || (last != 0 && target % last == 0 && solvable(target / last, rest, concat))
        || (concat && unconcat(target, last).is_some_and(|prefix| solvable(prefix, rest, concat)))
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| solvable(eq.target, &eq.operands, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_sample::<Solver>(SAMPLE, 1), "3749");
        assert_eq!(solve_sample::<Solver>(SAMPLE, 2), "11387");
    }

    #[test]
    fn test_unconcat() {
        assert_eq!(unconcat(156, 6), Some(15));
        assert_eq!(unconcat(1510, 10), Some(15));
        assert_eq!(unconcat(156, 56), Some(1));
        assert_eq!(unconcat(156, 7), None);
        assert_eq!(unconcat(6, 6), None);
        assert_eq!(unconcat(u64::MAX, 10_000_000_000_000_000_000), None);
        assert_eq!(unconcat(u64::MAX, u64::MAX - 1), None);
    }

    fn concat(a: u64, b: u64) -> u64 {
        format!("{a}{b}").parse().unwrap()
    }

    proptest! {
        #[test]
        fn test_any_forward_evaluation_is_solvable(
            operands in proptest::collection::vec(1u64..1000, 1..7),
            ops in proptest::collection::vec(0u8..3, 6),
        ) {
            let target = operands[1..]
                .iter()
                .zip(&ops)
                .fold(operands[0], |acc, (&n, op)| match op {
                    0 => acc + n,
                    1 => acc * n,
                    _ => concat(acc, n),
                });
            prop_assert!(solvable(target, &operands, true));
            if ops[..operands.len() - 1].iter().all(|&op| op < 2) {
                prop_assert!(solvable(target, &operands, false));
            }
        }
    }
}
