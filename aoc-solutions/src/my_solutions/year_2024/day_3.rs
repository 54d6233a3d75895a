use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        pattern
            .captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(a), Some(b)) => {
                    let a = a.as_str().parse().map_err(|_| invalid(a.as_str()))?;
                    let b = b.as_str().parse().map_err(|_| invalid(b.as_str()))?;
                    Ok(Instruction::Mul(a, b))
                }
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect()
    }
}

fn invalid(operand: &str) -> ParseError {
    ParseError::InvalidFormat(format!("bad mul operand {operand:?}"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (sum, _) = shared
            .iter()
            .fold((0u64, true), |(sum, enabled), instruction| match instruction {
                Instruction::Mul(a, b) if enabled => (sum + a * b, enabled),
                Instruction::Mul(..) => (sum, enabled),
                Instruction::Do => (sum, true),
                Instruction::Dont => (sum, false),
            });
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;

    #[test]
    fn test_sample() {
        let part1 = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let part2 = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(solve_sample::<Solver>(part1, 1), "161");
        assert_eq!(solve_sample::<Solver>(part2, 2), "48");
    }

    #[test]
    fn test_operands_limited_to_three_digits() {
        let parsed = Solver::parse("mul(1234,5)mul(123,4)don't()").unwrap();
        assert_eq!(parsed, vec![Instruction::Mul(123, 4), Instruction::Dont]);
    }
}
