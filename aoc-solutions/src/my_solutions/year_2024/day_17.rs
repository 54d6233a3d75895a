use anyhow::{anyhow, bail};
use aoc_search::PriorityQueue;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["simulation", "search"])]
pub struct Solver;

/// A 3-bit computer: three registers and a program of 3-bit words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

/// `value / 2^power`; powers of 64 and up give zero
fn divide(value: u64, power: u64) -> u64 {
    u32::try_from(power)
        .ok()
        .and_then(|power| value.checked_shr(power))
        .unwrap_or(0)
}

impl Computer {
    fn combo(&self, operand: u8, [a, b, c]: [u64; 3]) -> Result<u64, SolveError> {
        match operand {
            0..=3 => Ok(operand as u64),
            4 => Ok(a),
            5 => Ok(b),
            6 => Ok(c),
            _ => Err(SolveError::failed(format!("invalid combo operand {operand}"))),
        }
    }

    /// Run to completion with register A replaced by `a`
    fn run(&self, a: u64) -> Result<Vec<u8>, SolveError> {
        let mut regs = [a, self.registers[1], self.registers[2]];
        let mut output = Vec::new();
        let mut ip = 0;

        while let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1)) {
            ip += 2;
            match opcode {
                0 => regs[0] = divide(regs[0], self.combo(operand, regs)?),
                1 => regs[1] ^= operand as u64,
                2 => regs[1] = self.combo(operand, regs)? % 8,
                3 if regs[0] != 0 => ip = operand as usize,
                3 => {}
                4 => regs[1] ^= regs[2],
                5 => output.push((self.combo(operand, regs)? % 8) as u8),
                6 => regs[1] = divide(regs[0], self.combo(operand, regs)?),
                7 => regs[2] = divide(regs[0], self.combo(operand, regs)?),
                _ => return Err(SolveError::failed(format!("invalid opcode {opcode}"))),
            }
        }
        Ok(output)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_computer(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_computer(input: &str) -> anyhow::Result<Computer> {
    let sections = text::sections(input);
    let &[registers, program] = sections.as_slice() else {
        bail!("expected registers and program separated by a blank line");
    };
    let registers = text::numbers_n::<u64, 3>(registers)?;
    let program = text::numbers::<u8>(program)?;
    if let Some(word) = program.iter().find(|&&word| word > 7) {
        return Err(anyhow!("program word {word} is not 3-bit"));
    }
    Ok(Computer { registers, program })
}

/// Smallest A for which the program prints itself.
///
/// Assumes the program consumes A three bits per output, so the last output
/// depends only on the highest octal digit of A. Candidates are extended one
/// octal digit at a time and kept while their output matches the matching
/// suffix of the program; a min-first queue keyed by A pops the smallest
/// complete candidate first.
fn find_quine(computer: &Computer) -> Result<Option<u64>, SolveError> {
    let program = &computer.program;
    let mut candidates = PriorityQueue::min_first();
    candidates.push(0usize, 0u64);

    while let Some((matched, a)) = candidates.pop() {
        if matched == program.len() {
            return Ok(Some(a));
        }
        let suffix = &program[program.len() - matched - 1..];
        for digit in 0..8 {
            let Some(next) = a.checked_mul(8).map(|a| a + digit) else {
                continue;
            };
            if computer.run(next)? == suffix {
                candidates.push(matched + 1, next);
            }
        }
    }
    Ok(None)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let output = shared.run(shared.registers[0])?;
        Ok(output.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_quine(shared)?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::failed("no value of A reproduces the program"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;

    fn computer(a: u64, b: u64, c: u64, program: &[u8]) -> Computer {
        Computer {
            registers: [a, b, c],
            program: program.to_vec(),
        }
    }

    #[test]
    fn test_sample() {
        let sample = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";
        assert_eq!(solve_sample::<Solver>(sample, 1), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn test_quine_sample() {
        let sample = "\
Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";
        assert_eq!(solve_sample::<Solver>(sample, 2), "117440");
    }

    #[test]
    fn test_small_programs() {
        assert_eq!(
            computer(10, 0, 0, &[5, 0, 5, 1, 5, 4]).run(10).unwrap(),
            vec![0, 1, 2]
        );
        assert_eq!(
            computer(2024, 0, 0, &[0, 1, 5, 4, 3, 0]).run(2024).unwrap(),
            vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]
        );
        // bxl 7 then bxc: B = 29 ^ 7 ^ 43690
        let c = computer(0, 29, 43690, &[1, 7, 4, 0, 5, 5]);
        assert_eq!(c.run(0).unwrap(), vec![((29 ^ 7 ^ 43690) % 8) as u8]);
    }

    #[test]
    fn test_invalid_combo_operand() {
        let c = computer(1, 0, 0, &[5, 7]);
        assert!(c.run(1).is_err());
        assert!(Solver::parse("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 9").is_err());
    }
}
