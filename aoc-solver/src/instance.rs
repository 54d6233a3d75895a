//! Parsed solver instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// An answer together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Shared data for one puzzle input, ready to solve parts against
///
/// Parsing happens once, in [`SolverInstance::new`], and is timed.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`SolverInstance`]
///
/// The registry hands these out so callers can drive any day's solver
/// without knowing its concrete type.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}-{:02} part {part}: {} ({})", solver.year(), solver.day(), result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call. Parts outside `1..=parts()` fail with
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Part 1 counts words and leaves the count for part 2
    struct WordCount;

    impl crate::AocParser for WordCount {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl Solver for WordCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => {
                    shared.1 = Some(shared.0.len());
                    Ok(shared.0.len().to_string())
                }
                _ => shared
                    .1
                    .map(|n| (n * 2).to_string())
                    .ok_or_else(|| SolveError::failed("part 1 has not run")),
            }
        }
    }

    #[test]
    fn test_parts_share_data() {
        let mut instance = SolverInstance::<WordCount>::new(2024, 1, "a b c").unwrap();
        assert_eq!(instance.parts(), 2);
        assert_eq!((instance.year(), instance.day()), (2024, 1));
        assert_eq!(instance.solve(1).unwrap().answer, "3");
        assert_eq!(instance.solve(2).unwrap().answer, "6");
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_part_out_of_range() {
        let mut instance = SolverInstance::<WordCount>::new(2024, 1, "a").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_error_is_returned() {
        assert!(matches!(
            SolverInstance::<WordCount>::new(2024, 1, "  \n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
