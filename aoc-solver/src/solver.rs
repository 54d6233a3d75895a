//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Reports;
///
/// impl AocParser for Reports {
///     type SharedData<'a> = Vec<Vec<i32>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_whitespace()
///                     .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///                     .collect()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Reports::parse("1 2\n3").unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to hand on.
    ///
    /// Owned types are simplest; borrow from the input (`&'a str`) when no
    /// transformation is needed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle
///
/// Parts run in order against the same shared data, so a part may read
/// what an earlier part stored there.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus dispatch by part number
///
/// Usually generated with `#[derive(AocSolver)]`, which routes
/// `solve_part(shared, k)` to `<Self as PartSolver<k>>::solve`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Lists;
///
/// impl AocParser for Lists {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Lists {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<u32>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Lists::parse("3 4 2").unwrap();
/// assert_eq!(Lists::solve_part(&mut shared, 1).unwrap(), "9");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` (1-based). Implementations may assume `part` is in
    /// `1..=PARTS`; use [`SolverExt::solve_part_checked_range`] at call sites
    /// that do not guarantee it.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], rejecting parts outside `1..=PARTS` with
    /// [`SolveError::PartOutOfRange`]
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
