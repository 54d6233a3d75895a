use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

/// Parts 1 and 3 record what they computed; parts 2 and 4 build on it
#[derive(AocSolver)]
#[aoc_solver(max_parts = 4)]
struct Chain;

#[derive(Debug, Default)]
struct Shared {
    words: Vec<String>,
    longest: Option<usize>,
    joined: Option<String>,
}

impl AocParser for Chain {
    type SharedData<'a> = Shared;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<String> = input.split_whitespace().map(str::to_owned).collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(Shared {
            words,
            ..Shared::default()
        })
    }
}

impl PartSolver<1> for Chain {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.words.iter().map(String::len).max().unwrap_or(0);
        shared.longest = Some(longest);
        Ok(longest.to_string())
    }
}

impl PartSolver<2> for Chain {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .longest
            .ok_or_else(|| SolveError::failed("part 1 must run first"))?;
        Ok(shared.words.iter().filter(|w| w.len() == longest).count().to_string())
    }
}

impl PartSolver<3> for Chain {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let joined = shared.words.concat();
        shared.joined = Some(joined.clone());
        Ok(joined)
    }
}

impl PartSolver<4> for Chain {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match &shared.joined {
            Some(joined) => Ok(joined.chars().rev().collect()),
            None => Err(SolveError::PartNotImplemented(4)),
        }
    }
}

#[test]
fn test_parts_declared() {
    assert_eq!(<Chain as Solver>::PARTS, 4);
}

#[test]
fn test_later_parts_see_earlier_results() {
    let mut shared = Chain::parse("ab cde fgh i").unwrap();

    assert_eq!(Chain::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(shared.longest, Some(3));
    assert_eq!(Chain::solve_part(&mut shared, 2).unwrap(), "2");
    assert_eq!(Chain::solve_part(&mut shared, 3).unwrap(), "abcdefghi");
    assert_eq!(Chain::solve_part(&mut shared, 4).unwrap(), "ihgfedcba");
}

#[test]
fn test_dependent_part_fails_alone() {
    let mut shared = Chain::parse("x").unwrap();
    assert!(matches!(
        Chain::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
    assert!(matches!(
        Chain::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}

#[test]
fn test_dispatch_beyond_max_parts() {
    let mut shared = Chain::parse("x").unwrap();
    assert!(matches!(
        Chain::solve_part(&mut shared, 5),
        Err(SolveError::PartOutOfRange(5))
    ));
    assert!(matches!(
        Chain::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_parse_error() {
    assert!(matches!(Chain::parse(" \n "), Err(ParseError::MissingData(_))));
}
