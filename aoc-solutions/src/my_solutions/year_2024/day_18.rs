use std::collections::HashSet;

use aoc_search::UniformCostSearch;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "search"])]
pub struct Solver;

/// The memory space spans `0..=ARENA_MAX` on both axes
const ARENA_MAX: i64 = 70;
const FALLEN: usize = 1024;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pos>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        text::parse_all(text::lines(input), |line| {
            let [x, y] = text::numbers_n::<i64, 2>(line)?;
            if x < 0 || y < 0 {
                anyhow::bail!("negative coordinate");
            }
            Ok(Pos::new(x, y))
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Corrupted cells are `true`
fn arena(arena_max: i64) -> Grid<bool> {
    let side = arena_max as usize + 1;
    Grid::filled(side, side, false)
}

fn corrupt(corrupted: &mut Grid<bool>, byte: Pos) -> Result<(), SolveError> {
    if corrupted.set(byte, true) {
        Ok(())
    } else {
        Err(SolveError::failed(format!(
            "byte {byte} falls outside the memory space"
        )))
    }
}

/// Shortest walk from the top-left to the bottom-right corner; `None` when
/// either corner is corrupted or walled off
fn escape(corrupted: &Grid<bool>) -> Option<(usize, Vec<Pos>)> {
    let start = Pos::new(0, 0);
    let exit = Pos::new(corrupted.width() as i64 - 1, corrupted.height() as i64 - 1);
    if corrupted.get(start) != Some(&false) {
        return None;
    }
    UniformCostSearch::new(
        |&pos: &Pos| {
            corrupted
                .neighbors4(pos)
                .filter(|&next| corrupted.get(next) == Some(&false))
                .map(|next| (next, 1usize))
                .collect::<Vec<_>>()
        },
        |&pos: &Pos| pos == exit,
    )
    .track_path()
    .run(start)
    .map(|found| (found.cost, found.path.unwrap_or_default()))
}

/// Steps to the exit once the first `fallen` bytes have landed
pub fn steps_after(
    bytes: &[Pos],
    arena_max: i64,
    fallen: usize,
) -> Result<Option<usize>, SolveError> {
    let mut corrupted = arena(arena_max);
    for &byte in bytes.iter().take(fallen) {
        corrupt(&mut corrupted, byte)?;
    }
    Ok(escape(&corrupted).map(|(cost, _)| cost))
}

/// The first byte after which the exit cannot be reached.
///
/// A byte that misses the current route cannot change the answer, so the
/// route is only recomputed when a byte lands on it.
pub fn first_blocking(bytes: &[Pos], arena_max: i64) -> Result<Option<Pos>, SolveError> {
    let mut corrupted = arena(arena_max);
    let Some((_, path)) = escape(&corrupted) else {
        return Ok(None);
    };
    let mut route: HashSet<Pos> = path.into_iter().collect();

    for &byte in bytes {
        corrupt(&mut corrupted, byte)?;
        if !route.contains(&byte) {
            continue;
        }
        match escape(&corrupted) {
            Some((_, path)) => route = path.into_iter().collect(),
            None => return Ok(Some(byte)),
        }
    }
    Ok(None)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        steps_after(shared, ARENA_MAX, FALLEN)?
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("exit unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_blocking(shared, ARENA_MAX)?
            .map(|byte| byte.to_string())
            .ok_or_else(|| SolveError::failed("no byte blocks the exit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_sample() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        assert_eq!(steps_after(&bytes, 6, 12).unwrap(), Some(22));
        assert_eq!(first_blocking(&bytes, 6).unwrap(), Some(Pos::new(6, 1)));
    }

    #[test]
    fn test_path_is_walkable() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        let mut corrupted = arena(6);
        for &byte in bytes.iter().take(12) {
            corrupt(&mut corrupted, byte).unwrap();
        }
        let (cost, path) = escape(&corrupted).unwrap();
        assert_eq!(path.len(), cost + 1);
        assert_eq!(path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(path.last(), Some(&Pos::new(6, 6)));
        assert!(path.windows(2).all(|w| w[0].manhattan(w[1]) == 1));
        assert!(path.iter().all(|&p| corrupted.get(p) == Some(&false)));
    }

    #[test]
    fn test_open_arena() {
        assert_eq!(steps_after(&[], 3, 0).unwrap(), Some(6));
        assert_eq!(first_blocking(&[Pos::new(2, 2)], 3).unwrap(), None);
    }

    #[test]
    fn test_byte_outside_arena_rejected() {
        let bytes = [Pos::new(1, 1), Pos::new(7, 0)];
        assert!(steps_after(&bytes, 6, 1).is_ok());
        assert!(steps_after(&bytes, 6, 2).is_err());
        assert!(first_blocking(&bytes, 6).is_err());
        assert!(Solver::parse("1,1\n-1,3").is_err());
    }

    #[test]
    fn test_byte_on_start_blocks() {
        assert_eq!(steps_after(&[Pos::new(0, 0)], 3, 1).unwrap(), None);
        assert_eq!(
            first_blocking(&[Pos::new(2, 2), Pos::new(0, 0)], 3).unwrap(),
            Some(Pos::new(0, 0))
        );
    }
}
