use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Lab {
    grid: Grid<u8>,
    start: Pos,
    /// Tiles of the unobstructed patrol, filled in by whichever part runs first
    route: Option<Vec<Pos>>,
}

#[derive(Debug, PartialEq, Eq)]
enum Patrol {
    /// Distinct tiles in the order they were first entered
    Exits(Vec<Pos>),
    Loops,
}

fn patrol(grid: &Grid<u8>, start: Pos, obstruction: Option<Pos>) -> Patrol {
    // One bit per facing
    let mut seen: Grid<u8> = grid.map(|_| 0);
    let mut tiles = Vec::new();
    let (mut pos, mut dir) = (start, Dir::North);

    loop {
        let Some(mask) = seen.get_mut(pos) else {
            return Patrol::Exits(tiles);
        };
        let bit = 1 << dir as u8;
        if *mask & bit != 0 {
            return Patrol::Loops;
        }
        if *mask == 0 {
            tiles.push(pos);
        }
        *mask |= bit;

        let next = pos + dir.delta();
        match grid.get(next) {
            None => return Patrol::Exits(tiles),
            Some(b'#') => dir = dir.turn_right(),
            Some(_) if Some(next) == obstruction => dir = dir.turn_right(),
            Some(_) => pos = next,
        }
    }
}

fn route(lab: &mut Lab) -> Result<&[Pos], SolveError> {
    if lab.route.is_none() {
        match patrol(&lab.grid, lab.start, None) {
            Patrol::Exits(tiles) => lab.route = Some(tiles),
            Patrol::Loops => return Err(SolveError::failed("the guard never leaves the lab")),
        }
    }
    Ok(lab.route.as_deref().unwrap_or_default())
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        let start = grid
            .find_byte(b'^')
            .map_err(|e| ParseError::MissingData(e.to_string()))?;
        Ok(Lab {
            grid,
            start,
            route: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let candidates = route(shared)?.to_vec();
        let loops = candidates
            .into_iter()
            .filter(|&pos| pos != shared.start)
            .filter(|&pos| patrol(&shared.grid, shared.start, Some(pos)) == Patrol::Loops)
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;

    const SAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_sample::<Solver>(SAMPLE, 1), "41");
        assert_eq!(solve_sample::<Solver>(SAMPLE, 2), "6");
    }

    #[test]
    fn test_trapped_guard() {
        let mut lab = Solver::parse(".#.\n#^#\n.#.\n").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut lab).is_err());
    }
}
