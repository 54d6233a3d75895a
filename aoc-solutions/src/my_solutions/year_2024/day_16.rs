use std::collections::HashSet;

use aoc_search::{UniformCostSearch, all_cheapest_paths};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "search"])]
pub struct Solver;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

#[derive(Debug)]
pub struct Maze {
    grid: Grid<u8>,
    start: Pos,
    end: Pos,
}

/// A reindeer standing on a tile, facing some direction
type Reindeer = (Pos, Dir);

impl Maze {
    fn moves(&self, &(pos, dir): &Reindeer) -> Vec<(Reindeer, u64)> {
        let mut moves = vec![
            ((pos, dir.turn_left()), TURN_COST),
            ((pos, dir.turn_right()), TURN_COST),
        ];
        let ahead = pos + dir.delta();
        if self.grid.get(ahead).is_some_and(|&c| c != b'#') {
            moves.push(((ahead, dir), STEP_COST));
        }
        moves
    }

    fn start(&self) -> Reindeer {
        (self.start, Dir::East)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        let start = grid
            .find_byte(b'S')
            .map_err(|e| ParseError::MissingData(e.to_string()))?;
        let end = grid
            .find_byte(b'E')
            .map_err(|e| ParseError::MissingData(e.to_string()))?;
        Ok(Maze { grid, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let maze: &Maze = shared;
        UniformCostSearch::new(
            |reindeer: &Reindeer| maze.moves(reindeer),
            |&(pos, _): &Reindeer| pos == maze.end,
        )
        .run(maze.start())
        .map(|found| found.cost.to_string())
        .ok_or_else(|| SolveError::failed("no route from S to E"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let maze: &Maze = shared;
        let best = all_cheapest_paths(
            maze.start(),
            |reindeer: &Reindeer| maze.moves(reindeer),
            |&(pos, _): &Reindeer| pos == maze.end,
        )
        .ok_or_else(|| SolveError::failed("no route from S to E"))?;

        let tiles: HashSet<Pos> = best.states().into_iter().map(|(pos, _)| pos).collect();
        Ok(tiles.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Solver>(FIRST, 1), "7036");
        assert_eq!(solve_sample::<Solver>(FIRST, 2), "45");
        assert_eq!(solve_sample::<Solver>(SECOND, 1), "11048");
        assert_eq!(solve_sample::<Solver>(SECOND, 2), "64");
    }

    #[test]
    fn test_walled_in_end() {
        let mut maze = Solver::parse("#####\n#S#E#\n#####\n").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut maze).is_err());
        assert!(<Solver as PartSolver<2>>::solve(&mut maze).is_err());
    }
}
