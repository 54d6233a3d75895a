use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

const DIRECTIONS: [Pos; 8] = [
    Pos::new(1, 0),
    Pos::new(1, 1),
    Pos::new(0, 1),
    Pos::new(-1, 1),
    Pos::new(-1, 0),
    Pos::new(-1, -1),
    Pos::new(0, -1),
    Pos::new(1, -1),
];

fn spells(grid: &Grid<u8>, start: Pos, step: Pos, word: &[u8]) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, &letter)| grid.get(start + step * i as i64) == Some(&letter))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let count = grid
            .positions()
            .flat_map(|pos| DIRECTIONS.map(|step| (pos, step)))
            .filter(|&(pos, step)| spells(grid, pos, step, b"XMAS"))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let is_mas = |a: Option<&u8>, b: Option<&u8>| {
            matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
        };
        let grid: &Grid<u8> = shared;
        let count = grid
            .iter()
            .filter(|&(pos, &cell)| {
                cell == b'A'
                    && is_mas(
                        grid.get(pos + Pos::new(-1, -1)),
                        grid.get(pos + Pos::new(1, 1)),
                    )
                    && is_mas(
                        grid.get(pos + Pos::new(1, -1)),
                        grid.get(pos + Pos::new(-1, 1)),
                    )
            })
            .count();
        Ok(count.to_string())
    }
}
