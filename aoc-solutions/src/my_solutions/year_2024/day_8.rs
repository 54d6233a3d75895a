use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Antennas {
    grid: Grid<u8>,
    by_frequency: HashMap<u8, Vec<Pos>>,
}

impl Antennas {
    /// Every ordered pair of distinct antennas sharing a frequency
    fn pairs(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.by_frequency
            .values()
            .flat_map(|group| group.iter().copied().permutations(2))
            .map(|pair| (pair[0], pair[1]))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Antennas;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        let by_frequency = grid
            .iter()
            .filter(|&(_, &cell)| cell.is_ascii_alphanumeric())
            .map(|(pos, &cell)| (cell, pos))
            .into_group_map();
        Ok(Antennas { grid, by_frequency })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes: HashSet<Pos> = shared
            .pairs()
            .map(|(a, b)| b + (b - a))
            .filter(|&pos| shared.grid.contains(pos))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let antinodes: HashSet<Pos> = shared
            .pairs()
            .flat_map(|(a, b)| {
                let step = b - a;
                (0..)
                    .map(move |k| b + step * k)
                    .take_while(move |&pos| grid.contains(pos))
            })
            .collect();
        Ok(antinodes.len().to_string())
    }
}
