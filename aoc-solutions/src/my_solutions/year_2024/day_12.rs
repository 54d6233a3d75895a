use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    /// Equal to the number of straight fence sides
    corners: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Region>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let garden = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        Ok(regions(&garden))
    }
}

/// Flood-fill every connected patch of equal plants
fn regions(garden: &Grid<u8>) -> Vec<Region> {
    let same = |a: Pos, b: Pos| garden.get(b).is_some() && garden.get(a) == garden.get(b);
    let mut assigned = garden.map(|_| false);
    let mut regions = Vec::new();

    for origin in garden.positions() {
        if assigned.get(origin) != Some(&false) {
            continue;
        }
        assigned.set(origin, true);
        let mut region = Region::default();
        let mut stack = vec![origin];

        while let Some(pos) = stack.pop() {
            region.area += 1;
            for dir in Dir::ALL {
                let next = pos + dir.delta();
                if !same(pos, next) {
                    region.perimeter += 1;
                } else if assigned.get(next) == Some(&false) {
                    assigned.set(next, true);
                    stack.push(next);
                }

                // Corner between `dir` and the next direction clockwise:
                // convex when both sides are fenced, concave when both are
                // open but the diagonal is not.
                let side = dir.turn_right().delta();
                let (ahead, beside) = (same(pos, next), same(pos, pos + side));
                let diagonal = same(pos, next + side);
                if (!ahead && !beside) || (ahead && beside && !diagonal) {
                    region.corners += 1;
                }
            }
        }
        regions.push(region);
    }
    regions
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.corners).sum();
        Ok(price.to_string())
    }
}
