use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "dp"])]
pub struct Solver;

/// Cells that are not a digit can never be stepped on
const IMPASSABLE: u8 = u8::MAX;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        Ok(grid.map(|&c| if c.is_ascii_digit() { c - b'0' } else { IMPASSABLE }))
    }
}

/// Neighbors exactly one step higher
fn uphill(heights: &Grid<u8>, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let height = heights.get(pos).copied().unwrap_or(IMPASSABLE);
    heights
        .neighbors4(pos)
        .filter(move |&next| height < 9 && heights.get(next) == Some(&(height + 1)))
}

fn trailheads(heights: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    heights
        .iter()
        .filter(|&(_, &height)| height == 0)
        .map(|(pos, _)| pos)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights: &Grid<u8> = shared;
        let score: usize = trailheads(heights)
            .map(|head| {
                let mut seen = HashSet::from([head]);
                let mut stack = vec![head];
                let mut peaks = 0;
                while let Some(pos) = stack.pop() {
                    if heights.get(pos) == Some(&9) {
                        peaks += 1;
                    }
                    for next in uphill(heights, pos) {
                        if seen.insert(next) {
                            stack.push(next);
                        }
                    }
                }
                peaks
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights: &Grid<u8> = shared;
        let width = heights.width() as i64;
        let to_pos = |index: usize| Pos::new(index as i64 % width, index as i64 / width);

        // Distinct trails from a cell up to any 9
        let ratings = DpCache::new(
            VecBackend::with_capacity(heights.width() * heights.height()),
            |&index: &usize| {
                uphill(heights, to_pos(index))
                    .filter_map(|next| heights.flat_index(next))
                    .collect()
            },
            |&index: &usize, deps: Vec<u64>| {
                if heights.get(to_pos(index)) == Some(&9) {
                    1
                } else {
                    deps.iter().sum()
                }
            },
        );

        let mut total = 0;
        for head in trailheads(heights) {
            let rating = heights
                .flat_index(head)
                .and_then(|index| ratings.get(&index))
                .ok_or_else(|| SolveError::failed(format!("no rating for trailhead {head}")))?;
            total += rating;
        }
        Ok(total.to_string())
    }
}
