use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Warehouse {
    map: Grid<u8>,
    moves: Vec<Dir>,
}

impl AocParser for Solver {
    type SharedData<'a> = Warehouse;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sections = text::sections(input);
        let &[map, moves] = sections.as_slice() else {
            return Err(ParseError::MissingData(
                "expected a map and a move list separated by a blank line".into(),
            ));
        };
        let map = Grid::parse(map).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if map.iter().filter(|&(_, &c)| c == b'@').count() != 1 {
            return Err(ParseError::InvalidFormat("expected exactly one robot".into()));
        }
        let moves = moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Dir::from_arrow(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unknown move {c:?}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Warehouse { map, moves })
    }
}

/// Every cell of a double-width map is doubled; the robot keeps one cell
fn widen(map: &Grid<u8>) -> Result<Grid<u8>, SolveError> {
    let wide: String = (0..map.height() as i64)
        .map(|y| {
            let mut row: String = (0..map.width() as i64)
                .map(|x| match map.get(Pos::new(x, y)) {
                    Some(b'#') => "##",
                    Some(b'O') => "[]",
                    Some(b'@') => "@.",
                    _ => "..",
                })
                .collect();
            row.push('\n');
            row
        })
        .collect();
    Grid::parse(&wide).map_err(|e| SolveError::failed(e.to_string()))
}

/// Move the robot (and everything it pushes) one step, if nothing hits a wall
fn step(map: &mut Grid<u8>, robot: Pos, dir: Dir) -> Pos {
    let delta = dir.delta();
    // Breadth-first, so later entries are never behind earlier ones
    let mut moving = vec![robot];
    let mut seen = HashSet::from([robot]);
    let mut i = 0;

    while i < moving.len() {
        let next = moving[i] + delta;
        i += 1;
        let partner = match map.get(next) {
            None | Some(b'#') => return robot,
            Some(b'O') => None,
            Some(b'[') => Some(next + Dir::East.delta()),
            Some(b']') => Some(next + Dir::West.delta()),
            _ => continue,
        };
        for pos in std::iter::once(next).chain(partner) {
            if seen.insert(pos) {
                moving.push(pos);
            }
        }
    }

    for &pos in moving.iter().rev() {
        let cell = map.get(pos).copied().unwrap_or(b'.');
        map.set(pos + delta, cell);
        map.set(pos, b'.');
    }
    robot + delta
}

fn gps_after_moves(mut map: Grid<u8>, moves: &[Dir]) -> Result<i64, SolveError> {
    let mut robot = map
        .find_byte(b'@')
        .map_err(|e| SolveError::failed(e.to_string()))?;
    for &dir in moves {
        robot = step(&mut map, robot, dir);
    }
    Ok(map
        .iter()
        .filter(|&(_, &c)| c == b'O' || c == b'[')
        .map(|(pos, _)| 100 * pos.y + pos.x)
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(gps_after_moves(shared.map.clone(), &shared.moves)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(gps_after_moves(widen(&shared.map)?, &shared.moves)?.to_string())
    }
}
