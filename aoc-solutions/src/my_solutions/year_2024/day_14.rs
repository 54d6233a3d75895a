use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Pos;
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation"])]
pub struct Solver;

const ROOM: Pos = Pos::new(101, 103);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    position: Pos,
    velocity: Pos,
}

impl Robot {
    /// Position after `seconds`, wrapping around the room edges
    fn after(&self, seconds: i64, room: Pos) -> Pos {
        let moved = self.position + self.velocity * seconds;
        Pos::new(moved.x.rem_euclid(room.x), moved.y.rem_euclid(room.y))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        text::parse_all(text::lines(input), |line| {
            let [px, py, vx, vy] = text::numbers_n::<i64, 4>(line)?;
            Ok(Robot {
                position: Pos::new(px, py),
                velocity: Pos::new(vx, vy),
            })
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Product of the robot counts in the four quadrants; robots on the middle
/// row or column count for none
pub fn safety_factor(robots: &[Robot], seconds: i64, room: Pos) -> usize {
    let (mid_x, mid_y) = (room.x / 2, room.y / 2);
    let mut quadrants = [0; 4];
    for robot in robots {
        let pos = robot.after(seconds, room);
        if pos.x == mid_x || pos.y == mid_y {
            continue;
        }
        let index = usize::from(pos.x > mid_x) + 2 * usize::from(pos.y > mid_y);
        quadrants[index] += 1;
    }
    quadrants.iter().product()
}

/// First second at which no two robots share a tile.
///
/// Positions repeat with period `room.x * room.y`, so the search stops there.
pub fn first_spread_out(robots: &[Robot], room: Pos) -> Option<i64> {
    (1..=room.x * room.y).find(|&seconds| {
        let mut seen = HashSet::with_capacity(robots.len());
        robots.iter().all(|robot| seen.insert(robot.after(seconds, room)))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, 100, ROOM).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_spread_out(shared, ROOM)
            .map(|seconds| seconds.to_string())
            .ok_or_else(|| SolveError::failed("robots always overlap"))
    }
}
