use aoc_search::{HeapOrder, UniformCostSearch};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Pos;
use crate::utils::text;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["search", "math"])]
pub struct Solver;

const A_COST: u64 = 3;
const B_COST: u64 = 1;
/// Each button may be pressed at most this many times in part 1
const MAX_PRESSES: u32 = 100;
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: Pos,
    b: Pos,
    prize: Pos,
}

impl Machine {
    fn claw(&self, (a, b): (u32, u32)) -> Pos {
        self.a * a as i64 + self.b * b as i64
    }

    /// Cheapest press counts reaching the prize, found by searching over
    /// `(a presses, b presses)` with the claw never overshooting
    fn min_tokens_search(&self, order: HeapOrder) -> Option<u64> {
        let machine = *self;
        let expand = move |&(a, b): &(u32, u32)| {
            [((a + 1, b), A_COST), ((a, b + 1), B_COST)]
                .into_iter()
                .filter(move |&((a, b), _)| {
                    let claw = machine.claw((a, b));
                    a <= MAX_PRESSES
                        && b <= MAX_PRESSES
                        && claw.x <= machine.prize.x
                        && claw.y <= machine.prize.y
                })
        };
        let is_goal = move |&presses: &(u32, u32)| machine.claw(presses) == machine.prize;

        UniformCostSearch::new(expand, is_goal)
            .order(order)
            .run((0, 0))
            .map(|found| found.cost)
    }

    /// Closed-form solution of the 2x2 system, if it has a non-negative
    /// integer one
    fn min_tokens_exact(&self) -> Option<u64> {
        let Machine { a, b, prize } = *self;
        let det = a.x * b.y - a.y * b.x;
        if det == 0 {
            return self.min_tokens_collinear();
        }
        let na = prize.x * b.y - prize.y * b.x;
        let nb = a.x * prize.y - a.y * prize.x;
        if na % det != 0 || nb % det != 0 {
            return None;
        }
        let (presses_a, presses_b) = (na / det, nb / det);
        if presses_a < 0 || presses_b < 0 {
            return None;
        }
        Some(presses_a as u64 * A_COST + presses_b as u64 * B_COST)
    }

    /// Both buttons move along one line, so only one axis constrains the
    /// presses; the other is checked afterwards
    fn min_tokens_collinear(&self) -> Option<u64> {
        let Machine { a, b, prize } = *self;
        let (p, q, n) = if a.x != 0 || b.x != 0 {
            (a.x, b.x, prize.x)
        } else {
            (a.y, b.y, prize.y)
        };
        let (presses_a, presses_b) = cheapest_combination(p.into(), q.into(), n.into())?;
        let hits = |axis: fn(Pos) -> i64| {
            presses_a * i128::from(axis(a)) + presses_b * i128::from(axis(b))
                == i128::from(axis(prize))
        };
        if !hits(|pos| pos.x) || !hits(|pos| pos.y) {
            return None;
        }
        let tokens = presses_a * i128::from(A_COST) + presses_b * i128::from(B_COST);
        u64::try_from(tokens).ok()
    }
}

/// `(g, x, y)` with `p * x + q * y == g == gcd(p, q)`
fn extended_gcd(p: i128, q: i128) -> (i128, i128, i128) {
    if q == 0 {
        (p, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(q, p % q);
        (g, y, x - (p / q) * y)
    }
}

/// Non-negative `(i, j)` with `i * p + j * q == n` minimizing
/// `A_COST * i + B_COST * j`, for non-negative `p`, `q` and `n`
fn cheapest_combination(p: i128, q: i128, n: i128) -> Option<(i128, i128)> {
    match (p, q) {
        (0, 0) => (n == 0).then_some((0, 0)),
        (_, 0) => (n % p == 0).then(|| (n / p, 0)),
        (0, _) => (n % q == 0).then(|| (0, n / q)),
        _ => {
            let (g, x, y) = extended_gcd(p, q);
            if n % g != 0 {
                return None;
            }
            // i = i0 + k * step_i and j = j0 - k * step_j for any integer k
            let (i0, j0) = (x * (n / g), y * (n / g));
            let (step_i, step_j) = (q / g, p / g);
            let k_min = -i0.div_euclid(step_i);
            let k_max = j0.div_euclid(step_j);
            if k_min > k_max {
                return None;
            }
            // Cost is linear in k, so the cheapest end of the range wins
            let slope = i128::from(A_COST) * step_i - i128::from(B_COST) * step_j;
            let k = if slope >= 0 { k_min } else { k_max };
            Some((i0 + k * step_i, j0 - k * step_j))
        }
    }
}

fn parse_machine(block: &str) -> anyhow::Result<Machine> {
    let [ax, ay, bx, by, px, py] = text::numbers_n::<i64, 6>(block)?;
    if [ax, ay, bx, by, px, py].iter().any(|&v| v < 0) {
        anyhow::bail!("negative coordinate");
    }
    Ok(Machine {
        a: Pos::new(ax, ay),
        b: Pos::new(bx, by),
        prize: Pos::new(px, py),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        text::parse_all(text::sections(input), parse_machine)
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tokens: u64 = shared
            .iter()
            .filter_map(|machine| machine.min_tokens_search(HeapOrder::MinFirst))
            .sum();
        Ok(tokens.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tokens: u64 = shared
            .iter()
            .filter_map(|machine| {
                Machine {
                    prize: machine.prize + Pos::new(PRIZE_OFFSET, PRIZE_OFFSET),
                    ..*machine
                }
                .min_tokens_exact()
            })
            .sum();
        Ok(tokens.to_string())
    }
}
