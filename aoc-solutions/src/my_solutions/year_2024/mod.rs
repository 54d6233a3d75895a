pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;
pub mod day_7;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_17;
pub mod day_18;
pub mod day_19;

/// Parse `input` and solve one part, panicking on any error
#[cfg(test)]
fn solve_sample<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).unwrap();
    S::solve_part(&mut shared, part).unwrap()
}
