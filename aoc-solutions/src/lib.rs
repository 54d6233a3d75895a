//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day lives in `my_solutions::year_2024::day_N` as a unit `Solver`
//! type. The `AutoRegisterSolver` derive submits it as a plugin, so linking
//! this crate is enough for a registry built with
//! `register_all_plugins` to find every day.
//!
//! The shortest-path days (13, 16, 18) run on [`aoc_search`]; day 17 drives
//! its priority queue directly. Shared parsing, grid and memoization helpers
//! live in [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
