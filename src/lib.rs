//! Solutions to the Advent of Code 2024 puzzles.
//!
//! Every day lives in its own module and exposes `solve(part, input)`, which
//! returns the answer as text. [`solve`] dispatches by day number.

pub mod error;
pub mod grid;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;
pub mod day23;
pub mod day24;
pub mod day25;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

pub type Solver = fn(u8, &str) -> Result<String>;

pub const DAYS: [Solver; 25] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve,
    day06::solve, day07::solve, day08::solve, day09::solve, day10::solve,
    day11::solve, day12::solve, day13::solve, day14::solve, day15::solve,
    day16::solve, day17::solve, day18::solve, day19::solve, day20::solve,
    day21::solve, day22::solve, day23::solve, day24::solve, day25::solve,
];

pub fn solve(day: u8, part: u8, input: &str) -> Result<String> {
    let solver = (day as usize)
        .checked_sub(1)
        .and_then(|i| DAYS.get(i))
        .ok_or(Error::UnknownDay(day))?;
    if part != 1 && part != 2 {
        return Err(Error::NoSuchPart { day, part });
    }
    log::debug!("day {day} part {part}: {} bytes of input", input.len());
    solver(part, input)
}

/// `day{N}.in` for the puzzle input, `day{N}test{T}.in` for example `T`.
pub fn input_path(dir: &Path, day: u8, test: Option<u32>) -> PathBuf {
    match test {
        None => dir.join(format!("day{day}.in")),
        Some(test) => dir.join(format!("day{day}test{test}.in")),
    }
}

pub fn read_input(dir: &Path, day: u8, test: Option<u32>) -> Result<String> {
    let path = input_path(dir, day, test);
    log::info!("reading {}", path.display());
    std::fs::read_to_string(&path).map_err(|source| Error::Input { path, source })
}
