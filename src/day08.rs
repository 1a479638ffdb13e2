//! Day 8: Resonant Collinearity.

use crate::error::Result;
use crate::grid::{Grid, Pos};
use bitvec::prelude::*;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Antenna positions grouped by frequency.
pub fn antennas(grid: &Grid) -> FxHashMap<u8, Vec<Pos>> {
    let mut by_freq = FxHashMap::<u8, Vec<Pos>>::default();
    for pos in grid.positions() {
        let cell = grid[pos];
        if cell != b'.' {
            by_freq.entry(cell).or_default().push(pos);
        }
    }
    by_freq
}

/// The two points in line with `a` and `b` that are twice as far from one as
/// from the other.
pub fn antinodes(a: Pos, b: Pos) -> [Pos; 2] {
    [b + (b - a), a - (b - a)]
}

/// Every point in line with `a` and `b` inside the grid, including both.
pub fn harmonics(grid: &Grid, a: Pos, b: Pos) -> Vec<Pos> {
    let step = b - a;
    let forward = (0..).map(|n| b + step * n).take_while(|&p| grid.contains(p));
    let backward = (0..).map(|n| a - step * n).take_while(|&p| grid.contains(p));
    forward.chain(backward).collect()
}

pub fn count_antinodes(grid: &Grid, resonant: bool) -> usize {
    let mut marked = bitvec![0; grid.len()];
    for positions in antennas(grid).values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            let points = if resonant {harmonics(grid, a, b)} else {antinodes(a, b).to_vec()};
            for at in points.into_iter().filter_map(|p| grid.offset(p)) {
                marked.set(at, true);
            }
        }
    }
    marked.count_ones()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    grid.check(|c| c == b'.' || c.is_ascii_alphanumeric())?;
    Ok(count_antinodes(&grid, part == 2).to_string())
}
