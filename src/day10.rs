//! Day 10: Hoof It.

use crate::error::Result;
use crate::grid::{Grid, Pos};
use bitvec::prelude::*;

pub fn parse_map(input: &str) -> Result<Grid> {
    let grid = Grid::parse(input)?;
    grid.check(|c| c == b'.' || c.is_ascii_digit())?;
    Ok(grid)
}

fn uphill(grid: &Grid, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let next = grid[pos] + 1;
    pos.neighbors().into_iter().filter(move |&p| grid.get(p) == Some(next))
}

/// Number of distinct `9`s reachable from `head` in steps of +1.
pub fn score(grid: &Grid, head: Pos) -> usize {
    let mut seen = bitvec![0; grid.len()];
    let mut stack = vec![head];
    let mut peaks = 0;
    while let Some(pos) = stack.pop() {
        let Some(at) = grid.offset(pos) else {continue};
        if seen.replace(at, true) {
            continue;
        }
        if grid[pos] == b'9' {
            peaks += 1;
        } else {
            stack.extend(uphill(grid, pos));
        }
    }
    peaks
}

/// Number of distinct hiking trails starting at `head`.
pub fn rating(grid: &Grid, head: Pos) -> usize {
    if grid[head] == b'9' {
        return 1;
    }
    uphill(grid, head).map(|next| rating(grid, next)).sum()
}

pub fn trailheads(grid: &Grid) -> Vec<Pos> {
    grid.find_all(b'0').collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = parse_map(input)?;
    let measure = if part == 1 {score} else {rating};
    let answer: usize = trailheads(&grid).into_iter().map(|head| measure(&grid, head)).sum();
    Ok(answer.to_string())
}
