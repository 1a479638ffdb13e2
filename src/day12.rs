//! Day 12: Garden Groups.

use crate::error::Result;
use crate::grid::{Dir, Grid, Pos};
use bitvec::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub plant: u8,
    pub plots: Vec<Pos>,
}

impl Region {
    pub fn area(&self) -> usize {
        self.plots.len()
    }

    pub fn perimeter(&self, grid: &Grid) -> usize {
        self.plots
            .iter()
            .flat_map(|p| p.neighbors())
            .filter(|&n| grid.get(n) != Some(self.plant))
            .count()
    }

    /// Straight fence sections, counted as the corners of the region.
    pub fn sides(&self, grid: &Grid) -> usize {
        let same = |p: Pos| grid.get(p) == Some(self.plant);
        self.plots
            .iter()
            .flat_map(|&p| Dir::ALL.map(|d| (p, d)))
            .filter(|&(p, d)| {
                let (a, b) = (d.delta(), d.turn_right().delta());
                let outer = !same(p + a) && !same(p + b);
                let inner = same(p + a) && same(p + b) && !same(p + a + b);
                outer || inner
            })
            .count()
    }
}

/// Connected regions of equal plants, in the order their first plot appears
/// reading the map row by row.
pub fn regions(grid: &Grid) -> Vec<Region> {
    let mut seen = bitvec![0; grid.len()];
    let mut regions = vec![];
    for start in grid.positions() {
        let Some(at) = grid.offset(start) else {continue};
        if seen[at] {
            continue;
        }
        let plant = grid[start];
        let mut plots = vec![];
        let mut stack = vec![start];
        seen.set(at, true);
        while let Some(pos) = stack.pop() {
            plots.push(pos);
            for next in pos.neighbors() {
                if grid.get(next) != Some(plant) {
                    continue;
                }
                if let Some(at) = grid.offset(next) {
                    if !seen.replace(at, true) {
                        stack.push(next);
                    }
                }
            }
        }
        plots.sort_unstable_by_key(|p| (p.y, p.x));
        regions.push(Region { plant, plots });
    }
    regions
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let price: usize = regions(&grid)
        .iter()
        .map(|region| {
            let fence = if part == 1 {region.perimeter(&grid)} else {region.sides(&grid)};
            region.area() * fence
        })
        .sum();
    Ok(price.to_string())
}
