//! Day 25: Code Chronicle.

use crate::error::{Error, Result};
use crate::grid::Grid;
use itertools::Itertools;

#[derive(Debug, Default)]
pub struct Schematics {
    pub locks: Vec<Vec<usize>>,
    pub keys: Vec<Vec<usize>>,
    /// Free rows between the top and bottom rows of a schematic.
    pub space: usize,
}

pub fn parse_schematics(input: &str) -> Result<Schematics> {
    let mut schematics = Schematics::default();
    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    for block in lines.split(|line| line.is_empty()).filter(|block| !block.is_empty()) {
        let grid = Grid::parse(&block.join("\n"))?;
        grid.check(|c| c == b'#' || c == b'.')?;
        let rows = grid.rows().collect::<Vec<_>>();
        let heights = (0..grid.width())
            .map(|x| rows.iter().filter(|row| row[x] == b'#').count().saturating_sub(1))
            .collect();
        schematics.space = grid.height().saturating_sub(2);
        match (rows.first(), rows.last()) {
            (Some(top), _) if top.iter().all(|&c| c == b'#') => schematics.locks.push(heights),
            (_, Some(bottom)) if bottom.iter().all(|&c| c == b'#') => schematics.keys.push(heights),
            _ => return Err(Error::malformed(format!("schematic is neither lock nor key:\n{grid}"))),
        }
    }
    Ok(schematics)
}

pub fn fits(lock: &[usize], key: &[usize], space: usize) -> bool {
    lock.len() == key.len() && lock.iter().zip(key).all(|(l, k)| l + k <= space)
}

pub fn fitting_pairs(schematics: &Schematics) -> usize {
    schematics
        .locks
        .iter()
        .cartesian_product(&schematics.keys)
        .filter(|(lock, key)| fits(lock, key, schematics.space))
        .count()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part != 1 {
        return Err(Error::NoSuchPart { day: 25, part });
    }
    Ok(fitting_pairs(&parse_schematics(input)?).to_string())
}
