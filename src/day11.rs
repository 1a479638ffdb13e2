//! Day 11: Plutonian Pebbles.
//!
//! Stones never influence each other, so only the count of each engraved
//! number matters.

use crate::error::{parse, Result};
use arrayvec::ArrayVec;
use itertools::Itertools;
use rustc_hash::FxHashMap;

pub fn parse_stones(input: &str) -> Result<Vec<u64>> {
    input.split_whitespace().map(parse).collect()
}

/// What a single stone turns into after one blink.
pub fn blink(stone: u64) -> ArrayVec<u64, 2> {
    let mut out = ArrayVec::new();
    if stone == 0 {
        out.push(1);
        return out;
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        out.push(stone / half);
        out.push(stone % half);
    } else {
        out.push(stone * 2024);
    }
    out
}

pub fn blink_all(stones: &[u64]) -> Vec<u64> {
    stones.iter().flat_map(|&stone| blink(stone)).collect()
}

pub fn count_after(stones: &[u64], blinks: usize) -> u64 {
    let mut counts = FxHashMap::<u64, u64>::default();
    for &stone in stones {
        *counts.entry(stone).or_default() += 1;
    }
    for _ in 0..blinks {
        let mut next = FxHashMap::<u64, u64>::default();
        for (stone, n) in counts {
            for new in blink(stone) {
                *next.entry(new).or_default() += n;
            }
        }
        counts = next;
    }
    log::trace!("{} distinct stones after {blinks} blinks", counts.len());
    counts.values().sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let stones = parse_stones(input)?;
    Ok(count_after(&stones, if part == 1 {25} else {75}).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_blink() {
        let stones = parse_stones("0 1 10 99 999").unwrap();
        assert_eq!(blink_all(&stones).iter().join(" "), "1 2024 1 0 9 9 2021976");
        assert_eq!(blink(1000).as_slice(), [10, 0]);
    }

    #[test]
    fn counts_grow() {
        let stones = parse_stones("125 17").unwrap();
        let mut expanded = stones.clone();
        for _ in 0..6 {
            expanded = blink_all(&expanded);
        }
        assert_eq!(expanded.iter().join(" "), "2097446912 14168 4048 2 0 2 4 40 48 2024 40 48 80 96 2 8 6 7 6 0 3 2");
        assert_eq!(count_after(&stones, 6), 22);
        assert_eq!(count_after(&stones, 25), 55312);
        assert_eq!(count_after(&stones, 75), 65601038650482);
    }

    #[test]
    fn puzzle_input() {
        let stones = parse_stones("112 1110 163902 0 7656027 83039 9 74").unwrap();
        assert_eq!(count_after(&stones, 25), 183620);
        assert_eq!(count_after(&stones, 75), 220377651399268);
    }
}
