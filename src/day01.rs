//! Day 1: Historian Hysteria.

use crate::error::{parse, Error, Result};
use itertools::Itertools;
use std::iter::zip;

pub fn parse_lists(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.trim().lines() {
        let Some((left, right)) = line.split_whitespace().collect_tuple() else {
            return Err(Error::malformed(format!("cannot parse {line:?} as two numbers")));
        };
        lefts.push(parse(left)?);
        rights.push(parse(right)?);
    }
    Ok((lefts, rights))
}

pub fn total_distance(mut lefts: Vec<i64>, mut rights: Vec<i64>) -> i64 {
    lefts.sort_unstable();
    rights.sort_unstable();
    zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum()
}

pub fn similarity_score(lefts: &[i64], rights: &[i64]) -> i64 {
    let counts = rights.iter().counts();
    lefts
        .iter()
        .map(|left| left * counts.get(left).copied().unwrap_or(0) as i64)
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (lefts, rights) = parse_lists(input)?;
    let answer = if part == 1 {
        total_distance(lefts, rights)
    } else {
        similarity_score(&lefts, &rights)
    };
    Ok(answer.to_string())
}
