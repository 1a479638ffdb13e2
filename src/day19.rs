//! Day 19: Linen Layout.

use crate::error::{Error, Result};

pub struct Onsen<'a> {
    pub patterns: Vec<&'a str>,
    pub designs: Vec<&'a str>,
}

pub fn parse_onsen(input: &str) -> Result<Onsen<'_>> {
    let mut lines = input.trim().lines();
    let patterns = lines
        .next()
        .ok_or_else(|| Error::malformed("no towel patterns"))?
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let designs = lines.map(str::trim).filter(|d| !d.is_empty()).collect();
    Ok(Onsen { patterns, designs })
}

/// Number of ways to lay out `design` from the patterns, each usable any
/// number of times.
pub fn arrangements(patterns: &[&str], design: &str) -> u64 {
    // ways[i]: arrangements of the first i stripes
    let mut ways = vec![0u64; design.len() + 1];
    ways[0] = 1;
    for i in 0..design.len() {
        if ways[i] == 0 {
            continue;
        }
        let rest = &design.as_bytes()[i..];
        for pattern in patterns {
            if rest.starts_with(pattern.as_bytes()) {
                ways[i + pattern.len()] += ways[i];
            }
        }
    }
    ways[design.len()]
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let onsen = parse_onsen(input)?;
    let counts = onsen.designs.iter().map(|design| arrangements(&onsen.patterns, design));
    let answer = if part == 1 {counts.filter(|&n| n > 0).count() as u64} else {counts.sum()};
    Ok(answer.to_string())
}
