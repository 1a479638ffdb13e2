//! Day 22: Monkey Market.

use crate::error::{parse, Result};

const PRUNE: u64 = 16_777_216;
const STEPS: usize = 2000;
/// Four price changes in -9..=9, packed in base 19.
const SEQUENCES: usize = 19 * 19 * 19 * 19;

pub fn parse_buyers(input: &str) -> Result<Vec<u64>> {
    input.split_whitespace().map(parse).collect()
}

pub fn next_secret(secret: u64) -> u64 {
    let secret = (secret ^ (secret * 64)) % PRUNE;
    let secret = (secret ^ (secret / 32)) % PRUNE;
    (secret ^ (secret * 2048)) % PRUNE
}

/// The initial secret followed by its successors.
pub fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

pub fn nth_secret(seed: u64, n: usize) -> u64 {
    secrets(seed).nth(n).unwrap_or(seed)
}

fn encode(changes: &[i64]) -> usize {
    changes.iter().fold(0, |acc, &c| acc * 19 + (c + 9) as usize)
}

/// Bananas collected for every sequence of four price changes, selling to
/// each buyer at the first occurrence of the sequence.
pub fn bananas_by_sequence(buyers: &[u64]) -> Vec<u64> {
    let mut bananas = vec![0; SEQUENCES];
    let mut last_buyer = vec![usize::MAX; SEQUENCES];
    for (buyer, &seed) in buyers.iter().enumerate() {
        let prices = secrets(seed).take(STEPS + 1).map(|s| (s % 10) as i64).collect::<Vec<_>>();
        let changes = prices.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
        for (i, window) in changes.windows(4).enumerate() {
            let key = encode(window);
            if last_buyer[key] != buyer {
                last_buyer[key] = buyer;
                bananas[key] += prices[i + 4] as u64;
            }
        }
    }
    bananas
}

pub fn best_sequence(buyers: &[u64]) -> ([i64; 4], u64) {
    let bananas = bananas_by_sequence(buyers);
    let (key, &most) = bananas
        .iter()
        .enumerate()
        .max_by_key(|&(key, &n)| (n, std::cmp::Reverse(key)))
        .unwrap_or((0, &0));
    let mut changes = [0; 4];
    let mut rest = key;
    for change in changes.iter_mut().rev() {
        *change = (rest % 19) as i64 - 9;
        rest /= 19;
    }
    (changes, most)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let buyers = parse_buyers(input)?;
    let answer: u64 = if part == 1 {
        buyers.iter().map(|&seed| nth_secret(seed, STEPS)).sum()
    } else {
        let (changes, most) = best_sequence(&buyers);
        log::debug!("best changes {changes:?}");
        most
    };
    Ok(answer.to_string())
}
