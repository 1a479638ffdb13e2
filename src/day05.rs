//! Day 5: Print Queue.

use crate::error::{parse, Error, Result};
use bitvec::prelude::*;

const PAGES: usize = 100;

/// `rules[PAGES * x + y]` is set when page `x` must be printed before `y`.
pub struct Rules(BitArr!(for PAGES * PAGES));

impl Rules {
    pub fn before(&self, x: usize, y: usize) -> bool {
        self.0[PAGES * x + y]
    }
}

fn page(s: &str) -> Result<usize> {
    let page = parse(s)?;
    if page >= PAGES {
        return Err(Error::malformed(format!("page {page} is out of range")));
    }
    Ok(page)
}

pub fn parse_queue(input: &str) -> Result<(Rules, Vec<Vec<usize>>)> {
    let mut lines = input.trim().lines();
    let mut rules = bitarr![0; PAGES * PAGES];
    for line in lines.by_ref().take_while(|line| !line.trim().is_empty()) {
        let Some((x, y)) = line.split_once('|') else {
            return Err(Error::malformed(format!("cannot parse rule {line:?}")));
        };
        rules.set(PAGES * page(x)? + page(y)?, true);
    }
    let updates = lines
        .map(|line| line.split(',').map(page).collect())
        .collect::<Result<Vec<Vec<_>>>>()?;
    Ok((Rules(rules), updates))
}

pub fn is_ordered(rules: &Rules, update: &[usize]) -> bool {
    (0..update.len()).all(|x| (x + 1..update.len()).all(|y| !rules.before(update[y], update[x])))
}

/// Repeatedly takes a page that no remaining page has to precede.
pub fn reorder(rules: &Rules, update: &[usize]) -> Result<Vec<usize>> {
    let mut unsorted = update.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());
    while !unsorted.is_empty() {
        let x_at = unsorted
            .iter()
            .position(|&x| unsorted.iter().all(|&y| !rules.before(y, x)))
            .ok_or_else(|| Error::no_solution(format!("rules for {update:?} are cyclic")))?;
        sorted.push(unsorted.remove(x_at));
    }
    Ok(sorted)
}

fn middle(update: &[usize]) -> usize {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (rules, updates) = parse_queue(input)?;
    let answer: usize = if part == 1 {
        updates.iter().filter(|update| is_ordered(&rules, update)).map(|update| middle(update)).sum()
    } else {
        let mut sum = 0;
        for update in updates.iter().filter(|update| !is_ordered(&rules, update)) {
            sum += middle(&reorder(&rules, update)?);
        }
        sum
    };
    Ok(answer.to_string())
}
