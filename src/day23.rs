//! Day 23: LAN Party.

use crate::error::{Error, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

pub struct Network<'a> {
    links: FxHashMap<&'a str, FxHashSet<&'a str>>,
}

impl<'a> Network<'a> {
    pub fn parse(input: &'a str) -> Result<Network<'a>> {
        let mut links = FxHashMap::<&str, FxHashSet<&str>>::default();
        for line in input.trim().lines() {
            let (a, b) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| Error::malformed(format!("cannot parse connection {line:?}")))?;
            links.entry(a).or_default().insert(b);
            links.entry(b).or_default().insert(a);
        }
        Ok(Network { links })
    }

    pub fn computers(&self) -> usize {
        self.links.len()
    }

    /// Every set of three computers all connected to each other, each sorted.
    pub fn triangles(&self) -> Vec<[&'a str; 3]> {
        let mut found = vec![];
        for (&a, neighbors) in &self.links {
            for &b in neighbors.iter().filter(|&&b| a < b) {
                for &c in neighbors.iter().filter(|&&c| b < c) {
                    if self.links[b].contains(c) {
                        found.push([a, b, c]);
                    }
                }
            }
        }
        found.sort_unstable();
        found
    }

    /// A largest set of computers all connected to each other, sorted.
    pub fn largest_clique(&self) -> Vec<&'a str> {
        let mut best = vec![];
        let candidates = self.links.keys().copied().collect();
        self.bron_kerbosch(&mut vec![], candidates, FxHashSet::default(), &mut best);
        best.sort_unstable();
        best
    }

    fn bron_kerbosch(
        &self,
        clique: &mut Vec<&'a str>,
        mut candidates: FxHashSet<&'a str>,
        mut excluded: FxHashSet<&'a str>,
        best: &mut Vec<&'a str>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > best.len() {
                *best = clique.clone();
            }
            return;
        }
        let Some(pivot) = candidates
            .iter()
            .chain(&excluded)
            .max_by_key(|&&v| self.links[v].intersection(&candidates).count())
            .copied()
        else {
            return;
        };
        let pivot_links = &self.links[pivot];
        let branches = candidates.iter().copied().filter(|v| !pivot_links.contains(v)).collect_vec();
        for v in branches {
            let links = &self.links[v];
            clique.push(v);
            self.bron_kerbosch(
                clique,
                candidates.intersection(links).copied().collect(),
                excluded.intersection(links).copied().collect(),
                best,
            );
            clique.pop();
            candidates.remove(v);
            excluded.insert(v);
        }
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    if part == 1 {
        let with_t = network
            .triangles()
            .iter()
            .filter(|triangle| triangle.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(with_t.to_string())
    } else {
        Ok(network.largest_clique().join(","))
    }
}
