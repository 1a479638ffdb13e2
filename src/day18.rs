//! Day 18: RAM Run.

use crate::error::{parse, Error, Result};
use crate::grid::Pos;
use bitvec::prelude::*;
use std::collections::VecDeque;

/// Side length and number of fallen bytes for the small example space.
const SMALL: (i32, usize) = (7, 12);
const LARGE: (i32, usize) = (71, 1024);

pub fn parse_bytes(input: &str) -> Result<Vec<Pos>> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| Error::malformed(format!("cannot parse coordinate {line:?}")))?;
            Ok(Pos::new(parse(x)?, parse(y)?))
        })
        .collect()
}

/// Memory size and bytes fallen in part 1, chosen by the largest coordinate.
pub fn memory_size(bytes: &[Pos]) -> Result<(i32, usize)> {
    let max = bytes.iter().map(|p| p.x.max(p.y)).max().unwrap_or(0);
    let (size, fallen) = if max < SMALL.0 {SMALL} else {LARGE};
    if max >= size || bytes.iter().any(|p| p.x < 0 || p.y < 0) {
        return Err(Error::malformed(format!("byte at coordinate {max} is outside the memory space")));
    }
    Ok((size, fallen))
}

/// Steps from the top left to the bottom right corner, avoiding `corrupted`.
pub fn shortest_path(size: i32, corrupted: &[Pos]) -> Option<usize> {
    let index = |p: Pos| ((0..size).contains(&p.x) && (0..size).contains(&p.y))
        .then(|| (p.y * size + p.x) as usize);
    let mut blocked = bitvec![0; (size * size) as usize];
    for &p in corrupted {
        if let Some(i) = index(p) {
            blocked.set(i, true);
        }
    }
    let goal = Pos::new(size - 1, size - 1);
    let mut queue = VecDeque::from([(Pos::new(0, 0), 0)]);
    blocked.set(0, true);
    while let Some((pos, steps)) = queue.pop_front() {
        if pos == goal {
            return Some(steps);
        }
        for next in pos.neighbors() {
            let Some(i) = index(next) else {continue};
            if !blocked.replace(i, true) {
                queue.push_back((next, steps + 1));
            }
        }
    }
    None
}

/// The first byte after which the exit can no longer be reached.
pub fn first_blocking(size: i32, bytes: &[Pos]) -> Option<Pos> {
    let (mut open, mut closed) = (0, bytes.len());
    if shortest_path(size, bytes).is_some() {
        return None;
    }
    // invariant: exit reachable after `open` bytes, unreachable after `closed`
    while closed - open > 1 {
        let mid = (open + closed) / 2;
        if shortest_path(size, &bytes[..mid]).is_some() {open = mid} else {closed = mid}
    }
    Some(bytes[closed - 1])
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let bytes = parse_bytes(input)?;
    let (size, fallen) = memory_size(&bytes)?;
    log::debug!("memory space is {size}x{size}");
    if part == 1 {
        let fallen = &bytes[..fallen.min(bytes.len())];
        let steps = shortest_path(size, fallen).ok_or_else(|| Error::no_solution("the exit is cut off"))?;
        Ok(steps.to_string())
    } else {
        let byte = first_blocking(size, &bytes).ok_or_else(|| Error::no_solution("the exit is never cut off"))?;
        Ok(byte.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn infers_small_memory() {
        let bytes = parse_bytes(EXAMPLE).unwrap();
        assert_eq!(bytes.len(), 25);
        assert_eq!(memory_size(&bytes).unwrap(), (7, 12));
        assert_eq!(memory_size(&[Pos::new(70, 3)]).unwrap(), (71, 1024));
        assert!(memory_size(&[Pos::new(71, 3)]).is_err());
    }

    #[test]
    fn example_path() {
        let bytes = parse_bytes(EXAMPLE).unwrap();
        assert_eq!(shortest_path(7, &bytes[..12]), Some(22));
        assert_eq!(shortest_path(7, &[]), Some(12));
        assert_eq!(solve(1, EXAMPLE).unwrap(), "22");
    }

    #[test]
    fn example_blocking_byte() {
        let bytes = parse_bytes(EXAMPLE).unwrap();
        assert_eq!(first_blocking(7, &bytes), Some(Pos::new(6, 1)));
        assert_eq!(first_blocking(7, &bytes[..12]), None);
        assert_eq!(solve(2, EXAMPLE).unwrap(), "6,1");
    }
}
