//! Day 20: Race Condition.

use crate::error::{Error, Result};
use crate::grid::{Grid, Pos};
use arrayvec::ArrayVec;

/// A racetrack with exactly one path from `S` to `E`.
pub struct Track {
    grid: Grid,
    /// Picoseconds from the start, for every cell on the path.
    dist: Vec<Option<u32>>,
    path: Vec<Pos>,
}

impl Track {
    pub fn parse(input: &str) -> Result<Track> {
        let grid = Grid::parse(input)?;
        grid.check(|c| matches!(c, b'#' | b'.' | b'S' | b'E'))?;
        let start = grid.find(b'S').ok_or_else(|| Error::malformed("track has no start"))?;
        let end = grid.find(b'E').ok_or_else(|| Error::malformed("track has no end"))?;

        let mut dist = vec![None; grid.len()];
        let mut path = vec![start];
        let mut prev = None;
        let mut pos = start;
        while pos != end {
            let next = pos
                .neighbors()
                .into_iter()
                .filter(|&n| Some(n) != prev && grid.get(n).is_some_and(|c| c != b'#'))
                .collect::<ArrayVec<Pos, 4>>();
            let step = match next[..] {
                [step] => step,
                [] => return Err(Error::malformed(format!("dead end at {pos}"))),
                _ => return Err(Error::malformed(format!("track forks at {pos}"))),
            };
            prev = Some(pos);
            pos = step;
            path.push(pos);
        }
        for (i, &p) in path.iter().enumerate() {
            if let Some(at) = grid.offset(p) {
                dist[at] = Some(i as u32);
            }
        }
        Ok(Track { grid, dist, path })
    }

    /// Picoseconds needed without cheating.
    pub fn length(&self) -> usize {
        self.path.len() - 1
    }

    fn dist(&self, pos: Pos) -> Option<u32> {
        self.grid.offset(pos).and_then(|at| self.dist[at])
    }

    /// Cheats of at most `max_len` picoseconds that save at least
    /// `min_saving`. A cheat is identified by its start and end cells.
    pub fn count_cheats(&self, max_len: i32, min_saving: u32) -> usize {
        let mut count = 0;
        for &from in &self.path {
            let Some(d0) = self.dist(from) else {continue};
            for dy in -max_len..=max_len {
                let reach = max_len - dy.abs();
                for dx in -reach..=reach {
                    let to = from + Pos::new(dx, dy);
                    let Some(d1) = self.dist(to) else {continue};
                    let cheat = from.manhattan(to) as u32;
                    if d1 >= d0 + cheat + min_saving {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let track = Track::parse(input)?;
    let max_len = if part == 1 {2} else {20};
    Ok(track.count_cheats(max_len, 100).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn follows_the_single_path() {
        let track = Track::parse(EXAMPLE).unwrap();
        assert_eq!(track.length(), 84);
        assert_eq!(track.path[0], Pos::new(1, 3));
        assert_eq!(track.path.last(), Some(&Pos::new(5, 7)));
    }

    #[test]
    fn short_cheats() {
        let track = Track::parse(EXAMPLE).unwrap();
        assert_eq!(track.count_cheats(2, 1), 44);
        assert_eq!(track.count_cheats(2, 2) - track.count_cheats(2, 3), 14);
        assert_eq!(track.count_cheats(2, 64), 1);
    }

    #[test]
    fn long_cheats() {
        let track = Track::parse(EXAMPLE).unwrap();
        assert_eq!(track.count_cheats(20, 50), 285);
        assert_eq!(track.count_cheats(20, 76), 3);
        assert_eq!(track.count_cheats(20, 74), 7);
    }

    #[test]
    fn forks_are_rejected() {
        assert!(Track::parse("#####\n#S..#\n#..E#\n#####").is_err());
    }
}
