//! Day 6: Guard Gallivant.

use crate::error::{Error, Result};
use crate::grid::{Dir, Grid, Pos};
use bitvec::prelude::*;
use rayon::prelude::*;

pub fn parse_lab(input: &str) -> Result<(Grid, Pos)> {
    let grid = Grid::parse(input)?;
    grid.check(|c| matches!(c, b'.' | b'#' | b'^'))?;
    let start = grid.find(b'^').ok_or_else(|| Error::malformed("no guard on the map"))?;
    Ok((grid, start))
}

/// Walks the guard from `start`, facing up, until they leave the map.
///
/// Returns the visited cells by offset, or `None` if the guard ends up in a
/// loop. `obstruction` is treated as one more `#`.
pub fn patrol(grid: &Grid, start: Pos, obstruction: Option<Pos>) -> Option<BitVec> {
    let mut visited = bitvec![0; grid.len()];
    let mut seen = bitvec![0; grid.len() * 4];
    let (mut pos, mut dir) = (start, Dir::Up);
    while let Some(at) = grid.offset(pos) {
        visited.set(at, true);
        if seen.replace(at * 4 + dir.index(), true) {
            return None;
        }
        let next = pos + dir.delta();
        match grid.get(next) {
            Some(b'#') => dir = dir.turn_right(),
            Some(_) if Some(next) == obstruction => dir = dir.turn_right(),
            _ => pos = next,
        }
    }
    Some(visited)
}

pub fn loop_obstructions(grid: &Grid, start: Pos) -> Result<usize> {
    let path = patrol(grid, start, None)
        .ok_or_else(|| Error::no_solution("the guard never leaves the map"))?;
    let candidates = path
        .iter_ones()
        .map(|at| grid.pos_at(at))
        .filter(|&pos| pos != start)
        .collect::<Vec<_>>();
    log::debug!("trying {} obstruction candidates", candidates.len());
    Ok(candidates
        .par_iter()
        .filter(|&&obstruction| patrol(grid, start, Some(obstruction)).is_none())
        .count())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (grid, start) = parse_lab(input)?;
    let answer = if part == 1 {
        patrol(&grid, start, None)
            .ok_or_else(|| Error::no_solution("the guard never leaves the map"))?
            .count_ones()
    } else {
        loop_obstructions(&grid, start)?
    };
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn guard_leaves_after_41_cells() {
        let (grid, start) = parse_lab(EXAMPLE).unwrap();
        assert_eq!(start, Pos::new(4, 6));
        let path = patrol(&grid, start, None).unwrap();
        assert_eq!(path.count_ones(), 41);
        assert!(path[grid.offset(Pos::new(7, 9)).unwrap()]);
        assert!(!path[grid.offset(Pos::new(0, 0)).unwrap()]);
    }

    #[test]
    fn obstruction_can_cause_loop() {
        let (grid, start) = parse_lab(EXAMPLE).unwrap();
        assert!(patrol(&grid, start, Some(Pos::new(3, 6))).is_none());
        assert!(patrol(&grid, start, Some(Pos::new(1, 1))).is_some());
        assert_eq!(loop_obstructions(&grid, start).unwrap(), 6);
    }

    #[test]
    fn closed_room_is_a_loop() {
        let (grid, start) = parse_lab("####\n#..#\n#^.#\n####").unwrap();
        assert!(patrol(&grid, start, None).is_none());
        assert!(matches!(solve(1, "####\n#..#\n#^.#\n####"), Err(Error::NoSolution(_))));
    }

    #[test]
    fn missing_guard_is_malformed() {
        assert!(matches!(parse_lab("..\n.#"), Err(Error::Malformed(_))));
        assert!(matches!(parse_lab("..\n.>"), Err(Error::UnexpectedCell { .. })));
    }
}
