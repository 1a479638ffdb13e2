//! Day 16: Reindeer Maze.

use crate::error::{Error, Result};
use crate::grid::{Dir, Grid, Pos};
use arrayvec::ArrayVec;
use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const STEP: u64 = 1;
const TURN: u64 = 1000;

pub struct Maze {
    grid: Grid,
    start: Pos,
    end: Pos,
}

pub fn parse_maze(input: &str) -> Result<Maze> {
    let grid = Grid::parse(input)?;
    grid.check(|c| matches!(c, b'#' | b'.' | b'S' | b'E'))?;
    let start = grid.find(b'S').ok_or_else(|| Error::malformed("maze has no start"))?;
    let end = grid.find(b'E').ok_or_else(|| Error::malformed("maze has no end"))?;
    Ok(Maze { grid, start, end })
}

/// Shortest-path costs from the start over (tile, facing) states, plus every
/// state each one was optimally reached from.
struct Search {
    cost: Vec<u64>,
    came_from: Vec<ArrayVec<usize, 3>>,
}

impl Maze {
    fn state(&self, pos: Pos, dir: Dir) -> Option<usize> {
        self.grid.offset(pos).map(|at| at * 4 + dir.index())
    }

    fn search(&self) -> Search {
        let states = self.grid.len() * 4;
        let mut cost = vec![u64::MAX; states];
        let mut came_from = vec![ArrayVec::new(); states];
        let mut queue = BinaryHeap::new();
        if let Some(s) = self.state(self.start, Dir::Right) {
            cost[s] = 0;
            queue.push(Reverse((0, self.start, Dir::Right)));
        }
        while let Some(Reverse((c, pos, dir))) = queue.pop() {
            let Some(from) = self.state(pos, dir) else {continue};
            if c > cost[from] {
                continue;
            }
            let forward = pos + dir.delta();
            let moves = [
                (forward, dir, c + STEP),
                (pos, dir.turn_left(), c + TURN),
                (pos, dir.turn_right(), c + TURN),
            ];
            for (next, next_dir, next_cost) in moves {
                if self.grid.get(next).map_or(true, |cell| cell == b'#') {
                    continue;
                }
                let Some(to) = self.state(next, next_dir) else {continue};
                if next_cost < cost[to] {
                    cost[to] = next_cost;
                    came_from[to].clear();
                    came_from[to].push(from);
                    queue.push(Reverse((next_cost, next, next_dir)));
                } else if next_cost == cost[to] && !came_from[to].contains(&from) {
                    came_from[to].push(from);
                }
            }
        }
        Search { cost, came_from }
    }

    fn end_states<'a>(&'a self, search: &'a Search) -> impl Iterator<Item = (usize, u64)> + 'a {
        Dir::ALL
            .into_iter()
            .filter_map(|dir| self.state(self.end, dir))
            .map(|s| (s, search.cost[s]))
    }

    pub fn lowest_score(&self) -> Option<u64> {
        let search = self.search();
        self.end_states(&search).map(|(_, c)| c).min().filter(|&c| c != u64::MAX)
    }

    /// Tiles lying on at least one lowest-scoring path.
    pub fn best_seats(&self) -> Option<usize> {
        let search = self.search();
        let best = self.end_states(&search).map(|(_, c)| c).min().filter(|&c| c != u64::MAX)?;
        let mut on_path = bitvec![0; search.cost.len()];
        let mut stack = self
            .end_states(&search)
            .filter(|&(_, c)| c == best)
            .map(|(s, _)| s)
            .collect::<Vec<_>>();
        while let Some(s) = stack.pop() {
            if !on_path.replace(s, true) {
                stack.extend(search.came_from[s].iter().copied());
            }
        }
        let mut tiles = on_path.iter_ones().map(|s| s / 4).collect::<Vec<_>>();
        tiles.dedup();
        Some(tiles.len())
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let maze = parse_maze(input)?;
    let answer = if part == 1 {
        maze.lowest_score().map(|c| c.to_string())
    } else {
        maze.best_seats().map(|n| n.to_string())
    };
    answer.ok_or_else(|| Error::no_solution("the end cannot be reached"))
}
