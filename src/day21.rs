//! Day 21: Keypad Conundrum.

use crate::error::{parse, Error, Result};
use crate::grid::{Dir, Pos};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

const NUMERIC: &str = "789\n456\n123\n 0A";
const DIRECTIONAL: &str = " ^A\n<v>";

/// Button positions; a space in the layout is the gap no arm may point at.
pub struct Keypad {
    keys: FxHashMap<u8, Pos>,
    gap: Option<Pos>,
}

impl Keypad {
    pub fn parse(layout: &str) -> Keypad {
        let mut keys = FxHashMap::default();
        let mut gap = None;
        for (y, row) in layout.lines().enumerate() {
            for (x, key) in row.bytes().enumerate() {
                let pos = Pos::new(x as i32, y as i32);
                if key == b' ' {gap = Some(pos)} else {keys.insert(key, pos);}
            }
        }
        Keypad { keys, gap }
    }

    pub fn numeric() -> Keypad {
        Keypad::parse(NUMERIC)
    }

    pub fn directional() -> Keypad {
        Keypad::parse(DIRECTIONAL)
    }

    pub fn position(&self, key: u8) -> Result<Pos> {
        self.keys
            .get(&key)
            .copied()
            .ok_or_else(|| Error::malformed(format!("no {:?} key on keypad", key as char)))
    }

    /// Arrow sequences moving the arm from `from` to `to`: all horizontal
    /// moves first, or all vertical moves first. Zig-zagging never helps, as
    /// every change of direction costs extra presses further up the chain.
    pub fn moves(&self, from: u8, to: u8) -> Result<ArrayVec<Vec<u8>, 2>> {
        let (a, b) = (self.position(from)?, self.position(to)?);
        let d = b - a;
        let across = if d.x < 0 {Dir::Left} else {Dir::Right};
        let along = if d.y < 0 {Dir::Up} else {Dir::Down};
        let horizontal = vec![across.arrow(); d.x.unsigned_abs() as usize];
        let vertical = vec![along.arrow(); d.y.unsigned_abs() as usize];

        let mut moves = ArrayVec::new();
        if self.gap != Some(Pos::new(b.x, a.y)) {
            moves.push([horizontal.as_slice(), vertical.as_slice()].concat());
        }
        if self.gap != Some(Pos::new(a.x, b.y)) {
            let vertical_first = [vertical.as_slice(), horizontal.as_slice()].concat();
            if !moves.contains(&vertical_first) {
                moves.push(vertical_first);
            }
        }
        Ok(moves)
    }
}

/// A numeric keypad behind a chain of directional keypads.
pub struct Chain {
    numeric: Keypad,
    directional: Keypad,
    /// Keyed by (numeric, from, to, depth).
    memo: FxHashMap<(bool, u8, u8, usize), u64>,
}

impl Chain {
    pub fn new() -> Chain {
        Chain { numeric: Keypad::numeric(), directional: Keypad::directional(), memo: FxHashMap::default() }
    }

    /// Fewest button presses by the human to type `code` on the numeric
    /// keypad through `robots` robot-held directional keypads.
    pub fn shortest(&mut self, code: &[u8], robots: usize) -> Result<u64> {
        self.typing_cost(true, code, robots + 1)
    }

    /// Presses on the outermost keypad to type `keys` on a keypad that is
    /// `depth` keypads away from the human.
    fn typing_cost(&mut self, numeric: bool, keys: &[u8], depth: usize) -> Result<u64> {
        if depth == 0 {
            return Ok(keys.len() as u64);
        }
        let mut from = b'A';
        let mut total = 0;
        for &to in keys {
            total += self.step_cost(numeric, from, to, depth)?;
            from = to;
        }
        Ok(total)
    }

    fn step_cost(&mut self, numeric: bool, from: u8, to: u8, depth: usize) -> Result<u64> {
        if let Some(&cost) = self.memo.get(&(numeric, from, to, depth)) {
            return Ok(cost);
        }
        let pad = if numeric {&self.numeric} else {&self.directional};
        let mut best = u64::MAX;
        for mut moves in pad.moves(from, to)? {
            moves.push(b'A');
            best = best.min(self.typing_cost(false, &moves, depth - 1)?);
        }
        self.memo.insert((numeric, from, to, depth), best);
        Ok(best)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::new()
    }
}

pub fn parse_codes(input: &str) -> Result<Vec<&str>> {
    let numeric = Keypad::numeric();
    input
        .split_whitespace()
        .map(|code| {
            for key in code.bytes() {
                numeric.position(key)?;
            }
            Ok(code)
        })
        .collect()
}

pub fn complexity(chain: &mut Chain, code: &str, robots: usize) -> Result<u64> {
    let value: u64 = parse(code.trim_end_matches('A'))?;
    Ok(chain.shortest(code.as_bytes(), robots)? * value)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = if part == 1 {2} else {25};
    let mut chain = Chain::new();
    let mut total = 0;
    for code in parse_codes(input)? {
        total += complexity(&mut chain, code, robots)?;
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "029A\n980A\n179A\n456A\n379A\n";

    #[test]
    fn keypad_layouts() {
        let numeric = Keypad::numeric();
        assert_eq!(numeric.keys.len(), 11);
        assert_eq!(numeric.position(b'7').unwrap(), Pos::new(0, 0));
        assert_eq!(numeric.gap, Some(Pos::new(0, 3)));
        let directional = Keypad::directional();
        assert_eq!(directional.keys.len(), 5);
        assert_eq!(directional.gap, Some(Pos::new(0, 0)));
        assert_eq!(directional.position(b'v').unwrap(), Pos::new(1, 1));
    }

    #[test]
    fn moves_avoid_the_gap() {
        let numeric = Keypad::numeric();
        assert_eq!(numeric.moves(b'A', b'0').unwrap().as_slice(), [b"<".to_vec()]);
        assert_eq!(numeric.moves(b'2', b'9').unwrap().as_slice(), [b">^^".to_vec(), b"^^>".to_vec()]);
        assert_eq!(numeric.moves(b'A', b'4').unwrap().as_slice(), [b"^^<<".to_vec()]);
        assert_eq!(numeric.moves(b'5', b'5').unwrap().as_slice(), [vec![]]);
    }

    #[test]
    fn example_sequence_lengths() {
        let mut chain = Chain::new();
        let lengths = parse_codes(EXAMPLE)
            .unwrap()
            .iter()
            .map(|code| chain.shortest(code.as_bytes(), 2).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(lengths, [68, 60, 68, 64, 64]);
        assert_eq!(chain.shortest(b"029A", 0).unwrap(), 12);
        assert_eq!(chain.shortest(b"029A", 1).unwrap(), 28);
    }

    #[test]
    fn example_complexity() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "126384");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "154115708116294");
    }

    #[test]
    fn puzzle_codes() {
        assert_eq!(solve(1, "671A\n826A\n670A\n085A\n283A\n").unwrap(), "182844");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_codes("12B").is_err());
    }
}
