//! Byte grids and the coordinates used to walk them.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A grid coordinate; `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn manhattan(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors(self) -> [Pos; 4] {
        Dir::ALL.map(|dir| self + dir.delta())
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Pos {
    type Output = Pos;
    fn mul(self, n: i32) -> Pos {
        Pos::new(self.x * n, self.y * n)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Clockwise, starting at `Up`.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn delta(self) -> Pos {
        match self {
            Dir::Up => Pos::new(0, -1),
            Dir::Right => Pos::new(1, 0),
            Dir::Down => Pos::new(0, 1),
            Dir::Left => Pos::new(-1, 0),
        }
    }

    pub fn turn_right(self) -> Dir {
        Dir::ALL[(self.index() + 1) % 4]
    }

    pub fn turn_left(self) -> Dir {
        Dir::ALL[(self.index() + 3) % 4]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_arrow(arrow: u8) -> Option<Dir> {
        match arrow {
            b'^' => Some(Dir::Up),
            b'>' => Some(Dir::Right),
            b'v' => Some(Dir::Down),
            b'<' => Some(Dir::Left),
            _ => None,
        }
    }

    pub fn arrow(self) -> u8 {
        b"^>v<"[self.index()]
    }
}

/// A rectangular grid of bytes, stored row by row.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parses newline-separated rows; every row must have the same length.
    pub fn parse(input: &str) -> Result<Grid> {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;
        for line in input.trim_matches(|c: char| c == '\n' || c == '\r').lines() {
            match width {
                None => width = Some(line.len()),
                Some(width) if width != line.len() => {
                    return Err(Error::malformed(format!(
                        "row {} has length {}, expected {}",
                        height,
                        line.len(),
                        width
                    )))
                }
                Some(_) => (),
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }
        match width {
            Some(width) if width > 0 => Ok(Grid { cells, width, height }),
            _ => Err(Error::malformed("empty grid")),
        }
    }

    pub fn filled(width: usize, height: usize, fill: u8) -> Grid {
        Grid {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.width as i32).contains(&pos.x) && (0..self.height as i32).contains(&pos.y)
    }

    /// Row-major index of `pos`, if it lies inside the grid.
    pub fn offset(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    pub fn pos_at(&self, offset: usize) -> Pos {
        Pos::new((offset % self.width) as i32, (offset / self.width) as i32)
    }

    pub fn get(&self, pos: Pos) -> Option<u8> {
        self.offset(pos).map(|i| self.cells[i])
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(|i| self.pos_at(i))
    }

    pub fn find(&self, cell: u8) -> Option<Pos> {
        self.cells.iter().position(|&c| c == cell).map(|i| self.pos_at(i))
    }

    pub fn find_all(&self, cell: u8) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(|(i, _)| self.pos_at(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// Fails with the position of the first cell not accepted by `valid`.
    pub fn check(&self, valid: impl Fn(u8) -> bool) -> Result<()> {
        match self.cells.iter().position(|&c| !valid(c)) {
            None => Ok(()),
            Some(i) => Err(Error::UnexpectedCell {
                found: self.cells[i] as char,
                row: i / self.width,
                col: i % self.width,
            }),
        }
    }
}

impl Index<Pos> for Grid {
    type Output = u8;
    fn index(&self, pos: Pos) -> &u8 {
        match self.offset(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{pos:?} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut u8 {
        match self.offset(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("{pos:?} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {}x{}\n{}", self.width, self.height, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_index() {
        let grid = Grid::parse("ab\ncd\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid[Pos::new(1, 0)], b'b');
        assert_eq!(grid.get(Pos::new(0, 2)), None);
        assert_eq!(grid.find(b'c'), Some(Pos::new(0, 1)));
        assert_eq!(grid.to_string(), "ab\ncd");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(Grid::parse("abc\nd"), Err(Error::Malformed(_))));
        assert!(Grid::parse("\n").is_err());
    }

    #[test]
    fn turning_goes_round() {
        assert_eq!(Dir::Up.turn_right(), Dir::Right);
        assert_eq!(Dir::Up.turn_left(), Dir::Left);
        assert_eq!(Dir::Left.turn_right().turn_right(), Dir::Right);
        assert_eq!(Dir::from_arrow(b'v').map(Dir::arrow), Some(b'v'));
    }

    #[test]
    fn check_reports_position() {
        let grid = Grid::parse("..\n.?").unwrap();
        let err = grid.check(|c| c == b'.').unwrap_err();
        assert!(matches!(err, Error::UnexpectedCell { found: '?', row: 1, col: 1 }));
    }
}
