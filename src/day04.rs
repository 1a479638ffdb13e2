//! Day 4: Ceres Search.

use crate::error::Result;
use crate::grid::{Grid, Pos};

/// Occurrences of `word` in any of the eight directions.
pub fn count_word(grid: &Grid, word: &[u8]) -> usize {
    let Some(&first) = word.first() else {return 0};
    grid.find_all(first)
        .map(|start| {
            (-1..=1)
                .flat_map(|dy| (-1..=1).map(move |dx| Pos::new(dx, dy)))
                .filter(|&step| step != Pos::default())
                .filter(|&step| {
                    word.iter().enumerate().skip(1).all(|(i, &letter)| {
                        grid.get(start + step * i as i32) == Some(letter)
                    })
                })
                .count()
        })
        .sum()
}

/// `MAS` written twice across an `A`, in either direction on each diagonal.
pub fn count_x_mas(grid: &Grid) -> usize {
    let is_mas = |a: Option<u8>, b: Option<u8>| {
        matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
    };
    grid.find_all(b'A')
        .filter(|&p| {
            is_mas(grid.get(p + Pos::new(-1, -1)), grid.get(p + Pos::new(1, 1)))
                && is_mas(grid.get(p + Pos::new(1, -1)), grid.get(p + Pos::new(-1, 1)))
        })
        .count()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let answer = if part == 1 {count_word(&grid, b"XMAS")} else {count_x_mas(&grid)};
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "..X...\n.SAMX.\n.A..A.\nXMAS.S\n.X....";
    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn counts_in_every_direction() {
        assert_eq!(count_word(&Grid::parse(SMALL).unwrap(), b"XMAS"), 4);
        assert_eq!(count_word(&Grid::parse(EXAMPLE).unwrap(), b"XMAS"), 18);
    }

    #[test]
    fn counts_crosses() {
        assert_eq!(count_x_mas(&Grid::parse(EXAMPLE).unwrap()), 9);
        assert_eq!(count_x_mas(&Grid::parse("M.S\n.A.\nM.S").unwrap()), 1);
        assert_eq!(count_x_mas(&Grid::parse("M.M\n.A.\nM.S").unwrap()), 0);
    }
}
