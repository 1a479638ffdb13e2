//! Day 15: Warehouse Woes.

use crate::error::{Error, Result};
use crate::grid::{Dir, Grid, Pos};

pub fn parse_warehouse(input: &str) -> Result<(Grid, Vec<Dir>)> {
    let mut lines = input.trim().lines();
    let map = lines
        .by_ref()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let grid = Grid::parse(&map)?;
    grid.check(|c| matches!(c, b'#' | b'.' | b'O' | b'@'))?;
    let moves = lines
        .flat_map(|line| line.trim().bytes())
        .map(|c| Dir::from_arrow(c).ok_or_else(|| Error::malformed(format!("{:?} is not a move", c as char))))
        .collect::<Result<_>>()?;
    Ok((grid, moves))
}

/// Doubles every tile horizontally; boxes become `[]`.
pub fn widen(grid: &Grid) -> Grid {
    let mut wide = Grid::filled(grid.width() * 2, grid.height(), b'.');
    for pos in grid.positions() {
        let pair = match grid[pos] {
            b'#' => *b"##",
            b'O' => *b"[]",
            b'@' => *b"@.",
            _ => *b"..",
        };
        let left = Pos::new(pos.x * 2, pos.y);
        wide[left] = pair[0];
        wide[left + Dir::Right.delta()] = pair[1];
    }
    wide
}

/// Moves the robot one step if everything in its way can be pushed along.
/// Returns the robot's new position.
pub fn push(grid: &mut Grid, robot: Pos, dir: Dir) -> Pos {
    let step = dir.delta();
    let mut moving = vec![robot];
    let mut i = 0;
    while let Some(&pos) = moving.get(i) {
        i += 1;
        let next = pos + step;
        let also = match grid.get(next) {
            Some(b'O') => [Some(next), None],
            Some(b'[') => [Some(next), Some(next + Dir::Right.delta())],
            Some(b']') => [Some(next), Some(next + Dir::Left.delta())],
            Some(b'.') => [None, None],
            _ => return robot,
        };
        for p in also.into_iter().flatten() {
            if !moving.contains(&p) {
                moving.push(p);
            }
        }
    }
    let cells = moving.iter().map(|&p| (p, grid[p])).collect::<Vec<_>>();
    for &(p, _) in &cells {
        grid[p] = b'.';
    }
    for &(p, c) in &cells {
        grid[p + step] = c;
    }
    robot + step
}

pub fn run(grid: &mut Grid, moves: &[Dir]) -> Result<()> {
    let mut robot = grid.find(b'@').ok_or_else(|| Error::malformed("no robot in the warehouse"))?;
    for &dir in moves {
        robot = push(grid, robot, dir);
    }
    Ok(())
}

/// Sum of `100 * y + x` over boxes, measured at their left edge.
pub fn gps_sum(grid: &Grid) -> i64 {
    grid.positions()
        .filter(|&p| matches!(grid[p], b'O' | b'['))
        .map(|p| 100 * p.y as i64 + p.x as i64)
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (grid, moves) = parse_warehouse(input)?;
    let mut grid = if part == 1 {grid} else {widen(&grid)};
    run(&mut grid, &moves)?;
    Ok(gps_sum(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const EXAMPLE: &str = "\
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    #[test]
    fn small_warehouse() {
        let (mut grid, moves) = parse_warehouse(SMALL).unwrap();
        assert_eq!(moves.len(), 15);
        assert_eq!(moves[0], Dir::Left);
        assert_eq!(grid.find(b'@'), Some(Pos::new(2, 2)));
        run(&mut grid, &moves).unwrap();
        assert_eq!(
            grid.to_string(),
            "########\n#....OO#\n##.....#\n#.....O#\n#.#O@..#\n#...O..#\n#...O..#\n########"
        );
        assert_eq!(gps_sum(&grid), 2028);
    }

    #[test]
    fn larger_example() {
        let (mut grid, moves) = parse_warehouse(EXAMPLE).unwrap();
        assert_eq!(moves.len(), 700);
        run(&mut grid, &moves).unwrap();
        assert_eq!(
            grid.to_string(),
            "##########\n#.O.O.OOO#\n#........#\n#OO......#\n#OO@.....#\n\
             #O#.....O#\n#O.....OO#\n#O.....OO#\n#OO....OO#\n##########"
        );
        assert_eq!(gps_sum(&grid), 10092);
    }

    #[test]
    fn wide_boxes_push_each_other() {
        let (grid, moves) = parse_warehouse("#######\n#...#.#\n#.....#\n#..OO@#\n#..O..#\n#.....#\n#######\n\n<vv<<^^<<^^").unwrap();
        let mut grid = widen(&grid);
        assert_eq!(grid.to_string().lines().nth(3), Some("##....[][]@.##"));
        run(&mut grid, &moves).unwrap();
        assert_eq!(
            grid.to_string(),
            "##############\n##...[].##..##\n##...@.[]...##\n##....[]....##\n##..........##\n##..........##\n##############"
        );
    }

    #[test]
    fn wide_example() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "9021");
    }

    #[test]
    fn walls_stop_the_whole_stack() {
        let (mut grid, _) = parse_warehouse("#####\n#@OO#\n#####\n\n>").unwrap();
        assert_eq!(push(&mut grid, Pos::new(1, 1), Dir::Right), Pos::new(1, 1));
        assert_eq!(grid.to_string(), "#####\n#@OO#\n#####");
    }
}
