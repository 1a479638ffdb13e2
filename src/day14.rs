//! Day 14: Restroom Redoubt.

use crate::error::{parse, Error, Result};
use crate::grid::Pos;
use bitvec::prelude::*;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Robot {
    pub pos: Pos,
    pub vel: Pos,
}

pub fn parse_robots(input: &str) -> Result<Vec<Robot>> {
    let pattern = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("robot pattern is valid");
    input
        .trim()
        .lines()
        .map(|line| {
            let m = pattern
                .captures(line.trim())
                .ok_or_else(|| Error::malformed(format!("cannot parse robot {line:?}")))?;
            Ok(Robot {
                pos: Pos::new(parse(&m[1])?, parse(&m[2])?),
                vel: Pos::new(parse(&m[3])?, parse(&m[4])?),
            })
        })
        .collect()
}

/// Room sizes of the example and of the puzzle.
const SMALL: Pos = Pos::new(11, 7);
const LARGE: Pos = Pos::new(101, 103);

/// The example room if every robot starts inside it, otherwise the puzzle room.
pub fn room_size(robots: &[Robot]) -> Result<Pos> {
    let inside = |room: Pos| {
        robots
            .iter()
            .all(|r| (0..room.x).contains(&r.pos.x) && (0..room.y).contains(&r.pos.y))
    };
    if robots.is_empty() {
        return Err(Error::malformed("no robots"));
    }
    let room = if inside(SMALL) {SMALL} else {LARGE};
    if !inside(room) {
        return Err(Error::malformed(format!("robot starts outside the {}x{} room", room.x, room.y)));
    }
    Ok(room)
}

impl Robot {
    pub fn after(self, seconds: i32, room: Pos) -> Pos {
        let moved = self.pos + self.vel * seconds;
        Pos::new(moved.x.rem_euclid(room.x), moved.y.rem_euclid(room.y))
    }
}

/// Robots per quadrant (top left, top right, bottom left, bottom right);
/// the middle row and column belong to none.
pub fn quadrants(positions: &[Pos], room: Pos) -> [usize; 4] {
    let (mx, my) = (room.x / 2, room.y / 2);
    let mut counts = [0; 4];
    for p in positions {
        if p.x == mx || p.y == my {
            continue;
        }
        counts[(p.x > mx) as usize + 2 * (p.y > my) as usize] += 1;
    }
    counts
}

pub fn render(positions: &[Pos], room: Pos) -> String {
    (0..room.y)
        .map(|y| {
            (0..room.x)
                .map(|x| match positions.iter().filter(|&&p| p == Pos::new(x, y)).count() {
                    0 => '.',
                    n => char::from_digit(n as u32, 36).unwrap_or('#'),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First second at which no two robots share a tile.
pub fn first_distinct(robots: &[Robot], room: Pos) -> Option<i32> {
    let mut taken = bitvec![0; (room.x * room.y) as usize];
    (0..room.x * room.y).find(|&t| {
        taken.fill(false);
        robots.iter().all(|r| {
            let p = r.after(t, room);
            !taken.replace((p.y * room.x + p.x) as usize, true)
        })
    })
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = parse_robots(input)?;
    let room = room_size(&robots)?;
    log::debug!("room is {}x{}", room.x, room.y);
    if part == 1 {
        let positions = robots.iter().map(|r| r.after(100, room)).collect::<Vec<_>>();
        Ok(quadrants(&positions, room).iter().product::<usize>().to_string())
    } else {
        let t = first_distinct(&robots, room)
            .ok_or_else(|| Error::no_solution("robots always overlap"))?;
        Ok(t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn parses_and_sizes_room() {
        let robots = parse_robots(EXAMPLE).unwrap();
        assert_eq!(robots.len(), 12);
        assert_eq!(robots[11], Robot { pos: Pos::new(9, 5), vel: Pos::new(-3, -3) });
        assert_eq!(room_size(&robots).unwrap(), Pos::new(11, 7));
    }

    #[test]
    fn puzzle_room_even_when_no_robot_reaches_its_edge() {
        let input = "\
p=10,10 v=0,0
p=90,10 v=0,0
p=10,90 v=0,0
p=90,90 v=0,0
p=0,0 v=1,1
p=0,0 v=1,0
";
        let robots = parse_robots(input).unwrap();
        let room = room_size(&robots).unwrap();
        assert_eq!(room, Pos::new(101, 103));
        assert_eq!(robots[4].after(100, room), Pos::new(100, 100));
        let moved = robots.iter().map(|r| r.after(100, room)).collect::<Vec<_>>();
        assert_eq!(quadrants(&moved, room), [1, 2, 1, 2]);
        assert_eq!(solve(1, input).unwrap(), "4");
    }

    #[test]
    fn robots_outside_the_room_are_rejected() {
        let robots = parse_robots("p=101,3 v=1,1").unwrap();
        assert!(matches!(room_size(&robots), Err(Error::Malformed(_))));
        let robots = parse_robots("p=-1,3 v=1,1").unwrap();
        assert!(room_size(&robots).is_err());
        assert!(room_size(&[]).is_err());
    }

    #[test]
    fn teleports_at_the_wall() {
        let robot = Robot { pos: Pos::new(9, 0), vel: Pos::new(1, 0) };
        let room = Pos::new(11, 7);
        assert_eq!(robot.after(1, room), Pos::new(10, 0));
        assert_eq!(robot.after(2, room), Pos::new(0, 0));
    }

    #[test]
    fn positions_after_100_seconds() {
        let robots = parse_robots(EXAMPLE).unwrap();
        let room = Pos::new(11, 7);
        let start = robots.iter().map(|r| r.pos).collect::<Vec<_>>();
        assert_eq!(
            render(&start, room),
            "1.12.......\n...........\n...........\n......11.11\n1.1........\n.........1.\n.......1..."
        );
        let moved = robots.iter().map(|r| r.after(100, room)).collect::<Vec<_>>();
        assert_eq!(
            render(&moved, room),
            "......2..1.\n...........\n1..........\n.11........\n.....1.....\n...12......\n.1....1...."
        );
        assert_eq!(quadrants(&moved, room), [1, 3, 4, 1]);
        assert_eq!(solve(1, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn finds_first_second_without_overlap() {
        let robots = parse_robots("p=0,0 v=1,0\np=0,0 v=2,0\np=2,1 v=0,0").unwrap();
        assert_eq!(first_distinct(&robots, Pos::new(3, 2)), Some(1));
        assert_eq!(solve(2, "p=0,0 v=1,0\np=0,0 v=2,0\np=2,1 v=0,0").unwrap(), "1");
    }
}
