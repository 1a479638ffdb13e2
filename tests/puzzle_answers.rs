//! Answers for the personal puzzle inputs. Those inputs are not redistributed,
//! so these run only with `--ignored` once `inputs/day{N}.in` is in place.

use advent2024::{read_input, solve};
use std::path::Path;

fn answer(day: u8, part: u8) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("inputs");
    let input = read_input(&dir, day, None).unwrap();
    solve(day, part, &input).unwrap()
}

macro_rules! puzzle {
    ($name:ident, $day:expr, $part:expr, $expected:expr) => {
        #[test]
        #[ignore = "needs the personal puzzle input"]
        fn $name() {
            assert_eq!(answer($day, $part), $expected);
        }
    };
}

puzzle!(day01_part1, 1, 1, "2176849");
puzzle!(day01_part2, 1, 2, "23384288");
puzzle!(day02_part1, 2, 1, "549");
puzzle!(day02_part2, 2, 2, "589");
puzzle!(day03_part1, 3, 1, "196826776");
puzzle!(day03_part2, 3, 2, "106780429");
puzzle!(day04_part1, 4, 1, "2662");
puzzle!(day04_part2, 4, 2, "2034");
puzzle!(day05_part1, 5, 1, "4185");
puzzle!(day05_part2, 5, 2, "4480");
puzzle!(day06_part1, 6, 1, "4973");
puzzle!(day06_part2, 6, 2, "1482");
puzzle!(day07_part1, 7, 1, "10741443549536");
puzzle!(day08_part1, 8, 1, "244");
puzzle!(day09_part1, 9, 1, "6366665108136");
puzzle!(day09_part2, 9, 2, "6398065450842");
puzzle!(day10_part1, 10, 1, "794");
puzzle!(day10_part2, 10, 2, "1706");
puzzle!(day11_part1, 11, 1, "183620");
puzzle!(day11_part2, 11, 2, "220377651399268");
puzzle!(day12_part1, 12, 1, "1549354");
puzzle!(day13_part1, 13, 1, "26005");
puzzle!(day14_part1, 14, 1, "225810288");
puzzle!(day15_part1, 15, 1, "1495147");
puzzle!(day16_part1, 16, 1, "122492");
puzzle!(day17_part1, 17, 1, "4,0,4,7,1,2,7,1,6");
puzzle!(day18_part1, 18, 1, "372");
puzzle!(day18_part2, 18, 2, "25,6");
puzzle!(day19_part1, 19, 1, "319");
puzzle!(day19_part2, 19, 2, "692575723305545");
puzzle!(day20_part1, 20, 1, "1372");
puzzle!(day21_part1, 21, 1, "182844");
puzzle!(day22_part1, 22, 1, "20068964552");
puzzle!(day22_part2, 22, 2, "2246");
puzzle!(day23_part1, 23, 1, "1344");
puzzle!(day23_part2, 23, 2, "ab,al,cq,cr,da,db,dr,fw,ly,mn,od,py,uh");
puzzle!(day24_part1, 24, 1, "53190357879014");
puzzle!(day24_part2, 24, 2, "bks,hnd,nrn,tdv,tjp,z09,z16,z23");
puzzle!(day25_part1, 25, 1, "3344");
