//! Day 2: Red-Nosed Reports.

use crate::error::{parse, Result};
use itertools::Itertools;

pub fn parse_reports(input: &str) -> Result<Vec<Vec<i32>>> {
    input
        .trim()
        .lines()
        .map(|line| line.split_ascii_whitespace().map(parse).collect())
        .collect()
}

/// Index of the first pair of levels that breaks the report's trend.
///
/// The trend is taken from the first pair, so a bad first pair yields `Some(0)`.
pub fn first_bad_level(levels: &[i32]) -> Option<usize> {
    let trend = match levels {
        [first, second, ..] => (first - second).signum(),
        _ => return None,
    };
    levels
        .iter()
        .tuple_windows()
        .position(|(x, y)| {
            let diff = x - y;
            diff.signum() != trend || !(1..=3).contains(&diff.abs())
        })
}

pub fn is_safe(levels: &[i32]) -> bool {
    first_bad_level(levels).is_none()
}

pub fn is_safe_tolerant(levels: &[i32]) -> bool {
    let Some(bad) = first_bad_level(levels) else {return true};
    [bad, bad + 1, bad.saturating_sub(1), 0].into_iter().unique().any(|skip| {
        let mut dampened = levels.to_vec();
        dampened.remove(skip);
        is_safe(&dampened)
    })
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let reports = parse_reports(input)?;
    let check = if part == 1 {is_safe} else {is_safe_tolerant};
    Ok(reports.iter().filter(|levels| check(levels)).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn finds_bad_levels() {
        let reports = parse_reports(EXAMPLE).unwrap();
        let bad = reports.iter().map(|r| first_bad_level(r)).collect::<Vec<_>>();
        assert_eq!(bad, [None, Some(1), Some(2), Some(1), Some(2), None]);
    }

    #[test]
    fn strict_and_tolerant_safety() {
        let reports = parse_reports(EXAMPLE).unwrap();
        let strict = reports.iter().map(|r| is_safe(r)).collect::<Vec<_>>();
        assert_eq!(strict, [true, false, false, false, false, true]);
        let tolerant = reports.iter().map(|r| is_safe_tolerant(r)).collect::<Vec<_>>();
        assert_eq!(tolerant, [true, false, false, true, true, true]);
    }

    #[test]
    fn tolerates_either_end() {
        assert!(is_safe_tolerant(&[14, 13, 15, 17, 19, 21]));
        assert!(is_safe_tolerant(&[13, 15, 17, 19, 21, 21]));
        assert!(is_safe_tolerant(&[14, 10, 17, 19, 21]));
        assert!(is_safe_tolerant(&[3, 1, 2, 5, 6]));
        assert!(!is_safe_tolerant(&[1, 5, 9, 13]));
    }
}
