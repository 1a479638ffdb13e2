//! Day 13: Claw Contraption.

use crate::error::{parse, Error, Result};
use regex::Regex;

const FAR_AWAY: i64 = 10_000_000_000_000;
const MAX_PRESSES: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Machine {
    pub a: (i64, i64),
    pub b: (i64, i64),
    pub prize: (i64, i64),
}

impl Machine {
    /// Cheapest presses of A and B landing exactly on the prize, pressing
    /// neither button more than `limit` times.
    pub fn presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (px, py) = self.prize;
        let det = ax * by - ay * bx;
        if det == 0 {
            log::debug!("buttons of {self:?} are collinear");
            return self.collinear_presses(limit);
        }
        let a = px * by - py * bx;
        let b = ax * py - ay * px;
        if a % det != 0 || b % det != 0 {
            return None;
        }
        let (a, b) = (a / det, b / det);
        let within = |n: i64| n >= 0 && limit.map_or(true, |limit| n <= limit);
        (within(a) && within(b)).then_some((a, b))
    }

    fn lands(&self, (a, b): (i64, i64)) -> bool {
        a * self.a.0 + b * self.b.0 == self.prize.0 && a * self.a.1 + b * self.b.1 == self.prize.1
    }

    /// Both buttons move along one line, so many press counts may land on
    /// the prize. Cost is linear along the solutions, so the cheapest one
    /// presses either A or B as few times as possible.
    fn collinear_presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        if let Some(limit) = limit {
            return (0..=limit)
                .flat_map(|a| (0..=limit).map(move |b| (a, b)))
                .filter(|&presses| self.lands(presses))
                .min_by_key(|&presses| cost(presses));
        }
        // the axis along which at least one button moves
        let (a, b, p) = if self.a.0 != 0 || self.b.0 != 0 {
            (self.a.0, self.b.0, self.prize.0)
        } else {
            (self.a.1, self.b.1, self.prize.1)
        };
        let fewest_a = (0..=b.abs()).find_map(|n| {
            let rest = p - n * a;
            match b {
                0 => (rest == 0).then_some((n, 0)),
                _ => (rest % b == 0 && rest / b >= 0).then_some((n, rest / b)),
            }
        });
        let fewest_b = (0..=a.abs()).find_map(|n| {
            let rest = p - n * b;
            match a {
                0 => (rest == 0).then_some((0, n)),
                _ => (rest % a == 0 && rest / a >= 0).then_some((rest / a, n)),
            }
        });
        [fewest_a, fewest_b]
            .into_iter()
            .flatten()
            .filter(|&presses| self.lands(presses))
            .min_by_key(|&presses| cost(presses))
    }

    pub fn moved_far_away(self) -> Machine {
        Machine { prize: (self.prize.0 + FAR_AWAY, self.prize.1 + FAR_AWAY), ..self }
    }
}

pub fn cost((a, b): (i64, i64)) -> i64 {
    3 * a + b
}

pub fn parse_machines(input: &str) -> Result<Vec<Machine>> {
    let pattern = Regex::new(
        r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
    )
    .expect("machine pattern is valid");
    let machines = pattern
        .captures_iter(input)
        .map(|m| {
            Ok(Machine {
                a: (parse(&m[1])?, parse(&m[2])?),
                b: (parse(&m[3])?, parse(&m[4])?),
                prize: (parse(&m[5])?, parse(&m[6])?),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let expected = input.matches("Prize").count();
    if machines.len() != expected {
        return Err(Error::malformed(format!("parsed {} of {expected} machines", machines.len())));
    }
    Ok(machines)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let machines = parse_machines(input)?;
    let tokens: i64 = if part == 1 {
        machines.iter().filter_map(|m| m.presses(Some(MAX_PRESSES))).map(cost).sum()
    } else {
        machines
            .iter()
            .filter_map(|m| m.moved_far_away().presses(None))
            .map(cost)
            .sum()
    };
    Ok(tokens.to_string())
}
