//! Day 7: Bridge Repair.

use crate::error::{parse, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
    Concat,
}

impl Op {
    fn apply(self, x: u64, y: u64) -> Option<u64> {
        match self {
            Op::Add => x.checked_add(y),
            Op::Mul => x.checked_mul(y),
            Op::Concat => {
                let digits = y.checked_ilog10().unwrap_or(0) + 1;
                x.checked_mul(10u64.checked_pow(digits)?)?.checked_add(y)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub goal: u64,
    pub numbers: Vec<u64>,
}

pub fn parse_equations(input: &str) -> Result<Vec<Equation>> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (goal, numbers) = line
                .split_once(':')
                .ok_or_else(|| Error::malformed(format!("no colon in {line:?}")))?;
            Ok(Equation {
                goal: parse(goal)?,
                numbers: numbers.split_whitespace().map(parse).collect::<Result<_>>()?,
            })
        })
        .collect()
}

/// First operator sequence making `numbers`, evaluated left to right, equal
/// `goal`. Operators are tried in the order `+`, `*`, `||`.
pub fn find_operators(goal: u64, numbers: &[u64], concat: bool) -> Option<Vec<Op>> {
    let Some((&first, rest)) = numbers.split_first() else {
        return (goal == 0).then(Vec::new);
    };
    let ops: &[Op] = if concat {&[Op::Add, Op::Mul, Op::Concat]} else {&[Op::Add, Op::Mul]};
    let mut found = Vec::with_capacity(rest.len());
    let can_shrink = rest.contains(&0);
    search(goal, first, rest, ops, can_shrink, &mut found).then_some(found)
}

fn search(goal: u64, value: u64, rest: &[u64], ops: &[Op], can_shrink: bool, found: &mut Vec<Op>) -> bool {
    let Some((&next, rest)) = rest.split_first() else {
        return value == goal;
    };
    // only a multiplication by zero ever makes the value smaller
    if value > goal && !can_shrink {
        return false;
    }
    for &op in ops {
        let Some(value) = op.apply(value, next) else {continue};
        found.push(op);
        if search(goal, value, rest, ops, can_shrink, found) {
            return true;
        }
        found.pop();
    }
    false
}

pub fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| find_operators(eq.goal, &eq.numbers, concat).is_some())
        .map(|eq| eq.goal)
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(calibration(&parse_equations(input)?, part == 2).to_string())
}
