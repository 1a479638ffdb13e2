//! Day 3: Mull It Over.

use crate::error::{parse, Result};
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

pub fn scan(memory: &str) -> Result<Vec<Instruction>> {
    let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is valid");
    pattern
        .captures_iter(memory)
        .map(|m| {
            Ok(match &m[0] {
                "do()" => Instruction::Do,
                "don't()" => Instruction::Dont,
                _ => Instruction::Mul(parse(&m[1])?, parse(&m[2])?),
            })
        })
        .collect()
}

/// Sums the products, honouring `do()`/`don't()` only when asked to.
pub fn execute(instructions: &[Instruction], conditionals: bool) -> u64 {
    let mut enabled = true;
    instructions
        .iter()
        .map(|instruction| match *instruction {
            Instruction::Do => {enabled = true; 0},
            Instruction::Dont => {if conditionals {enabled = false}; 0},
            Instruction::Mul(x, y) => if enabled {x * y} else {0},
        })
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(execute(&scan(input)?, part == 2).to_string())
}
