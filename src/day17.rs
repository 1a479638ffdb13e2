//! Day 17: Chronospatial Computer.
//!
//! A 3-bit machine with three unbounded registers. Instructions are an opcode
//! followed by an operand; reading past the end of the program halts.

use crate::error::{parse, Error, Result};
use itertools::Itertools;

const MAX_STEPS: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Computer {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub program: Vec<u8>,
}

pub fn parse_computer(input: &str) -> Result<Computer> {
    let mut registers = [0; 3];
    let mut program = None;
    for line in input.trim().lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| Error::malformed(format!("cannot parse {line:?}")))?;
        match key.trim() {
            "Register A" => registers[0] = parse(value)?,
            "Register B" => registers[1] = parse(value)?,
            "Register C" => registers[2] = parse(value)?,
            "Program" => {
                let code = value.split(',').map(parse::<u8>).collect::<Result<Vec<_>>>()?;
                if let Some(bad) = code.iter().find(|&&x| x > 7) {
                    return Err(Error::malformed(format!("{bad} is not a 3-bit number")));
                }
                program = Some(code);
            }
            _ => return Err(Error::malformed(format!("unknown line {line:?}"))),
        }
    }
    let [a, b, c] = registers;
    let program = program.ok_or_else(|| Error::malformed("no program"))?;
    Ok(Computer { a, b, c, program })
}

/// Right shift that saturates to zero instead of overflowing.
fn shift(value: u64, by: u64) -> u64 {
    if by >= 64 {0} else {value >> by}
}

impl Computer {
    fn combo(&self, operand: u8) -> Result<u64> {
        match operand {
            0..=3 => Ok(operand as u64),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(Error::malformed(format!("combo operand {operand} is reserved"))),
        }
    }

    /// Runs until the instruction pointer leaves the program.
    pub fn run(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![];
        let mut ip = 0;
        for _ in 0..MAX_STEPS {
            let (Some(&op), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1)) else {
                return Ok(out);
            };
            ip += 2;
            match op {
                0 => self.a = shift(self.a, self.combo(operand)?),
                1 => self.b ^= operand as u64,
                2 => self.b = self.combo(operand)? % 8,
                3 => if self.a != 0 {ip = operand as usize},
                4 => self.b ^= self.c,
                5 => out.push((self.combo(operand)? % 8) as u8),
                6 => self.b = shift(self.a, self.combo(operand)?),
                7 => self.c = shift(self.a, self.combo(operand)?),
                _ => return Err(Error::malformed(format!("unknown opcode {op}"))),
            }
        }
        Err(Error::no_solution(format!("program did not halt within {MAX_STEPS} steps")))
    }

    pub fn output_with(&self, a: u64) -> Result<Vec<u8>> {
        Computer { a, ..self.clone() }.run()
    }
}

/// Lowest value of register A that makes the program print itself.
///
/// Each output digit depends on the low bits of A at that point, and A loses
/// three bits per iteration, so the digits are matched from the last one
/// backwards while growing A by three bits at a time.
pub fn find_quine(computer: &Computer) -> Result<u64> {
    let program = &computer.program;
    let mut candidates = vec![0u64];
    for i in (0..program.len()).rev() {
        let mut next = vec![];
        for &high in &candidates {
            for low in 0..8 {
                let a = high << 3 | low;
                if computer.output_with(a)? == program[i..] {
                    next.push(a);
                }
            }
        }
        log::trace!("{} candidates match the last {} digits", next.len(), program.len() - i);
        candidates = next;
    }
    candidates
        .into_iter()
        .filter(|&a| a != 0 || program.is_empty())
        .min()
        .ok_or_else(|| Error::no_solution("no value of A reproduces the program"))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut computer = parse_computer(input)?;
    if part == 1 {
        Ok(computer.run()?.iter().join(","))
    } else {
        Ok(find_quine(&computer)?.to_string())
    }
}
