//! Day 24: Crossed Wires.

use crate::error::{parse, Error, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gate<'a> {
    pub a: &'a str,
    pub op: Op,
    pub b: &'a str,
    pub out: &'a str,
}

impl Gate<'_> {
    fn reads_inputs(&self) -> bool {
        is_input(self.a) && is_input(self.b)
    }

    fn reads_first_bit(&self) -> bool {
        [self.a, self.b].iter().any(|w| w.ends_with("00") && is_input(w))
    }
}

fn is_input(wire: &str) -> bool {
    wire.starts_with('x') || wire.starts_with('y')
}

pub struct Circuit<'a> {
    pub initial: Vec<(&'a str, bool)>,
    pub gates: Vec<Gate<'a>>,
}

impl<'a> Circuit<'a> {
    pub fn parse(input: &'a str) -> Result<Circuit<'a>> {
        let mut initial = vec![];
        let mut gates = vec![];
        for line in input.trim().lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some((wire, value)) = line.split_once(':') {
                let value = match parse::<u8>(value)? {
                    0 => false,
                    1 => true,
                    n => return Err(Error::malformed(format!("wire {wire} set to {n}"))),
                };
                initial.push((wire.trim(), value));
                continue;
            }
            let Some((a, op, b, "->", out)) = line.split_whitespace().collect_tuple() else {
                return Err(Error::malformed(format!("cannot parse gate {line:?}")));
            };
            let op = match op {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                _ => return Err(Error::malformed(format!("unknown gate {op}"))),
            };
            gates.push(Gate { a, op, b, out });
        }
        Ok(Circuit { initial, gates })
    }

    /// Propagates `inputs` through the gates until every gate has fired.
    pub fn evaluate(&self, inputs: &[(&'a str, bool)]) -> Result<FxHashMap<&'a str, bool>> {
        let mut values = inputs.iter().copied().collect::<FxHashMap<_, _>>();
        let mut pending = self.gates.clone();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|gate| match (values.get(gate.a), values.get(gate.b)) {
                (Some(&a), Some(&b)) => {
                    values.insert(gate.out, gate.op.apply(a, b));
                    false
                }
                _ => true,
            });
            if pending.len() == before {
                return Err(Error::malformed(format!("{before} gates never receive both inputs")));
            }
        }
        Ok(values)
    }

    /// The number formed by the bits on wires starting with `prefix`,
    /// `00` being the least significant.
    pub fn number(values: &FxHashMap<&str, bool>, prefix: char) -> Result<u64> {
        let mut number = 0;
        for (wire, &value) in values {
            let Some(bit) = wire.strip_prefix(prefix) else {continue};
            let bit: u32 = parse(bit)?;
            if bit >= 64 {
                return Err(Error::malformed(format!("wire {wire} is beyond 64 bits")));
            }
            number |= (value as u64) << bit;
        }
        Ok(number)
    }

    pub fn output(&self) -> Result<u64> {
        Circuit::number(&self.evaluate(&self.initial)?, 'z')
    }

    /// Runs the circuit with `x` and `y` on the input wires it already has.
    pub fn add(&self, x: u64, y: u64) -> Result<u64> {
        let inputs = self
            .initial
            .iter()
            .map(|&(wire, _)| {
                let bit: u32 = parse(wire.get(1..).unwrap_or(wire))?;
                let value = if wire.starts_with('x') {x} else {y};
                Ok((wire, bit < 64 && value >> bit & 1 == 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Circuit::number(&self.evaluate(&inputs)?, 'z')
    }

    /// Gate outputs that do not fit the shape of a ripple-carry adder.
    ///
    /// In a correct adder every `z` but the last comes from an XOR and the last
    /// one from the OR carrying out of the top input bits. Every other XOR reads
    /// the input bits and feeds another XOR, an AND feeds an OR, and every other
    /// OR carries into the next bit's XOR and AND. Both bit 0 gates are a plain
    /// half adder and exempt.
    pub fn misplaced_outputs(&self) -> Vec<&'a str> {
        let last_z = self.gates.iter().map(|g| g.out).filter(|w| w.starts_with('z')).max();
        let feeds = |wire: &str, op: Op| {
            self.gates.iter().any(|g| g.op == op && (g.a == wire || g.b == wire))
        };
        let top_carry = last_z
            .and_then(|z| z.get(1..)?.parse::<u32>().ok()?.checked_sub(1))
            .and_then(|top| {
                let (x, y) = (format!("x{top:02}"), format!("y{top:02}"));
                self.gates
                    .iter()
                    .find(|g| g.op == Op::And && ((g.a == x && g.b == y) || (g.a == y && g.b == x)))
                    .map(|g| g.out)
            });
        let mut wrong = FxHashSet::default();
        for gate in &self.gates {
            let to_z = gate.out.starts_with('z');
            let to_last_z = Some(gate.out) == last_z;
            let bad = match gate.op {
                Op::Xor if to_last_z && !gate.reads_first_bit() => true,
                Op::Xor if !to_z && !gate.reads_inputs() => true,
                Op::Xor => gate.reads_inputs() && !gate.reads_first_bit() && !feeds(gate.out, Op::Xor),
                Op::And if to_z => true,
                Op::And => !gate.reads_first_bit() && !feeds(gate.out, Op::Or),
                Op::Or if to_z => !to_last_z,
                Op::Or => {
                    let final_carry = top_carry.is_some_and(|w| gate.a == w || gate.b == w);
                    final_carry || !(feeds(gate.out, Op::And) && feeds(gate.out, Op::Xor))
                }
            };
            if bad {
                log::debug!("suspicious gate {gate:?}");
                wrong.insert(gate.out);
            }
        }
        if wrong.len() % 2 != 0 {
            log::warn!("{} misplaced outputs cannot all be swapped in pairs", wrong.len());
        }
        wrong.into_iter().sorted_unstable().collect()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let circuit = Circuit::parse(input)?;
    if part == 1 {
        Ok(circuit.output()?.to_string())
    } else {
        Ok(circuit.misplaced_outputs().join(","))
    }
}
