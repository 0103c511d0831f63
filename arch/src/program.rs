use crate::inst::Inst;
use crate::op::Opcode;

use color_print::cformat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat bytecode stream: opcode and operand words alternate. Append-only
/// during code generation, read-only during execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    words: Vec<i32>,
}

impl Program {
    pub fn new() -> Self {
        Program { words: Vec::new() }
    }

    /// Build a program from raw words, pairing unchecked. Bad opcodes and
    /// odd lengths are left for the executor to diagnose.
    pub fn from_words(words: Vec<i32>) -> Self {
        Program { words }
    }

    pub fn emit(&mut self, inst: Inst) {
        self.words.extend(inst.to_bin());
    }

    pub fn words(&self) -> &[i32] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Mnemonic listing, one instruction per line. Words that do not decode
    /// are printed raw.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (idx, pair) in self.words.chunks(2).enumerate() {
            match *pair {
                [op, operand] => match Opcode::try_from(op) {
                    Ok(kind) => {
                        let inst = Inst::decode(kind, operand);
                        out += &cformat!("  <yellow>{:>4}</> {}\n", idx * 2, inst.cformat());
                    }
                    Err(_) => {
                        out += &cformat!("  <yellow>{:>4}</> <red,bold>??</> {} {}\n", idx * 2, op, operand);
                    }
                },
                [op] => {
                    out += &cformat!("  <yellow>{:>4}</> <red,bold>??</> {} <red>(missing operand)</>\n", idx * 2, op);
                }
                _ => unreachable!(),
            }
        }
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<String> = self.words.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", words.join(" "))
    }
}

#[test]
fn test() {
    let mut prog = Program::new();
    prog.emit(Inst::LOADI(5));
    prog.emit(Inst::STORE(0));
    assert_eq!(prog.words(), &[1, 5, 2, 0]);
    assert_eq!(prog.to_string(), "1 5 2 0");
    assert_eq!(prog.len(), 4);
    println!("{}", prog.listing());
    println!("{}", Program::from_words(vec![9, 0, 1]).listing());
}
