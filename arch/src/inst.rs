use crate::op::Opcode;

use color_print::cformat;

/// Decoded instruction: an opcode with its operand word. LOAD and STORE
/// carry a memory address, LOADI an immediate value. The operand stays a
/// raw word even for addresses so that out-of-range values survive decoding
/// and can be reported at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    LOAD(i32),
    LOADI(i32),
    STORE(i32),
}

impl Inst {
    pub fn op(&self) -> Opcode {
        match self {
            Inst::LOAD(_) => Opcode::LOAD,
            Inst::LOADI(_) => Opcode::LOADI,
            Inst::STORE(_) => Opcode::STORE,
        }
    }

    pub fn operand(&self) -> i32 {
        match self {
            Inst::LOAD(a) => *a,
            Inst::LOADI(v) => *v,
            Inst::STORE(a) => *a,
        }
    }

    pub fn to_bin(self) -> [i32; 2] {
        [self.op().into(), self.operand()]
    }

    pub fn decode(op: Opcode, operand: i32) -> Inst {
        match op {
            Opcode::LOAD => Inst::LOAD(operand),
            Opcode::LOADI => Inst::LOADI(operand),
            Opcode::STORE => Inst::STORE(operand),
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::LOAD(a) => cformat!("<red>{:<6}</><blue>{}</>", "load", a),
            Inst::LOADI(v) => cformat!("<red>{:<6}</><yellow>{}</>", "loadi", v),
            Inst::STORE(a) => cformat!("<red>{:<6}</><blue>{}</>", "store", a),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Inst::LOADI(5).to_bin(), [1, 5]);
    assert_eq!(Inst::decode(Opcode::STORE, 0), Inst::STORE(0));
    assert_eq!(Inst::LOAD(-3).operand(), -3);
    println!("{}", Inst::LOADI(42).cformat());
}
