use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Executable operation kinds of the SUM machine. The numeric values are
/// the on-stream encoding; a program is a flat word sequence alternating
/// opcode and operand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(i32)]
pub enum Opcode {
    LOAD = 0,
    LOADI = 1,
    STORE = 2,
}

impl Opcode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Opcode::try_from(0), Ok(Opcode::LOAD));
    assert_eq!(Opcode::try_from(1), Ok(Opcode::LOADI));
    assert_eq!(Opcode::try_from(2), Ok(Opcode::STORE));
    assert!(Opcode::try_from(3).is_err());
    assert!(Opcode::try_from(-1).is_err());
    assert_eq!(i32::from(Opcode::STORE), 2);
    assert_eq!(Opcode::LOADI.to_string(), "LOADI");
    assert_eq!(Opcode::parse("load"), Ok(Opcode::LOAD));
    assert!(Opcode::parse("hoge").is_err());
}
