use thiserror::Error;

/// Run-time diagnostics. Address and opcode faults are recorded and the
/// scan continues; a missing trailing operand halts execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Run-time error: Address out of bounds: {addr} (memory size {size})")]
    AddressOutOfBounds { addr: i32, size: usize },

    #[error("Invalid command: {word} at index {index}")]
    InvalidOpcode { word: i32, index: usize },

    #[error("Invalid bytecode: Missing operand for command at index {index}")]
    MalformedStream { index: usize },
}
