use thiserror::Error;

use crate::cpu::{Instruction, Operand};

/// Errors surfaced by the SM83 core.
///
/// None of these are recoverable at the instruction level: they describe a
/// caller handing the core something it cannot execute. When an operation
/// returns one of them the CPU state is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("unknown flag name '{0}' (expected zero, subtract, half_carry or carry)")]
    InvalidFlagName(String),

    #[error("bit index {0} is outside 0..=7")]
    InvalidBitIndex(u8),

    #[error("operand {operand} is not valid for {instruction:?}")]
    InvalidOperand {
        instruction: Instruction,
        operand: Operand,
    },

    #[error("undecodable opcode 0x{opcode:02X}")]
    UndecodableOpcode { opcode: u8 },
}

pub type Result<T> = std::result::Result<T, CpuError>;
