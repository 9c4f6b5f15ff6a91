pub mod cpu;
pub mod error;

pub use cpu::{
    Bus, Cpu, Decode, Decoded, Flag, Flags, FlatBus, Instruction, OpcodeTable, Operand, Reg16,
    Reg8, Registers,
};
pub use error::{CpuError, Result};

/// Size of the SM83 address space in bytes.
pub const ADDRESS_SPACE: usize = 0x1_0000;
