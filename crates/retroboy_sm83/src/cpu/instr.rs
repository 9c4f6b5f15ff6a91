use std::fmt;

use super::helpers::bit_mask;
use super::{Reg16, Reg8};
use crate::error::{CpuError, Result};

/// Instructions of the arithmetic/logic/rotate/bit family.
///
/// BIT, RES and SET carry their bit index; `validate` range-checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Add,
    AddHl,
    AddSp,
    Adc,
    Sub,
    Sbc,
    And,
    Or,
    Xor,
    Cp,
    Inc,
    Dec,
    Ccf,
    Scf,
    Rra,
    Rla,
    Rrca,
    Rlca,
    Cpl,
    Daa,
    Bit(u8),
    Res(u8),
    Set(u8),
    Srl,
    Rr,
    Rl,
    Rrc,
    Rlc,
    Sra,
    Sla,
    Swap,
}

/// Where an instruction reads (and possibly writes) its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Reg(Reg8),
    /// The byte on the bus at the address held in HL.
    IndirectHl,
    /// A byte that followed the opcode in the instruction stream.
    Immediate(u8),
    Pair(Reg16),
    /// No explicit operand (CCF, CPL, RLCA, ...).
    Implied,
}

impl Operand {
    /// Decode the 3-bit `r` field of an opcode, where 6 selects (HL).
    pub fn from_index(index: u8) -> Option<Self> {
        if index == 6 {
            Some(Operand::IndirectHl)
        } else {
            Reg8::from_index(index).map(Operand::Reg)
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(reg) => write!(f, "{reg}"),
            Operand::IndirectHl => f.write_str("(HL)"),
            Operand::Immediate(value) => write!(f, "${value:02X}"),
            Operand::Pair(reg) => write!(f, "{reg}"),
            Operand::Implied => f.write_str("<implied>"),
        }
    }
}

impl Instruction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Add | Instruction::AddHl | Instruction::AddSp => "ADD",
            Instruction::Adc => "ADC",
            Instruction::Sub => "SUB",
            Instruction::Sbc => "SBC",
            Instruction::And => "AND",
            Instruction::Or => "OR",
            Instruction::Xor => "XOR",
            Instruction::Cp => "CP",
            Instruction::Inc => "INC",
            Instruction::Dec => "DEC",
            Instruction::Ccf => "CCF",
            Instruction::Scf => "SCF",
            Instruction::Rra => "RRA",
            Instruction::Rla => "RLA",
            Instruction::Rrca => "RRCA",
            Instruction::Rlca => "RLCA",
            Instruction::Cpl => "CPL",
            Instruction::Daa => "DAA",
            Instruction::Bit(_) => "BIT",
            Instruction::Res(_) => "RES",
            Instruction::Set(_) => "SET",
            Instruction::Srl => "SRL",
            Instruction::Rr => "RR",
            Instruction::Rl => "RL",
            Instruction::Rrc => "RRC",
            Instruction::Rlc => "RLC",
            Instruction::Sra => "SRA",
            Instruction::Sla => "SLA",
            Instruction::Swap => "SWAP",
        }
    }

    /// Check that `operand` is an addressing mode this instruction has and
    /// that any bit index is in range.
    ///
    /// Dispatch calls this before touching any state, so a rejected pair
    /// leaves the CPU and bus untouched.
    pub fn validate(self, operand: Operand) -> Result<()> {
        use Instruction::*;

        if let Bit(bit) | Res(bit) | Set(bit) = self {
            bit_mask(bit)?;
        }

        let ok = match self {
            Add | Adc | Sub | Sbc | And | Or | Xor | Cp => matches!(
                operand,
                Operand::Reg(_) | Operand::IndirectHl | Operand::Immediate(_)
            ),
            AddHl => matches!(
                operand,
                Operand::Pair(Reg16::Bc | Reg16::De | Reg16::Hl | Reg16::Sp)
            ),
            AddSp => matches!(operand, Operand::Immediate(_)),
            Inc | Dec => matches!(
                operand,
                Operand::Reg(_)
                    | Operand::IndirectHl
                    | Operand::Pair(Reg16::Bc | Reg16::De | Reg16::Hl | Reg16::Sp)
            ),
            Ccf | Scf | Rra | Rla | Rrca | Rlca | Cpl | Daa => {
                matches!(operand, Operand::Implied)
            }
            Bit(_) | Res(_) | Set(_) | Srl | Rr | Rl | Rrc | Rlc | Sra | Sla | Swap => {
                matches!(operand, Operand::Reg(_) | Operand::IndirectHl)
            }
        };

        if ok {
            Ok(())
        } else {
            Err(CpuError::InvalidOperand {
                instruction: self,
                operand,
            })
        }
    }
}
