use crate::cpu::cb::{res_bit, set_bit};
use crate::cpu::{Bus, Cpu, Instruction, Operand};
use crate::error::{CpuError, Result};

impl Cpu {
    /// RLC/RRC/RL/RR/SLA/SRA/SRL/SWAP on a register or (HL).
    pub(super) fn exec_shift<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        let op: fn(&mut Cpu, u8) -> u8 = match instruction {
            Instruction::Rlc => Cpu::cb_rlc,
            Instruction::Rrc => Cpu::cb_rrc,
            Instruction::Rl => Cpu::cb_rl,
            Instruction::Rr => Cpu::cb_rr,
            Instruction::Sla => Cpu::cb_sla,
            Instruction::Sra => Cpu::cb_sra,
            Instruction::Srl => Cpu::cb_srl,
            Instruction::Swap => Cpu::cb_swap,
            _ => {
                return Err(CpuError::InvalidOperand {
                    instruction,
                    operand,
                })
            }
        };
        self.modify_operand8(bus, instruction, operand, op)
    }

    /// BIT b,r. Only reads the operand; (HL) is never written back.
    pub(super) fn exec_bit<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        bit: u8,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, instruction, operand)?;
        self.cb_bit(bit, value)
    }

    /// RES b,r and SET b,r.
    pub(super) fn exec_res_set<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, instruction, operand)?;
        let result = match instruction {
            Instruction::Res(bit) => res_bit(bit, value)?,
            Instruction::Set(bit) => set_bit(bit, value)?,
            _ => {
                return Err(CpuError::InvalidOperand {
                    instruction,
                    operand,
                })
            }
        };
        self.write_operand8(bus, instruction, operand, result)
    }
}
