mod alu;
mod cb;
mod incdec;

use super::{Bus, Cpu, Instruction, Operand};
use crate::error::Result;

impl Cpu {
    /// Execute one already-decoded instruction against `operand`.
    ///
    /// The pair is validated up front: on error nothing in the CPU or on
    /// the bus has changed. Immediate operands must already have been
    /// fetched by the caller.
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        if let Err(err) = instruction.validate(operand) {
            log::debug!("rejected {instruction:?} with {operand:?}: {err}");
            return Err(err);
        }

        match instruction {
            Instruction::Add
            | Instruction::Adc
            | Instruction::Sub
            | Instruction::Sbc
            | Instruction::And
            | Instruction::Or
            | Instruction::Xor
            | Instruction::Cp => self.exec_alu(bus, instruction, operand),

            Instruction::AddHl => self.exec_add_hl(instruction, operand),
            Instruction::AddSp => self.exec_add_sp(instruction, operand),

            Instruction::Inc => self.exec_inc(bus, instruction, operand),
            Instruction::Dec => self.exec_dec(bus, instruction, operand),

            Instruction::Rlca | Instruction::Rrca | Instruction::Rla | Instruction::Rra => {
                self.exec_rotate_a(instruction, operand)
            }
            Instruction::Daa => {
                self.alu_daa();
                Ok(())
            }
            Instruction::Cpl => {
                self.exec_cpl();
                Ok(())
            }
            Instruction::Scf => {
                self.exec_scf();
                Ok(())
            }
            Instruction::Ccf => {
                self.exec_ccf();
                Ok(())
            }

            Instruction::Bit(bit) => self.exec_bit(bus, instruction, bit, operand),
            Instruction::Res(_) | Instruction::Set(_) => {
                self.exec_res_set(bus, instruction, operand)
            }

            Instruction::Rlc
            | Instruction::Rrc
            | Instruction::Rl
            | Instruction::Rr
            | Instruction::Sla
            | Instruction::Sra
            | Instruction::Srl
            | Instruction::Swap => self.exec_shift(bus, instruction, operand),
        }
    }
}
