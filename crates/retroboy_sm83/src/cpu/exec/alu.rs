use crate::cpu::{Bus, Cpu, Flag, Instruction, Operand};
use crate::error::{CpuError, Result};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP against A.
    pub(super) fn exec_alu<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, instruction, operand)?;

        match instruction {
            Instruction::Add => self.alu_add(value, false),
            Instruction::Adc => self.alu_add(value, true),
            Instruction::Sub => self.alu_sub(value, false),
            Instruction::Sbc => self.alu_sub(value, true),
            Instruction::And => self.alu_and(value),
            Instruction::Xor => self.alu_xor(value),
            Instruction::Or => self.alu_or(value),
            Instruction::Cp => self.alu_cp(value),
            _ => {
                return Err(CpuError::InvalidOperand {
                    instruction,
                    operand,
                })
            }
        }
        Ok(())
    }

    pub(super) fn exec_add_hl(&mut self, instruction: Instruction, operand: Operand) -> Result<()> {
        let Operand::Pair(reg) = operand else {
            return Err(CpuError::InvalidOperand {
                instruction,
                operand,
            });
        };
        let value = self.regs.get16(reg);
        self.alu_add16_hl(value);
        Ok(())
    }

    pub(super) fn exec_add_sp(&mut self, instruction: Instruction, operand: Operand) -> Result<()> {
        let Operand::Immediate(imm) = operand else {
            return Err(CpuError::InvalidOperand {
                instruction,
                operand,
            });
        };
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Ok(())
    }

    /// RLCA/RRCA/RLA/RRA. Same bit movement as the CB forms, but Z is
    /// always cleared regardless of the result.
    pub(super) fn exec_rotate_a(
        &mut self,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        let a = self.regs.a;
        let result = match instruction {
            Instruction::Rlca => self.cb_rlc(a),
            Instruction::Rrca => self.cb_rrc(a),
            Instruction::Rla => self.cb_rl(a),
            Instruction::Rra => self.cb_rr(a),
            _ => {
                return Err(CpuError::InvalidOperand {
                    instruction,
                    operand,
                })
            }
        };
        self.regs.a = result;
        self.set_flag(Flag::Zero, false);
        Ok(())
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::HalfCarry, true);
        self.set_flag(Flag::Subtract, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::Carry, true);
        self.set_flag(Flag::HalfCarry, false);
        self.set_flag(Flag::Subtract, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::Carry);
        self.set_flag(Flag::Carry, !carry);
        self.set_flag(Flag::HalfCarry, false);
        self.set_flag(Flag::Subtract, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_a_rejects_instructions_outside_its_group() {
        let mut cpu = Cpu::new();
        cpu.regs.a = 0x81;
        let before = cpu.clone();

        let err = cpu
            .exec_rotate_a(Instruction::Swap, Operand::Implied)
            .unwrap_err();
        assert_eq!(
            err,
            CpuError::InvalidOperand {
                instruction: Instruction::Swap,
                operand: Operand::Implied,
            }
        );
        assert_eq!(cpu, before);

        cpu.exec_rotate_a(Instruction::Rlca, Operand::Implied)
            .expect("RLCA is in the group");
        assert_eq!(cpu.regs.a, 0x03);
    }
}
