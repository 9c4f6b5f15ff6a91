use crate::cpu::{Bus, Cpu, Instruction, Operand};
use crate::error::Result;

impl Cpu {
    pub(super) fn exec_inc<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        if let Operand::Pair(reg) = operand {
            // 16-bit forms leave every flag alone.
            let value = self.regs.get16(reg).wrapping_add(1);
            self.regs.set16(reg, value);
            return Ok(());
        }
        self.modify_operand8(bus, instruction, operand, Cpu::alu_inc8)
    }

    pub(super) fn exec_dec<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<()> {
        if let Operand::Pair(reg) = operand {
            let value = self.regs.get16(reg).wrapping_sub(1);
            self.regs.set16(reg, value);
            return Ok(());
        }
        self.modify_operand8(bus, instruction, operand, Cpu::alu_dec8)
    }
}
