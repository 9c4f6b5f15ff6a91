use super::{Bus, Cpu, Instruction, Operand};
use crate::error::{CpuError, Result};

impl Cpu {
    /// Read an 8-bit operand: a register, the byte at (HL), or an
    /// immediate that was fetched ahead of dispatch.
    #[inline]
    pub(super) fn read_operand8<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
    ) -> Result<u8> {
        match operand {
            Operand::Reg(reg) => Ok(self.regs.get8(reg)),
            Operand::IndirectHl => Ok(bus.read8(self.regs.hl())),
            Operand::Immediate(value) => Ok(value),
            Operand::Pair(_) | Operand::Implied => Err(CpuError::InvalidOperand {
                instruction,
                operand,
            }),
        }
    }

    /// Write back an 8-bit operand. Immediates are not writable.
    #[inline]
    pub(super) fn write_operand8<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
        value: u8,
    ) -> Result<()> {
        match operand {
            Operand::Reg(reg) => self.regs.set8(reg, value),
            Operand::IndirectHl => bus.write8(self.regs.hl(), value),
            Operand::Immediate(_) | Operand::Pair(_) | Operand::Implied => {
                return Err(CpuError::InvalidOperand {
                    instruction,
                    operand,
                })
            }
        }
        Ok(())
    }

    /// Read-modify-write an 8-bit operand through `f`.
    ///
    /// `f` sees the CPU so it can update flags; the result is written back
    /// to the same register or (HL) it was read from.
    pub(super) fn modify_operand8<B, F>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        operand: Operand,
        f: F,
    ) -> Result<()>
    where
        B: Bus,
        F: FnOnce(&mut Cpu, u8) -> u8,
    {
        let value = self.read_operand8(bus, instruction, operand)?;
        let result = f(self, value);
        self.write_operand8(bus, instruction, operand, result)
    }
}

/// Validate a BIT/RES/SET index and turn it into a mask.
#[inline]
pub(super) fn bit_mask(bit: u8) -> Result<u8> {
    if bit <= 7 {
        Ok(1 << bit)
    } else {
        Err(CpuError::InvalidBitIndex(bit))
    }
}
