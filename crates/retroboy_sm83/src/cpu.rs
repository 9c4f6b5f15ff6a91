mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
pub mod flags;
mod helpers;
mod instr;
mod regs;
mod step;

pub use bus::{Bus, FlatBus};
pub use decode::{Decode, Decoded, OpcodeTable};
pub use flags::{Flag, Flags};
pub use instr::{Instruction, Operand};
pub use regs::{Reg16, Reg8, Registers};

/// SM83 CPU core (the Game Boy's LR35902).
///
/// Only the register file lives here. The bus is never owned by the CPU:
/// every operation that touches memory borrows it for the duration of the
/// call, so a single thread drives both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
}

impl Cpu {
    /// Create a CPU with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registers(regs: Registers) -> Self {
        let mut cpu = Self { regs };
        // Lower 4 bits of F are always zero.
        cpu.regs.f &= 0xF0;
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        flags::get(self.regs.f, flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.f = flags::set(self.regs.f, flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Structured view of the F register.
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::decode(self.regs.f)
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.regs.f = flags.encode();
    }
}
