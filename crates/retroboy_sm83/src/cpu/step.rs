use super::{Bus, Cpu, Decode, Decoded, OpcodeTable};
use crate::error::Result;

impl Cpu {
    /// Fetch, decode and execute one instruction at PC using the built-in
    /// opcode table.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Decoded> {
        self.step_with(bus, &OpcodeTable)
    }

    /// Same as `step`, with a caller-supplied decoder.
    ///
    /// PC only moves once the instruction has executed successfully. An
    /// opcode the decoder rejects (or an instruction `execute` rejects)
    /// leaves every register as it was and the error goes back to the
    /// caller; the core does not lock up or retry.
    pub fn step_with<B: Bus, D: Decode>(&mut self, bus: &mut B, decoder: &D) -> Result<Decoded> {
        let pc = self.regs.pc;
        let opcode = bus.read8(pc);
        let next = if decoder.needs_next(opcode) {
            bus.read8(pc.wrapping_add(1))
        } else {
            0
        };

        let decoded = match decoder.decode(opcode, next) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::error!(
                    "SM83 undecodable opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                return Err(err);
            }
        };

        log::trace!("{pc:04X}: {decoded}");
        self.execute(bus, decoded.instruction, decoded.operand)?;
        self.regs.pc = pc.wrapping_add(decoded.len);
        Ok(decoded)
    }

    /// Step until `count` instructions have run or one fails.
    pub fn run<B: Bus>(&mut self, bus: &mut B, count: usize) -> Result<()> {
        for _ in 0..count {
            self.step(bus)?;
        }
        Ok(())
    }
}
