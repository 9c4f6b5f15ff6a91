use super::helpers::bit_mask;
use super::{Cpu, Flag, Flags};
use crate::error::Result;

// Rotates, shifts, SWAP and single-bit operations. These back both the
// CB-prefixed page and the one-byte accumulator rotates.
impl Cpu {
    /// Common flag update for rotates and shifts: Z from the result, C from
    /// the bit that fell out, N and H cleared.
    #[inline]
    fn shifted(&mut self, result: u8, carry_out: bool) -> u8 {
        self.set_flags(Flags {
            zero: result == 0,
            subtract: false,
            half_carry: false,
            carry: carry_out,
        });
        result
    }

    #[inline]
    fn carry_bit(&self) -> u8 {
        u8::from(self.get_flag(Flag::Carry))
    }

    /// RLC: rotate left, bit 7 to carry and bit 0.
    pub(super) fn cb_rlc(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_left(1), value & 0x80 != 0)
    }

    /// RRC: rotate right, bit 0 to carry and bit 7.
    pub(super) fn cb_rrc(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_right(1), value & 0x01 != 0)
    }

    /// RL: rotate left through carry.
    pub(super) fn cb_rl(&mut self, value: u8) -> u8 {
        let carry_in = self.carry_bit();
        self.shifted((value << 1) | carry_in, value & 0x80 != 0)
    }

    /// RR: rotate right through carry.
    pub(super) fn cb_rr(&mut self, value: u8) -> u8 {
        let carry_in = self.carry_bit() << 7;
        self.shifted((value >> 1) | carry_in, value & 0x01 != 0)
    }

    pub(super) fn cb_sla(&mut self, value: u8) -> u8 {
        self.shifted(value << 1, value & 0x80 != 0)
    }

    /// SRA keeps bit 7, so the sign survives the shift.
    pub(super) fn cb_sra(&mut self, value: u8) -> u8 {
        self.shifted((value >> 1) | (value & 0x80), value & 0x01 != 0)
    }

    pub(super) fn cb_srl(&mut self, value: u8) -> u8 {
        self.shifted(value >> 1, value & 0x01 != 0)
    }

    pub(super) fn cb_swap(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_left(4), false)
    }

    /// BIT n: Z is set when the bit is clear. H=1, N=0, C preserved.
    pub(super) fn cb_bit(&mut self, bit: u8, value: u8) -> Result<()> {
        let mask = bit_mask(bit)?;
        self.set_flag(Flag::Zero, value & mask == 0);
        self.set_flag(Flag::Subtract, false);
        self.set_flag(Flag::HalfCarry, true);
        Ok(())
    }
}

/// RES n. No flags are affected.
#[inline]
pub(super) fn res_bit(bit: u8, value: u8) -> Result<u8> {
    Ok(value & !bit_mask(bit)?)
}

/// SET n. No flags are affected.
#[inline]
pub(super) fn set_bit(bit: u8, value: u8) -> Result<u8> {
    Ok(value | bit_mask(bit)?)
}
