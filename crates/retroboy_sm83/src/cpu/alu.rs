use super::{Cpu, Flag, Flags};

impl Cpu {
    #[inline]
    fn carry_in(&self, use_carry: bool) -> u8 {
        u8::from(use_carry && self.get_flag(Flag::Carry))
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = self.carry_in(use_carry);

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            subtract: false,
            half_carry: half > 0x0F,
            carry: full > 0xFF,
        });
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let carry_in = self.carry_in(use_carry);
        self.regs.a = self.sub_flags(value, carry_in);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, 0);
    }

    /// `A - value - carry_in` with real borrow detection on both the nibble
    /// and the full byte. Returns the wrapped difference.
    fn sub_flags(&mut self, value: u8, carry_in: u8) -> u8 {
        let a = self.regs.a;
        let half_borrow = u16::from(a & 0x0F) < u16::from(value & 0x0F) + u16::from(carry_in);
        let borrow = u16::from(a) < u16::from(value) + u16::from(carry_in);
        let result = a.wrapping_sub(value).wrapping_sub(carry_in);

        self.set_flags(Flags {
            zero: result == 0,
            subtract: true,
            half_carry: half_borrow,
            carry: borrow,
        });
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            half_carry: true,
            ..Flags::default()
        });
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            ..Flags::default()
        });
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            ..Flags::default()
        });
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N, and A to compute a correction value.
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::Carry) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::HalfCarry) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::Subtract) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::Carry, adjust >= 0x60);
        self.set_flag(Flag::HalfCarry, false);
        self.set_flag(Flag::Zero, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Zero, result == 0);
        self.set_flag(Flag::Subtract, false);
        self.set_flag(Flag::HalfCarry, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Zero, result == 0);
        self.set_flag(Flag::Subtract, true);
        self.set_flag(Flag::HalfCarry, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C
    /// the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);

        self.set_flag(Flag::Subtract, false);
        self.set_flag(Flag::HalfCarry, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::Carry, carry);

        self.regs.set_hl(result);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,e).
    ///
    /// The immediate is sign-extended, then added like `ADD HL,rr`: Z and N
    /// are cleared, H is the carry out of bit 11 and C the carry out of
    /// bit 15 of the 16-bit add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let (result, carry) = base.overflowing_add(offset);
        self.set_flags(Flags {
            zero: false,
            subtract: false,
            half_carry: (base & 0x0FFF) + (offset & 0x0FFF) > 0x0FFF,
            carry,
        });
        result
    }
}
