//! Flag bits in the F register.
//!
//! Layout (bit index in the byte, from MSB to LSB):
//! - bit 7: Z (zero)
//! - bit 6: N (subtract)
//! - bit 5: H (half carry)
//! - bit 4: C (carry)
//! - bits 0–3 are always zero.

use std::str::FromStr;

use bitflags::bitflags;

use crate::error::CpuError;

bitflags! {
    /// Raw bit masks of the F register.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct FlagBits: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// A single flag in F.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Zero,
    Subtract,
    HalfCarry,
    Carry,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::Zero, Flag::Subtract, Flag::HalfCarry, Flag::Carry];

    /// Bit position inside F.
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Flag::Zero => 7,
            Flag::Subtract => 6,
            Flag::HalfCarry => 5,
            Flag::Carry => 4,
        }
    }
}

impl FromStr for Flag {
    type Err = CpuError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "zero" | "z" => Ok(Flag::Zero),
            "subtract" | "n" => Ok(Flag::Subtract),
            "half_carry" | "half-carry" | "h" => Ok(Flag::HalfCarry),
            "carry" | "c" => Ok(Flag::Carry),
            _ => Err(CpuError::InvalidFlagName(name.to_string())),
        }
    }
}

/// Structured view of F.
///
/// Built on demand from the packed byte and written straight back; it is
/// never stored next to F.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Flags {
    /// Pack into an F byte. The low nibble is always zero.
    pub fn encode(self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::Z, self.zero);
        bits.set(FlagBits::N, self.subtract);
        bits.set(FlagBits::H, self.half_carry);
        bits.set(FlagBits::C, self.carry);
        bits.bits()
    }

    /// Unpack an F byte, ignoring bits 3..0.
    pub fn decode(f: u8) -> Self {
        let bits = FlagBits::from_bits_truncate(f);
        Self {
            zero: bits.contains(FlagBits::Z),
            subtract: bits.contains(FlagBits::N),
            half_carry: bits.contains(FlagBits::H),
            carry: bits.contains(FlagBits::C),
        }
    }

    #[inline]
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Zero => self.zero,
            Flag::Subtract => self.subtract,
            Flag::HalfCarry => self.half_carry,
            Flag::Carry => self.carry,
        }
    }

    #[inline]
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Zero => self.zero = value,
            Flag::Subtract => self.subtract = value,
            Flag::HalfCarry => self.half_carry = value,
            Flag::Carry => self.carry = value,
        }
    }
}

impl From<u8> for Flags {
    fn from(f: u8) -> Self {
        Flags::decode(f)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.encode()
    }
}

/// Read one flag straight from a packed F byte.
#[inline]
pub fn get(f: u8, flag: Flag) -> bool {
    Flags::decode(f).get(flag)
}

/// Return `f` with one flag replaced. The low nibble of the result is zero.
#[inline]
pub fn set(f: u8, flag: Flag, value: bool) -> u8 {
    let mut flags = Flags::decode(f);
    flags.set(flag, value);
    flags.encode()
}

/// `get` keyed by flag name, for debugger and trace front-ends.
pub fn get_named(f: u8, name: &str) -> Result<bool, CpuError> {
    Ok(get(f, name.parse()?))
}

/// `set` keyed by flag name. An unknown name is an error, never a no-op.
pub fn set_named(f: u8, name: &str, value: bool) -> Result<u8, CpuError> {
    Ok(set(f, name.parse()?, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_views() -> impl Iterator<Item = Flags> {
        (0u8..16).map(|n| Flags {
            zero: n & 0b1000 != 0,
            subtract: n & 0b0100 != 0,
            half_carry: n & 0b0010 != 0,
            carry: n & 0b0001 != 0,
        })
    }

    #[test]
    fn decode_inverts_encode_for_every_view() {
        for flags in all_views() {
            assert_eq!(Flags::decode(flags.encode()), flags);
        }
    }

    #[test]
    fn encode_keeps_high_nibble_and_clears_low_nibble() {
        for b in 0..=u8::MAX {
            let packed = Flags::decode(b).encode();
            assert_eq!(packed & 0x0F, 0, "low nibble leaked for {b:#04x}");
            assert_eq!(packed & 0xF0, b & 0xF0);
        }
    }

    #[test]
    fn bit_positions_match_hardware_layout() {
        let only = |flag| {
            let mut flags = Flags::default();
            flags.set(flag, true);
            flags.encode()
        };
        assert_eq!(only(Flag::Zero), 0x80);
        assert_eq!(only(Flag::Subtract), 0x40);
        assert_eq!(only(Flag::HalfCarry), 0x20);
        assert_eq!(only(Flag::Carry), 0x10);
        for flag in Flag::ALL {
            assert_eq!(only(flag), 1u8 << flag.bit());
        }
    }

    #[test]
    fn set_assigns_and_clears_single_flag() {
        let f = set(0x00, Flag::Carry, true);
        assert_eq!(f, 0x10);
        assert!(get(f, Flag::Carry));

        let f = set(0xF0, Flag::Zero, false);
        assert_eq!(f, 0x70);
        assert!(!get(f, Flag::Zero));
        assert!(get(f, Flag::Subtract));

        // Garbage in the low nibble never survives a write.
        assert_eq!(set(0x0F, Flag::HalfCarry, true), 0x20);
    }

    #[test]
    fn flag_names_parse_case_insensitively() {
        assert_eq!("zero".parse::<Flag>(), Ok(Flag::Zero));
        assert_eq!("N".parse::<Flag>(), Ok(Flag::Subtract));
        assert_eq!("Half_Carry".parse::<Flag>(), Ok(Flag::HalfCarry));
        assert_eq!("c".parse::<Flag>(), Ok(Flag::Carry));
    }

    #[test]
    fn unknown_flag_name_is_rejected() {
        assert_eq!(
            "overflow".parse::<Flag>(),
            Err(CpuError::InvalidFlagName("overflow".to_string()))
        );
        assert!("".parse::<Flag>().is_err());
    }

    #[test]
    fn named_accessors_fail_instead_of_ignoring_unknown_names() {
        assert_eq!(set_named(0x00, "half_carry", true), Ok(0x20));
        assert_eq!(get_named(0x80, "zero"), Ok(true));
        assert_eq!(get_named(0x80, "carry"), Ok(false));
        assert_eq!(
            set_named(0x80, "sign", true),
            Err(CpuError::InvalidFlagName("sign".to_string()))
        );
    }
}
