use std::fmt;

use super::{Instruction, Operand, Reg16, Reg8};
use crate::error::{CpuError, Result};

/// One decoded instruction, ready for `Cpu::execute`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub instruction: Instruction,
    pub operand: Operand,
    /// Encoded length in bytes, including any prefix and immediate.
    pub len: u16,
}

impl Decoded {
    pub fn new(instruction: Instruction, operand: Operand, len: u16) -> Self {
        Self {
            instruction,
            operand,
            len,
        }
    }
}

/// Maps raw opcode bytes to instructions.
///
/// `next` is the byte following the opcode: the CB sub-opcode or an 8-bit
/// immediate. The step loop only fetches it from the bus when
/// `needs_next(opcode)` is true and passes 0 otherwise, so a bus with
/// read side effects never sees a read past a one-byte instruction.
pub trait Decode {
    fn decode(&self, opcode: u8, next: u8) -> Result<Decoded>;

    /// Whether `opcode` is followed by a byte `decode` needs.
    fn needs_next(&self, _opcode: u8) -> bool {
        true
    }
}

/// SM83 opcode table restricted to the arithmetic, logic, rotate and bit
/// instructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpcodeTable;

impl Decode for OpcodeTable {
    fn decode(&self, opcode: u8, next: u8) -> Result<Decoded> {
        let undecodable = CpuError::UndecodableOpcode { opcode };
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;

        let decoded = match opcode {
            0xCB => decode_cb(next),

            // ALU A,r / A,(HL)
            0x80..=0xBF => {
                let operand = Operand::from_index(z).ok_or(undecodable)?;
                Decoded::new(alu_op(y), operand, 1)
            }

            // ALU A,d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                Decoded::new(alu_op(y), Operand::Immediate(next), 2)
            }

            // INC r / DEC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                let operand = Operand::from_index(y).ok_or(undecodable)?;
                Decoded::new(Instruction::Inc, operand, 1)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                let operand = Operand::from_index(y).ok_or(undecodable)?;
                Decoded::new(Instruction::Dec, operand, 1)
            }

            // INC rr / DEC rr / ADD HL,rr
            0x03 | 0x13 | 0x23 | 0x33 => Decoded::new(Instruction::Inc, rr(opcode)?, 1),
            0x0B | 0x1B | 0x2B | 0x3B => Decoded::new(Instruction::Dec, rr(opcode)?, 1),
            0x09 | 0x19 | 0x29 | 0x39 => Decoded::new(Instruction::AddHl, rr(opcode)?, 1),

            0xE8 => Decoded::new(Instruction::AddSp, Operand::Immediate(next), 2),

            0x07 => Decoded::new(Instruction::Rlca, Operand::Implied, 1),
            0x0F => Decoded::new(Instruction::Rrca, Operand::Implied, 1),
            0x17 => Decoded::new(Instruction::Rla, Operand::Implied, 1),
            0x1F => Decoded::new(Instruction::Rra, Operand::Implied, 1),
            0x27 => Decoded::new(Instruction::Daa, Operand::Implied, 1),
            0x2F => Decoded::new(Instruction::Cpl, Operand::Implied, 1),
            0x37 => Decoded::new(Instruction::Scf, Operand::Implied, 1),
            0x3F => Decoded::new(Instruction::Ccf, Operand::Implied, 1),

            _ => return Err(undecodable),
        };

        Ok(decoded)
    }

    fn needs_next(&self, opcode: u8) -> bool {
        matches!(
            opcode,
            0xCB | 0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE | 0xE8
        )
    }
}

/// ALU operation selected by bits 5..3 of the 0x80–0xBF block and the
/// d8 forms.
fn alu_op(y: u8) -> Instruction {
    match y & 0x07 {
        0 => Instruction::Add,
        1 => Instruction::Adc,
        2 => Instruction::Sub,
        3 => Instruction::Sbc,
        4 => Instruction::And,
        5 => Instruction::Xor,
        6 => Instruction::Or,
        _ => Instruction::Cp,
    }
}

fn rr(opcode: u8) -> Result<Operand> {
    Reg16::from_rr_index((opcode >> 4) & 0x03)
        .map(Operand::Pair)
        .ok_or(CpuError::UndecodableOpcode { opcode })
}

/// The CB page is fully populated, so this never fails.
fn decode_cb(cb: u8) -> Decoded {
    let x = cb >> 6;
    let y = (cb >> 3) & 0x07;
    let z = cb & 0x07;
    let operand = Operand::from_index(z).unwrap_or(Operand::Reg(Reg8::A));

    let instruction = match x {
        0 => match y {
            0 => Instruction::Rlc,
            1 => Instruction::Rrc,
            2 => Instruction::Rl,
            3 => Instruction::Rr,
            4 => Instruction::Sla,
            5 => Instruction::Sra,
            6 => Instruction::Swap,
            _ => Instruction::Srl,
        },
        1 => Instruction::Bit(y),
        2 => Instruction::Res(y),
        _ => Instruction::Set(y),
    };

    Decoded::new(instruction, operand, 2)
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.instruction.mnemonic();
        match (self.instruction, self.operand) {
            (_, Operand::Implied) => f.write_str(mnemonic),
            (Instruction::AddSp, Operand::Immediate(imm)) => {
                write!(f, "{mnemonic} SP,{}", imm as i8)
            }
            (Instruction::AddHl, operand) => write!(f, "{mnemonic} HL,{operand}"),
            (Instruction::Add | Instruction::Adc | Instruction::Sbc, operand) => {
                write!(f, "{mnemonic} A,{operand}")
            }
            (Instruction::Bit(bit) | Instruction::Res(bit) | Instruction::Set(bit), operand) => {
                write!(f, "{mnemonic} {bit},{operand}")
            }
            (_, operand) => write!(f, "{mnemonic} {operand}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(opcode: u8, next: u8) -> Decoded {
        OpcodeTable
            .decode(opcode, next)
            .unwrap_or_else(|err| panic!("{opcode:#04x}: {err}"))
    }

    #[test]
    fn alu_register_block_follows_bcdehl_hl_a_order() {
        assert_eq!(
            decode(0x80, 0),
            Decoded::new(Instruction::Add, Operand::Reg(Reg8::B), 1)
        );
        assert_eq!(
            decode(0x8E, 0),
            Decoded::new(Instruction::Adc, Operand::IndirectHl, 1)
        );
        assert_eq!(
            decode(0x97, 0),
            Decoded::new(Instruction::Sub, Operand::Reg(Reg8::A), 1)
        );
        assert_eq!(
            decode(0xAF, 0),
            Decoded::new(Instruction::Xor, Operand::Reg(Reg8::A), 1)
        );
        assert_eq!(
            decode(0xBD, 0),
            Decoded::new(Instruction::Cp, Operand::Reg(Reg8::L), 1)
        );
    }

    #[test]
    fn immediate_forms_carry_the_next_byte() {
        assert_eq!(
            decode(0xC6, 0x42),
            Decoded::new(Instruction::Add, Operand::Immediate(0x42), 2)
        );
        assert_eq!(
            decode(0xFE, 0x10),
            Decoded::new(Instruction::Cp, Operand::Immediate(0x10), 2)
        );
        assert_eq!(
            decode(0xE8, 0xFE),
            Decoded::new(Instruction::AddSp, Operand::Immediate(0xFE), 2)
        );
    }

    #[test]
    fn sixteen_bit_forms_select_register_pairs() {
        assert_eq!(
            decode(0x03, 0),
            Decoded::new(Instruction::Inc, Operand::Pair(Reg16::Bc), 1)
        );
        assert_eq!(
            decode(0x3B, 0),
            Decoded::new(Instruction::Dec, Operand::Pair(Reg16::Sp), 1)
        );
        assert_eq!(
            decode(0x29, 0),
            Decoded::new(Instruction::AddHl, Operand::Pair(Reg16::Hl), 1)
        );
        assert_eq!(
            decode(0x34, 0),
            Decoded::new(Instruction::Inc, Operand::IndirectHl, 1)
        );
    }

    #[test]
    fn cb_page_is_fully_decoded() {
        for cb in 0..=u8::MAX {
            let decoded = decode(0xCB, cb);
            assert_eq!(decoded.len, 2);
        }
        assert_eq!(
            decode(0xCB, 0x7C),
            Decoded::new(Instruction::Bit(7), Operand::Reg(Reg8::H), 2)
        );
        assert_eq!(
            decode(0xCB, 0x36),
            Decoded::new(Instruction::Swap, Operand::IndirectHl, 2)
        );
        assert_eq!(
            decode(0xCB, 0xFF),
            Decoded::new(Instruction::Set(7), Operand::Reg(Reg8::A), 2)
        );
    }

    #[test]
    fn opcodes_outside_the_family_are_undecodable() {
        for opcode in [0x00, 0x3E, 0x76, 0xC3, 0xD3] {
            assert_eq!(
                OpcodeTable.decode(opcode, 0),
                Err(CpuError::UndecodableOpcode { opcode })
            );
        }
    }

    #[test]
    fn only_prefixed_and_immediate_forms_need_the_next_byte() {
        for opcode in 0..=u8::MAX {
            if let Ok(decoded) = OpcodeTable.decode(opcode, 0) {
                assert_eq!(
                    OpcodeTable.needs_next(opcode),
                    decoded.len == 2,
                    "{opcode:#04x}"
                );
            }
        }
    }

    #[test]
    fn display_renders_assembler_syntax() {
        assert_eq!(decode(0x86, 0).to_string(), "ADD A,(HL)");
        assert_eq!(decode(0xCB, 0x7C).to_string(), "BIT 7,H");
        assert_eq!(decode(0xE8, 0xFE).to_string(), "ADD SP,-2");
        assert_eq!(decode(0x09, 0).to_string(), "ADD HL,BC");
        assert_eq!(decode(0xD6, 0x0A).to_string(), "SUB $0A");
        assert_eq!(decode(0x2F, 0).to_string(), "CPL");
    }
}
