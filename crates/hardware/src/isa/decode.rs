//! E20 Instruction Decoder.
//!
//! Decodes 16-bit instruction words into a structured [`Instruction`]. Every
//! word decodes to something: an unassigned three-register function code yields
//! [`Instruction::Unknown`], which the engine treats as a no-op.

use crate::common::Addr;
use crate::isa::funct;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;

/// Sign bit of a 7-bit immediate.
const IMM7_SIGN_BIT: u16 = 1 << 6;

/// Bits 7-15, set when widening a negative 7-bit immediate.
const IMM7_EXTENSION: u16 = 0xFF80;

/// Sign-extends a 7-bit immediate to 16 bits.
///
/// If bit 6 is set the upper nine bits are filled with ones, producing the
/// two's-complement encoding of a value in `-64..=-1`. Bits above 6 in the
/// input are ignored.
///
/// # Arguments
///
/// * `imm` - The raw immediate field.
///
/// # Returns
///
/// The 16-bit sign-extended value.
pub const fn sign_extend_7(imm: u16) -> u16 {
    let imm = imm & 0x7F;
    if imm & IMM7_SIGN_BIT == 0 {
        imm
    } else {
        imm | IMM7_EXTENSION
    }
}

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The 16-bit instruction word fetched from memory.
///
/// # Returns
///
/// The decoded [`Instruction`].
pub fn decode(word: u16) -> Instruction {
    let src_a = word.reg_a();
    let src_b = word.reg_b();
    let imm = sign_extend_7(word.imm7());

    match word.opcode() {
        opcodes::OP_REG => decode_reg(word),
        opcodes::OP_ADDI => Instruction::Addi {
            dst: src_b,
            src: src_a,
            imm,
        },
        opcodes::OP_J => Instruction::J {
            target: Addr::new(word.imm13()),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: Addr::new(word.imm13()),
        },
        opcodes::OP_LW => Instruction::Lw {
            dst: src_b,
            base: src_a,
            imm,
        },
        opcodes::OP_SW => Instruction::Sw {
            src: src_b,
            base: src_a,
            imm,
        },
        opcodes::OP_JEQ => Instruction::Jeq { src_a, src_b, imm },
        opcodes::OP_SLTI => Instruction::Slti {
            dst: src_b,
            src: src_a,
            imm,
        },
        // opcode() is three bits wide; every value is matched above.
        _ => Instruction::Unknown(word),
    }
}

/// Decodes a three-register (opcode `000`) instruction by its function code.
fn decode_reg(word: u16) -> Instruction {
    let src_a = word.reg_a();
    let src_b = word.reg_b();
    let dst = word.reg_c();

    match word.func() {
        funct::ADD => Instruction::Add { dst, src_a, src_b },
        funct::SUB => Instruction::Sub { dst, src_a, src_b },
        funct::OR => Instruction::Or { dst, src_a, src_b },
        funct::AND => Instruction::And { dst, src_a, src_b },
        funct::SLT => Instruction::Slt { dst, src_a, src_b },
        funct::JR => Instruction::Jr { src: src_a },
        _ => Instruction::Unknown(word),
    }
}
