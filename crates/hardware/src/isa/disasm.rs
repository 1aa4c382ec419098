//! E20 Instruction Disassembler.
//!
//! Renders decoded instructions in assembler syntax for instruction tracing and
//! test diagnostics. Immediates are printed as signed decimals.

use std::fmt;

use crate::isa::instruction::Instruction;

/// Reinterprets a sign-extended 16-bit immediate as a signed value.
fn signed(imm: u16) -> i16 {
    imm as i16
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Add { dst, src_a, src_b } => write!(f, "add {dst}, {src_a}, {src_b}"),
            Self::Sub { dst, src_a, src_b } => write!(f, "sub {dst}, {src_a}, {src_b}"),
            Self::Or { dst, src_a, src_b } => write!(f, "or {dst}, {src_a}, {src_b}"),
            Self::And { dst, src_a, src_b } => write!(f, "and {dst}, {src_a}, {src_b}"),
            Self::Slt { dst, src_a, src_b } => write!(f, "slt {dst}, {src_a}, {src_b}"),
            Self::Jr { src } => write!(f, "jr {src}"),
            Self::Addi { dst, src, imm } => write!(f, "addi {dst}, {src}, {}", signed(imm)),
            Self::Slti { dst, src, imm } => write!(f, "slti {dst}, {src}, {}", signed(imm)),
            Self::Lw { dst, base, imm } => write!(f, "lw {dst}, {}({base})", signed(imm)),
            Self::Sw { src, base, imm } => write!(f, "sw {src}, {}({base})", signed(imm)),
            Self::Jeq { src_a, src_b, imm } => {
                write!(f, "jeq {src_a}, {src_b}, {}", signed(imm))
            }
            Self::J { target } => write!(f, "j {target}"),
            Self::Jal { target } => write!(f, "jal {target}"),
            Self::Unknown(word) => write!(f, ".fill {word:#06x}"),
        }
    }
}
