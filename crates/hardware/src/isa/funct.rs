//! Three-Register Function Codes.
//!
//! Bits 3-0 of an opcode `000` instruction.

/// `add $dst, $a, $b`
pub const ADD: u16 = 0b0000;
/// `sub $dst, $a, $b`
pub const SUB: u16 = 0b0001;
/// `or $dst, $a, $b`
pub const OR: u16 = 0b0010;
/// `and $dst, $a, $b`
pub const AND: u16 = 0b0011;
/// `slt $dst, $a, $b`
pub const SLT: u16 = 0b0100;
/// `jr $a`
pub const JR: u16 = 0b1000;
