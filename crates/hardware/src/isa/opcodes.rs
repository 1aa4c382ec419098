//! E20 Major Opcodes.
//!
//! Defines the 3-bit opcodes held in bits 15-13 of every instruction word.

/// Three-register arithmetic, logic and `jr` (function code selects the operation).
pub const OP_REG: u16 = 0b000;

/// Add immediate.
pub const OP_ADDI: u16 = 0b001;

/// Unconditional absolute jump.
pub const OP_J: u16 = 0b010;

/// Jump and link.
pub const OP_JAL: u16 = 0b011;

/// Load word.
pub const OP_LW: u16 = 0b100;

/// Store word.
pub const OP_SW: u16 = 0b101;

/// Branch if equal (pc-relative).
pub const OP_JEQ: u16 = 0b110;

/// Set if less than immediate (unsigned compare).
pub const OP_SLTI: u16 = 0b111;
