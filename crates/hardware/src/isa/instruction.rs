//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the E20 instruction fields and the typed
//! `Instruction` produced by the decoder.

use crate::common::{Addr, RegIdx};

/// Bit shift for the major opcode (bits 15-13).
pub const OPCODE_SHIFT: u16 = 13;
/// Bit shift for the first register field (bits 12-10).
pub const REG_A_SHIFT: u16 = 10;
/// Bit shift for the second register field (bits 9-7).
pub const REG_B_SHIFT: u16 = 7;
/// Bit shift for the three-register destination field (bits 6-4).
pub const REG_C_SHIFT: u16 = 4;
/// Bit mask for a register field.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the function code (bits 3-0).
pub const FUNC_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate (bits 6-0).
pub const IMM7_MASK: u16 = 0x7F;
/// Bit mask for the 13-bit jump target (bits 12-0).
pub const IMM13_MASK: u16 = 0x1FFF;

/// Trait for extracting instruction fields from an encoded 16-bit word.
pub trait InstructionBits {
    /// Extracts the 3-bit major opcode.
    fn opcode(&self) -> u16;

    /// Extracts the register field at bits 12-10.
    fn reg_a(&self) -> RegIdx;

    /// Extracts the register field at bits 9-7.
    ///
    /// This is `regB` for three-register and store/branch formats and the
    /// destination for `addi`, `lw` and `slti`.
    fn reg_b(&self) -> RegIdx;

    /// Extracts the destination register of a three-register instruction (bits 6-4).
    fn reg_c(&self) -> RegIdx;

    /// Extracts the 4-bit function code.
    fn func(&self) -> u16;

    /// Extracts the raw (not sign-extended) 7-bit immediate.
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit jump target.
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn reg_a(&self) -> RegIdx {
        RegIdx::new((self >> REG_A_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn reg_b(&self) -> RegIdx {
        RegIdx::new((self >> REG_B_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn reg_c(&self) -> RegIdx {
        RegIdx::new((self >> REG_C_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn func(&self) -> u16 {
        self & FUNC_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// A decoded E20 instruction.
///
/// Immediates of `addi`, `slti`, `lw`, `sw` and `jeq` are stored already
/// sign-extended to 16 bits; arithmetic on them is modulo 2^16.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `dst = a + b`
    Add {
        /// Destination register.
        dst: RegIdx,
        /// First operand.
        src_a: RegIdx,
        /// Second operand.
        src_b: RegIdx,
    },
    /// `dst = a - b`
    Sub {
        /// Destination register.
        dst: RegIdx,
        /// First operand.
        src_a: RegIdx,
        /// Second operand.
        src_b: RegIdx,
    },
    /// `dst = a | b`
    Or {
        /// Destination register.
        dst: RegIdx,
        /// First operand.
        src_a: RegIdx,
        /// Second operand.
        src_b: RegIdx,
    },
    /// `dst = a & b`
    And {
        /// Destination register.
        dst: RegIdx,
        /// First operand.
        src_a: RegIdx,
        /// Second operand.
        src_b: RegIdx,
    },
    /// `dst = (a < b) ? 1 : 0`, unsigned.
    Slt {
        /// Destination register.
        dst: RegIdx,
        /// First operand.
        src_a: RegIdx,
        /// Second operand.
        src_b: RegIdx,
    },
    /// `pc = a`
    Jr {
        /// Register holding the target.
        src: RegIdx,
    },
    /// `dst = src + imm`
    Addi {
        /// Destination register.
        dst: RegIdx,
        /// Source register.
        src: RegIdx,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `dst = (src < imm) ? 1 : 0`, unsigned against the sign-extended immediate.
    Slti {
        /// Destination register.
        dst: RegIdx,
        /// Source register.
        src: RegIdx,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `dst = mem[base + imm]`
    Lw {
        /// Destination register.
        dst: RegIdx,
        /// Base address register.
        base: RegIdx,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `mem[base + imm] = src`
    Sw {
        /// Register holding the value stored.
        src: RegIdx,
        /// Base address register.
        base: RegIdx,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `if a == b { pc += imm }; pc += 1`
    Jeq {
        /// First compared register.
        src_a: RegIdx,
        /// Second compared register.
        src_b: RegIdx,
        /// Sign-extended relative offset.
        imm: u16,
    },
    /// `pc = target`; halts when `target` is the current `pc`.
    J {
        /// Absolute target.
        target: Addr,
    },
    /// `$7 = pc + 1; pc = target`
    Jal {
        /// Absolute target.
        target: Addr,
    },
    /// A three-register word with an unassigned function code; executes as a no-op.
    Unknown(u16),
}

impl Instruction {
    /// Returns `true` for `lw` and `sw`, the only instructions that touch data memory.
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Lw { .. } | Self::Sw { .. })
    }

    /// Returns `true` for instructions that may redirect the program counter.
    pub const fn is_control(&self) -> bool {
        matches!(
            self,
            Self::Jr { .. } | Self::Jeq { .. } | Self::J { .. } | Self::Jal { .. }
        )
    }
}
