//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 opcode and function-code tables, field extraction, decoding
//! into a typed [`Instruction`](instruction::Instruction), and a disassembler
//! used by instruction tracing.
//!
//! # Formats
//!
//! * Three-register: `opc[15:13] | regA[12:10] | regB[9:7] | regDst[6:4] | func[3:0]`
//! * Two-register:   `opc[15:13] | regA[12:10] | regB[9:7] | imm[6:0]`
//! * No-register:    `opc[15:13] | imm[12:0]`

/// Instruction decoding and immediate sign extension.
pub mod decode;

/// Assembler-style rendering of decoded instructions.
pub mod disasm;

/// Function codes of three-register (opcode `000`) instructions.
pub mod funct;

/// Typed instructions and raw field extraction.
pub mod instruction;

/// Three-bit major opcodes.
pub mod opcodes;

pub use decode::{decode, sign_extend_7};
pub use instruction::{Instruction, InstructionBits};
