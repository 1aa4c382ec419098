//! Global Machine Constants.
//!
//! This module defines the fixed E20 geometry and the layout constants of the
//! final-state report.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Number of 16-bit words of memory (2^13).
pub const MEM_SIZE: usize = 1 << 13;

/// Mask selecting the 13 address bits of a word.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Number of memory words printed in the final-state dump.
pub const DUMP_WORDS: usize = 128;

/// Memory words per line in the final-state dump.
pub const DUMP_WORDS_PER_LINE: usize = 8;
