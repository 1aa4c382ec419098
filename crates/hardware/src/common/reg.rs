//! Register index type.
//!
//! Register fields in an E20 instruction are three bits wide. `RegIdx` keeps
//! that width in the type so the register file never has to bounds-check.

use std::fmt;

/// Index of one of the eight E20 registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegIdx(u8);

impl RegIdx {
    /// Register `$0`, hardwired to zero.
    pub const ZERO: Self = Self(0);

    /// Register `$7`, written with the return address by `jal`.
    pub const LINK: Self = Self(7);

    /// Creates a register index from a raw field value, keeping only the low 3 bits.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self((raw & 0x7) as u8)
    }

    /// Returns the index as a `usize` (0-7).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for register `$0`.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RegIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
