//! E20 General-Purpose Register File.
//!
//! This module implements the eight 16-bit registers of the E20. It performs the following:
//! 1. **Storage:** Maintains registers `$0`-`$7`.
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Reporting:** Exposes the registers in index order for the final-state dump.

use crate::common::{NUM_REGS, RegIdx};

/// General-Purpose Register file.
///
/// Register `$0` always reads zero; writes to it are accepted and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    ///
    /// # Returns
    ///
    /// The 16-bit register value. Register `$0` always returns 0.
    #[inline(always)]
    pub const fn read(&self, idx: RegIdx) -> u16 {
        self.regs[idx.index()]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Writes to `$0` are ignored.
    /// * `val` - The 16-bit value to write.
    #[inline(always)]
    pub const fn write(&mut self, idx: RegIdx, val: u16) {
        if !idx.is_zero() {
            self.regs[idx.index()] = val;
        }
    }

    /// Iterates over the register values in index order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.regs.iter().copied()
    }
}
