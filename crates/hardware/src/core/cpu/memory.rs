//! Memory Access Handling.
//!
//! Implements the data side of `lw` and `sw`. The effective address is computed
//! in 16 bits (base register plus sign-extended offset, wrapping) and masked to
//! the 13-bit address space. Main memory is always read or written first; the
//! observer is told about the access afterwards and cannot change its result.

use crate::common::{AccessType, Addr, RegIdx};
use crate::core::Cpu;
use crate::core::traits::{MemAccess, MemoryObserver};

impl Cpu {
    /// Computes the effective address `base + imm`, wrapped to 13 bits.
    #[inline(always)]
    pub fn effective_address(&self, base: RegIdx, imm: u16) -> Addr {
        Addr::new(self.regs.read(base).wrapping_add(imm))
    }

    /// Loads a word for `lw` and reports the access.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective address.
    /// * `observer` - Receives the access after memory has been read.
    ///
    /// # Returns
    ///
    /// The word at `addr`.
    pub fn load_word(&mut self, addr: Addr, observer: &mut dyn MemoryObserver) -> u16 {
        let val = self.mem.read(addr);
        observer.observe(MemAccess {
            pc: self.pc,
            addr,
            kind: AccessType::Load,
        });
        val
    }

    /// Stores a word for `sw` and reports the access.
    ///
    /// Memory is written unconditionally (write-through); the observer only
    /// classifies.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective address.
    /// * `val` - Word to store.
    /// * `observer` - Receives the access after memory has been written.
    pub fn store_word(&mut self, addr: Addr, val: u16, observer: &mut dyn MemoryObserver) {
        self.mem.write(addr, val);
        observer.observe(MemAccess {
            pc: self.pc,
            addr,
            kind: AccessType::Store,
        });
    }
}
