//! Memory-access observer seam.
//!
//! The execution engine reports every data access (`lw`, `sw`) to a
//! [`MemoryObserver`] after performing it against main memory. Observers can
//! classify or count accesses but cannot change their architectural result;
//! the cache hierarchy is the main implementor.

use crate::common::{AccessType, Addr};

/// One data memory access performed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemAccess {
    /// Address of the `lw`/`sw` instruction.
    pub pc: Addr,
    /// Effective address, already masked to 13 bits.
    pub addr: Addr,
    /// Load or store.
    pub kind: AccessType,
}

/// Receives every data memory access performed by the engine.
pub trait MemoryObserver {
    /// Called once per `lw` or `sw`, after main memory has been read or written.
    fn observe(&mut self, access: MemAccess);
}

/// Observer that ignores every access; used when no cache is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MemoryObserver for NullObserver {
    #[inline(always)]
    fn observe(&mut self, _access: MemAccess) {}
}

impl<O: MemoryObserver + ?Sized> MemoryObserver for &mut O {
    fn observe(&mut self, access: MemAccess) {
        (**self).observe(access);
    }
}
