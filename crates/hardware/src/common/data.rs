//! Memory Access Types.
//!
//! This module defines how data accesses are classified when they are reported to
//! a memory observer. Instruction fetches are never reported; only `lw` and `sw`
//! are visible to the cache hierarchy.

use std::fmt;

/// Kind of data memory access performed by the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// A `lw` reading one word into a register.
    Load,

    /// A `sw` writing one register to memory.
    Store,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Store => f.write_str("store"),
        }
    }
}
