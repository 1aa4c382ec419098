//! Architectural state of the E20 machine.
//!
//! Holds the storage the execution engine mutates: the register file and the
//! word-addressed main memory. The program counter lives on [`Cpu`](crate::core::Cpu).

/// General-purpose register file.
pub mod gpr;

/// Word-addressed main memory.
pub mod memory;

pub use gpr::Gpr;
pub use memory::Memory;
