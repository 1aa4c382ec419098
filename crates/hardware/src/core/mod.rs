//! E20 processor core.
//!
//! 1. **Arch:** Register file and main memory.
//! 2. **Cpu:** Fetch-decode-execute engine and run state.
//! 3. **Traits:** The memory-access observer seam the engine reports to.
//! 4. **Units:** The cache hierarchy observing data accesses.

/// Architectural storage (registers, memory).
pub mod arch;

/// Execution engine.
pub mod cpu;

/// Memory-access observer trait.
pub mod traits;

/// Functional units attached to the engine (cache hierarchy).
pub mod units;

pub use cpu::{Cpu, RunState};
pub use traits::{MemAccess, MemoryObserver, NullObserver};
