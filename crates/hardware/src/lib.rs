//! E20 processor simulator library.
//!
//! This crate implements an instruction-level simulator for the 16-bit E20 ISA with the following:
//! 1. **Core:** Eight 16-bit registers (`$0` hard-wired to zero), 13-bit pc, and 8192 words of memory.
//! 2. **ISA:** Decoding, disassembly and execution of the fourteen E20 instructions.
//! 3. **Caches:** Optional one- or two-level set-associative LRU caches that log every data access.
//! 4. **Simulation:** Machine-code loader, run loop, final-state and cache reports, and statistics.

/// Common types and constants (addresses, registers, access types, errors).
pub mod common;
/// Simulator configuration (cache geometry, run limits, `--cache` parsing, JSON).
pub mod config;
/// CPU core (architectural state, execution, memory observers, caches).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Loader, run loop and reports.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, pc, memory and stats.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the optional cache hierarchy.
pub use crate::sim::Simulator;
