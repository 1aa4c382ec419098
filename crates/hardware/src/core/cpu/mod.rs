//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the container for the entire E20
//! processor state. It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter and run state.
//! 2. **Execution:** One instruction per [`Cpu::step`] (see [`execution`]).
//! 3. **Memory Access:** Loads and stores reported to a memory observer (see [`memory`]).

/// Fetch-decode-execute step.
pub mod execution;

/// Data memory access and observer notification.
pub mod memory;

use crate::common::Addr;
use crate::core::arch::{Gpr, Memory};
use crate::stats::SimStats;

/// Run state of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being executed.
    #[default]
    Running,
    /// A `j` to its own address was executed; nothing further runs.
    Halted,
}

/// Main CPU structure containing all processor state.
///
/// Created once with the loaded memory image, mutated only by [`Cpu::step`].
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter. Always a 13-bit address.
    pub pc: Addr,
    /// Main memory (instructions and data).
    pub mem: Memory,
    /// Running or halted.
    pub state: RunState,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in the initial state: `pc = 0`, all registers zero, running.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory image produced by the loader.
    pub fn new(mem: Memory) -> Self {
        Self {
            regs: Gpr::new(),
            pc: Addr::ZERO,
            mem,
            state: RunState::Running,
            stats: SimStats::new(),
        }
    }

    /// Returns `true` once the halt idiom has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }
}
