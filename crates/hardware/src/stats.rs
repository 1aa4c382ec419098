//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the E20 simulator. It provides:
//! 1. **Instruction count:** Instructions retired until halt.
//! 2. **Instruction mix:** Counts by category (register ALU, immediate, load, store, control).
//! 3. **Cache hierarchy:** Hit, miss and store counts for L1 and L2.

use std::fmt;

use crate::core::units::cache::{CacheLevel, Outcome};
use crate::isa::Instruction;

/// Hit/miss/store counters of one cache level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheCounters {
    /// Loads that found their block in this level.
    pub hits: u64,
    /// Loads that did not.
    pub misses: u64,
    /// Stores written through this level.
    pub stores: u64,
}

impl CacheCounters {
    /// Returns the load hit rate in `[0, 1]`, or `None` if no load reached this level.
    pub fn hit_rate(&self) -> Option<f64> {
        let loads = self.hits + self.misses;
        if loads == 0 {
            None
        } else {
            Some(self.hits as f64 / loads as f64)
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Miss => self.misses += 1,
            Outcome::Store => self.stores += 1,
        }
    }
}

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions executed, including the halting jump.
    pub instructions_retired: u64,

    /// Count of three-register `add`/`sub`/`or`/`and`/`slt` instructions.
    pub inst_alu: u64,
    /// Count of `addi`/`slti` instructions.
    pub inst_imm: u64,
    /// Count of `lw` instructions.
    pub inst_load: u64,
    /// Count of `sw` instructions.
    pub inst_store: u64,
    /// Count of `j`/`jal`/`jr`/`jeq` instructions.
    pub inst_control: u64,
    /// Count of `jeq` instructions whose branch was taken.
    pub branches_taken: u64,
    /// Count of words with an unassigned function code executed as no-ops.
    pub inst_unknown: u64,

    /// L1 cache counters.
    pub l1: CacheCounters,
    /// L2 cache counters.
    pub l2: CacheCounters,
}

impl SimStats {
    /// Creates a zeroed statistics record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one executed instruction in the instruction mix.
    pub fn record_instruction(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        if inst.is_control() {
            self.inst_control += 1;
            return;
        }
        match inst {
            Instruction::Lw { .. } => self.inst_load += 1,
            _ if inst.is_memory() => self.inst_store += 1,
            Instruction::Addi { .. } | Instruction::Slti { .. } => self.inst_imm += 1,
            Instruction::Unknown(_) => self.inst_unknown += 1,
            _ => self.inst_alu += 1,
        }
    }

    /// Records one cache classification.
    pub fn record_cache(&mut self, level: CacheLevel, outcome: Outcome) {
        match level {
            CacheLevel::L1 => self.l1.record(outcome),
            CacheLevel::L2 => self.l2.record(outcome),
        }
    }

    /// Prints the summary to stderr.
    pub fn print(&self) {
        eprint!("{self}");
    }
}

fn fmt_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{:.2}%", r * 100.0))
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "E20 SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "instructions retired     {}", self.instructions_retired)?;
        writeln!(f, "  alu                    {}", self.inst_alu)?;
        writeln!(f, "  immediate              {}", self.inst_imm)?;
        writeln!(f, "  load                   {}", self.inst_load)?;
        writeln!(f, "  store                  {}", self.inst_store)?;
        writeln!(
            f,
            "  control                {} ({} jeq taken)",
            self.inst_control, self.branches_taken
        )?;
        if self.inst_unknown > 0 {
            writeln!(f, "  unassigned (no-op)     {}", self.inst_unknown)?;
        }
        for (name, c) in [("L1", &self.l1), ("L2", &self.l2)] {
            if c.hits + c.misses + c.stores == 0 {
                continue;
            }
            writeln!(
                f,
                "{name}  hits {:<8} misses {:<8} stores {:<8} hit rate {}",
                c.hits,
                c.misses,
                c.stores,
                fmt_rate(c.hit_rate())
            )?;
        }
        Ok(())
    }
}
