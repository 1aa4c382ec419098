//! Simulator: owns the CPU and the optional cache hierarchy side by side.
//!
//! Keeping the hierarchy next to the CPU, rather than inside it, lets each step
//! lend the hierarchy to the engine as its memory observer without borrow
//! splitting. The same loop serves the plain and the cache-enabled machine.

use std::io::Write;

use tracing::{debug, info};

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::Memory;
use crate::core::units::cache::CacheHierarchy;
use crate::core::{Cpu, NullObserver, RunState};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed its halt idiom.
    Halted {
        /// Instructions executed, including the halting jump.
        steps: u64,
    },
    /// The configured step limit was reached first.
    StepLimit {
        /// Instructions executed.
        steps: u64,
    },
}

/// Top-level simulator: CPU architectural state + cache hierarchy.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Cache hierarchy, present when caching is configured.
    pub caches: Option<CacheHierarchy>,
    /// Instruction limit, `None` for unlimited.
    pub max_steps: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for a loaded memory image.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory image from the loader.
    /// * `config` - Cache geometry and run limits. Assumed validated.
    pub fn new(mem: Memory, config: &Config) -> Self {
        let caches = CacheHierarchy::from_config(&config.cache);
        debug!(
            caches = caches.as_ref().map_or(0, |c| c.levels().count()),
            max_steps = config.general.max_steps,
            "simulator created"
        );
        Self {
            cpu: Cpu::new(mem),
            caches,
            max_steps: config.general.max_steps,
        }
    }

    /// Executes one instruction, letting the cache hierarchy observe it.
    ///
    /// Cache events produced by the step stay queued on the hierarchy.
    pub fn step(&mut self) -> RunState {
        match self.caches.as_mut() {
            Some(caches) => self.cpu.step(caches),
            None => self.cpu.step(&mut NullObserver),
        }
    }

    /// Runs until halt or the step limit, writing every cache event to `log`.
    ///
    /// Each event is folded into the CPU statistics and written as soon as its
    /// instruction completes.
    ///
    /// # Errors
    ///
    /// [`SimError::Output`] if writing to `log` fails.
    pub fn run<W: Write>(&mut self, log: &mut W) -> Result<RunOutcome, SimError> {
        let mut steps = 0u64;

        while !self.cpu.is_halted() {
            if self.max_steps.is_some_and(|limit| steps >= limit) {
                info!(steps, "step limit reached");
                return Ok(RunOutcome::StepLimit { steps });
            }

            let _ = self.step();
            steps += 1;
            self.flush_events(log)?;
        }

        info!(steps, pc = self.cpu.pc.val(), "halted");
        Ok(RunOutcome::Halted { steps })
    }

    /// Writes and counts the cache events queued by the last step.
    fn flush_events<W: Write>(&mut self, log: &mut W) -> Result<(), SimError> {
        let Some(caches) = self.caches.as_mut() else {
            return Ok(());
        };
        for event in caches.drain_events() {
            self.cpu.stats.record_cache(event.level, event.outcome);
            writeln!(log, "{event}")?;
        }
        Ok(())
    }
}
