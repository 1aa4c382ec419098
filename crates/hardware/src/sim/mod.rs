//! Simulation driver, program loading and reporting.
//!
//! Provides the loader that turns a machine-code listing into a memory image,
//! the [`Simulator`] that runs the engine with an optional cache hierarchy, and
//! the text reports printed around a run.

/// Machine-code file loader.
pub mod loader;

/// Final-state and cache configuration reports.
pub mod report;

/// Top-level run loop.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
