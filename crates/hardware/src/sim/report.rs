//! Text reports.
//!
//! Formats the output that surrounds a run. The layouts are fixed column for column:
//! 1. **Cache configuration:** One line per level, printed before simulation.
//! 2. **Final state:** pc, registers and the first 128 memory words, printed after halt.
//!
//! Per-access cache lines are formatted by [`CacheEvent`](crate::core::units::cache::CacheEvent).

use std::io::{self, Write};

use crate::common::constants::{DUMP_WORDS, DUMP_WORDS_PER_LINE};
use crate::core::Cpu;
use crate::core::units::cache::{CacheHierarchy, CacheSim};

/// Writes the configuration line of one cache.
///
/// `Cache L1 has size 8, associativity 2, blocksize 2, rows 2`
///
/// # Errors
///
/// Propagates write failures.
pub fn write_cache_line<W: Write>(out: &mut W, cache: &CacheSim) -> io::Result<()> {
    let cfg = cache.config();
    writeln!(
        out,
        "Cache {} has size {}, associativity {}, blocksize {}, rows {}",
        cache.level(),
        cfg.size,
        cfg.associativity,
        cfg.block_size,
        cache.rows()
    )
}

/// Writes one configuration line per cache level, L1 first.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_cache_config<W: Write>(out: &mut W, caches: &CacheHierarchy) -> io::Result<()> {
    for cache in caches.levels() {
        write_cache_line(out, cache)?;
    }
    Ok(())
}

/// Writes the final machine state.
///
/// ```text
/// Final state:
///         pc=    3
///         $0=    0
///         ...
/// 2085 2103 0530 4003 0000 0000 0000 0000
/// ...
/// ```
///
/// Registers and pc are decimal, right-aligned to 5 columns after a tab. Memory
/// words are 4-digit lowercase hex, each followed by a space, 8 per line.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_final_state<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    writeln!(out, "Final state:")?;
    writeln!(out, "\tpc={:>5}", cpu.pc.val())?;
    for (i, val) in cpu.regs.iter().enumerate() {
        writeln!(out, "\t${i}={val:>5}")?;
    }

    for line in cpu.mem.words()[..DUMP_WORDS].chunks(DUMP_WORDS_PER_LINE) {
        for word in line {
            write!(out, "{word:04x} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
