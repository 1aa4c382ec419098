//! Set-Associative Cache Simulator.
//!
//! This module implements the E20 cache model: set-associative caches with
//! LRU replacement that classify every data access as a hit or a miss. The
//! caches hold tags only. They never supply data; main memory is always read
//! and written by the engine (write-through, no dirty state).
//!
//! An address maps to a set and a tag by block:
//! `block = addr / block_size`, `row = block % rows`, `tag = block / rows`.

/// One- and two-level cache hierarchy.
pub mod hierarchy;

/// LRU-ordered cache set.
pub mod lru;

use std::fmt;

pub use self::hierarchy::{CacheEvent, CacheHierarchy, LevelOutcome};
pub use self::lru::{Lookup, LruSet, Tag};
use crate::common::Addr;
use crate::config::CacheConfig;

/// Position of a cache in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheLevel {
    /// First level, consulted on every access.
    L1,
    /// Second level, consulted on L1 load misses and on every store.
    L2,
}

impl CacheLevel {
    /// Returns the name used in reports (`"L1"`, `"L2"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of one access at one cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A load found its block.
    Hit,
    /// A load did not find its block.
    Miss,
    /// A store; stores are never reported as hits or misses.
    Store,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Store => "SW",
        })
    }
}

/// Cache simulator for one level.
#[derive(Clone, Debug)]
pub struct CacheSim {
    level: CacheLevel,
    config: CacheConfig,
    block_size: usize,
    rows: usize,
    sets: Vec<LruSet>,
}

impl CacheSim {
    /// Creates an empty cache with the given geometry.
    ///
    /// The row count is `size / (associativity * block_size)` with integer
    /// truncation. Configurations are validated by
    /// [`CacheConfig::validate`]; zero dimensions are clamped to one here so
    /// that address mapping never divides by zero.
    ///
    /// # Arguments
    ///
    /// * `level` - Position in the hierarchy, used for reporting.
    /// * `config` - Size, associativity and block size in words.
    pub fn new(level: CacheLevel, config: &CacheConfig) -> Self {
        let safe_ways = config.associativity.max(1);
        let safe_block = config.block_size.max(1);
        let rows = config.rows().max(1);

        Self {
            level,
            config: *config,
            block_size: safe_block,
            rows,
            sets: vec![LruSet::new(safe_ways); rows],
        }
    }

    /// Maps an address to its `(row, tag)` pair.
    ///
    /// Two addresses compete for the same set exactly when their rows are equal.
    pub const fn locate(&self, addr: Addr) -> (usize, Tag) {
        let block = addr.index() / self.block_size;
        (block % self.rows, (block / self.rows) as Tag)
    }

    /// Accesses the block containing `addr`, updating LRU state.
    ///
    /// Loads and stores update the set identically; the caller decides how
    /// to classify the result.
    ///
    /// # Returns
    ///
    /// The row accessed and the lookup result.
    pub fn access(&mut self, addr: Addr) -> (usize, Lookup) {
        let (row, tag) = self.locate(addr);
        (row, self.sets[row].touch(tag))
    }

    /// Returns `true` if the block containing `addr` is resident. Does not update LRU state.
    pub fn contains(&self, addr: Addr) -> bool {
        let (row, tag) = self.locate(addr);
        self.sets[row].contains(tag)
    }

    /// Returns the set at `row`, if it exists.
    pub fn set(&self, row: usize) -> Option<&LruSet> {
        self.sets.get(row)
    }

    /// Returns this cache's level.
    pub const fn level(&self) -> CacheLevel {
        self.level
    }

    /// Returns the configuration the cache was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the number of rows (sets).
    pub const fn rows(&self) -> usize {
        self.rows
    }
}
