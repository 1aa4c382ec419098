//! Cache Hierarchy.
//!
//! Composes one or two [`CacheSim`] levels in front of main memory:
//! 1. **Loads:** L1 is consulted first; L2 only when L1 misses.
//! 2. **Stores:** Written through to every level and classified as `SW`.
//! 3. **Logging:** As a [`MemoryObserver`] the hierarchy queues one
//!    [`CacheEvent`] per consulted level for the simulator to print.

use std::fmt;

use tracing::trace;

use super::{CacheLevel, CacheSim, Outcome};
use crate::common::{AccessType, Addr};
use crate::config::{CacheConfig, CacheHierarchyConfig};
use crate::core::traits::{MemAccess, MemoryObserver};

/// Classification of an access at one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelOutcome {
    /// Level consulted.
    pub level: CacheLevel,
    /// Hit, miss or store.
    pub outcome: Outcome,
    /// Row (set index) accessed in that level.
    pub row: usize,
}

/// A classified access, ready to be logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEvent {
    /// Level consulted.
    pub level: CacheLevel,
    /// Hit, miss or store.
    pub outcome: Outcome,
    /// Address of the `lw`/`sw` instruction.
    pub pc: Addr,
    /// Effective address accessed.
    pub addr: Addr,
    /// Row (set index) accessed.
    pub row: usize,
}

impl fmt::Display for CacheEvent {
    /// Formats the event in the fixed log column layout, e.g.
    /// `L1 HIT   pc:    5\taddr:   12\trow:   2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} {}", self.level, self.outcome);
        write!(
            f,
            "{label:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            self.pc, self.addr, self.row
        )
    }
}

/// One or two cache levels observing data accesses.
#[derive(Clone, Debug)]
pub struct CacheHierarchy {
    l1: CacheSim,
    l2: Option<CacheSim>,
    events: Vec<CacheEvent>,
}

impl CacheHierarchy {
    /// Builds a hierarchy with only an L1 cache.
    pub fn single(l1: &CacheConfig) -> Self {
        Self {
            l1: CacheSim::new(CacheLevel::L1, l1),
            l2: None,
            events: Vec::new(),
        }
    }

    /// Builds a two-level hierarchy.
    pub fn two_level(l1: &CacheConfig, l2: &CacheConfig) -> Self {
        Self {
            l1: CacheSim::new(CacheLevel::L1, l1),
            l2: Some(CacheSim::new(CacheLevel::L2, l2)),
            events: Vec::new(),
        }
    }

    /// Builds the hierarchy described by `config`.
    ///
    /// # Returns
    ///
    /// `None` when no L1 cache is configured (caching disabled).
    pub fn from_config(config: &CacheHierarchyConfig) -> Option<Self> {
        let l1 = config.l1.as_ref()?;
        Some(match &config.l2 {
            Some(l2) => Self::two_level(l1, l2),
            None => Self::single(l1),
        })
    }

    /// Returns the L1 cache.
    pub const fn l1(&self) -> &CacheSim {
        &self.l1
    }

    /// Returns the L2 cache, if configured.
    pub const fn l2(&self) -> Option<&CacheSim> {
        self.l2.as_ref()
    }

    /// Iterates over the configured levels, L1 first.
    pub fn levels(&self) -> impl Iterator<Item = &CacheSim> + '_ {
        std::iter::once(&self.l1).chain(self.l2.as_ref())
    }

    /// Classifies one access and updates every consulted level.
    ///
    /// A load consults L1 and stops on a hit; on an L1 miss it consults L2 if
    /// present. A store touches every level and is classified `Store` at each.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective address.
    /// * `kind` - Load or store.
    ///
    /// # Returns
    ///
    /// One entry per level consulted, in consultation order.
    pub fn access(&mut self, addr: Addr, kind: AccessType) -> Vec<LevelOutcome> {
        let mut outcomes = Vec::with_capacity(2);

        match kind {
            AccessType::Load => {
                let (row, lookup) = self.l1.access(addr);
                outcomes.push(LevelOutcome {
                    level: CacheLevel::L1,
                    outcome: if lookup.is_hit() { Outcome::Hit } else { Outcome::Miss },
                    row,
                });
                if lookup.is_hit() {
                    return outcomes;
                }
                if let Some(l2) = self.l2.as_mut() {
                    let (row, lookup) = l2.access(addr);
                    outcomes.push(LevelOutcome {
                        level: CacheLevel::L2,
                        outcome: if lookup.is_hit() { Outcome::Hit } else { Outcome::Miss },
                        row,
                    });
                }
            }
            AccessType::Store => {
                for cache in std::iter::once(&mut self.l1).chain(self.l2.as_mut()) {
                    let (row, _) = cache.access(addr);
                    outcomes.push(LevelOutcome {
                        level: cache.level(),
                        outcome: Outcome::Store,
                        row,
                    });
                }
            }
        }

        outcomes
    }

    /// Removes and returns the queued events in the order they occurred.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CacheEvent> {
        self.events.drain(..)
    }
}

impl MemoryObserver for CacheHierarchy {
    fn observe(&mut self, access: MemAccess) {
        for LevelOutcome {
            level,
            outcome,
            row,
        } in self.access(access.addr, access.kind)
        {
            trace!(%level, %outcome, pc = access.pc.val(), addr = access.addr.val(), row, "cache");
            self.events.push(CacheEvent {
                level,
                outcome,
                pc: access.pc,
                addr: access.addr,
                row,
            });
        }
    }
}
