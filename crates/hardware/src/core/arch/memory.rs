//! Main memory.
//!
//! 8192 words shared by instructions and data. Indexed by [`Addr`], which is
//! masked to 13 bits, so every access is in range.

use crate::common::{Addr, MEM_SIZE};

/// The E20 main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16; MEM_SIZE]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: Box::new([0; MEM_SIZE]),
        }
    }

    /// Creates a memory whose first words are `words` and the rest zero.
    ///
    /// Words beyond the memory size are ignored; the loader rejects such
    /// programs before they get here.
    pub fn from_words(words: &[u16]) -> Self {
        let mut mem = Self::new();
        let len = words.len().min(MEM_SIZE);
        mem.words[..len].copy_from_slice(&words[..len]);
        mem
    }

    /// Reads the word at `addr`.
    #[inline(always)]
    pub fn read(&self, addr: Addr) -> u16 {
        self.words[addr.index()]
    }

    /// Writes `val` to the word at `addr`.
    #[inline(always)]
    pub fn write(&mut self, addr: Addr, val: u16) {
        self.words[addr.index()] = val;
    }

    /// Returns the whole memory as a slice in address order.
    pub fn words(&self) -> &[u16] {
        &self.words[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &MEM_SIZE)
            .field("nonzero_prefix", &&self.words[..used])
            .finish()
    }
}
