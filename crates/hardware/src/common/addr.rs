//! Word address type.
//!
//! E20 memory is word addressed with a 13-bit address space. `Addr` masks on
//! construction, so indexing memory with an `Addr` can never go out of range and
//! every jump target, effective address and program counter value shares the
//! same wraparound rule.

use std::fmt;

use super::constants::ADDR_MASK;

/// A 13-bit E20 word address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u16);

impl Addr {
    /// Address zero, where execution starts.
    pub const ZERO: Self = Self(0);

    /// Creates an address from a raw 16-bit value, keeping only the low 13 bits.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw value; bits 13-15 are discarded.
    ///
    /// # Returns
    ///
    /// The masked address.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self(raw & ADDR_MASK)
    }

    /// Returns the address as a 16-bit value (always below 8192).
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a memory index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the following address, wrapping from 8191 back to 0.
    #[inline(always)]
    pub const fn wrapping_next(self) -> Self {
        Self::new(self.0.wrapping_add(1))
    }

    /// Returns this address offset by a 16-bit two's-complement displacement, wrapped to 13 bits.
    #[inline(always)]
    pub const fn wrapping_offset(self, offset: u16) -> Self {
        Self::new(self.0.wrapping_add(offset))
    }
}

impl From<Addr> for u16 {
    fn from(addr: Addr) -> Self {
        addr.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
