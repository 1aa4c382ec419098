//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the small value types shared by every component. It includes:
//! 1. **Address Types:** A 13-bit word address that always indexes memory in range.
//! 2. **Register Indices:** A 3-bit register selector with the zero and link registers named.
//! 3. **Constants:** Machine geometry and report layout constants.
//! 4. **Memory Access:** The load/store classification reported to memory observers.
//! 5. **Error Handling:** Fatal loader, configuration and output errors.

/// Word address type.
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for loading, configuration and simulation output.
pub mod error;

/// Register index type.
pub mod reg;

pub use addr::Addr;
pub use constants::{ADDR_MASK, MEM_SIZE, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, LoadError, SimError};
pub use reg::RegIdx;
