//! Error definitions.
//!
//! All errors in the simulator are fatal and occur before simulation starts or
//! while writing its output. There is no runtime error category: arithmetic
//! overflow wraps and writes to `$0` are silently dropped.
//! 1. **Load errors:** Malformed, out-of-sequence or oversized machine code.
//! 2. **Configuration errors:** Bad `--cache` text or JSON configuration.
//! 3. **Simulation errors:** The union of the above plus output failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a machine-code file into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("Can't open file {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line does not match `ram[ADDR] = 16'bBITS;`.
    #[error("Can't parse line: {0}")]
    Malformed(String),

    /// An address did not follow its predecessor by exactly one, starting at 0.
    #[error("Memory addresses encountered out of sequence: {0}")]
    OutOfSequence(usize),

    /// The program does not fit in the 8192-word memory.
    #[error("Program too big for memory")]
    TooBig,
}

/// Invalid simulator or cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `--cache` value did not contain 3 or 6 fields.
    #[error("Invalid cache config")]
    FieldCount(usize),

    /// A `--cache` field is not a non-negative integer.
    #[error("Invalid cache config: {0:?} is not a number")]
    NotANumber(String),

    /// A cache dimension is zero.
    #[error("Invalid cache config: {field} of cache {level} must be nonzero")]
    ZeroField {
        /// Cache level name.
        level: &'static str,
        /// Offending dimension.
        field: &'static str,
    },

    /// The size is smaller than one set, so the cache would have no rows.
    #[error("Invalid cache config: cache {level} has no rows")]
    NoRows {
        /// Cache level name.
        level: &'static str,
    },

    /// An L2 cache was configured without an L1 cache.
    #[error("Invalid cache config: L2 requires L1")]
    L2WithoutL1,

    /// The JSON configuration could not be parsed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("Can't open file {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Any fatal simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Program loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the simulation log or report failed.
    #[error("failed to write simulator output: {0}")]
    Output(#[from] io::Error),
}
