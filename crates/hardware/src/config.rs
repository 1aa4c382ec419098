//! Configuration system for the E20 simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Structures:** General run settings and the one- or two-level cache geometry.
//! 2. **Parsing:** The `SIZE,ASSOC,BLOCK[,SIZE,ASSOC,BLOCK]` text accepted by `--cache`.
//! 3. **JSON:** Whole configurations deserialized with serde, e.g. from a `--config` file.
//!
//! All sizes are in words. Use `Config::default()` for the plain, cache-less machine.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;

/// Root configuration.
///
/// # Examples
///
/// ```
/// use e20sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_steps": 100000 },
///     "cache": {
///         "l1": { "size": 8, "associativity": 2, "block_size": 2 },
///         "l2": { "size": 32, "associativity": 4, "block_size": 4 }
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(100000));
/// assert_eq!(config.cache.l1.unwrap().rows(), 2);
/// assert_eq!(config.cache.l2.unwrap().rows(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Cache hierarchy; empty means caching is disabled.
    #[serde(default)]
    pub cache: CacheHierarchyConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and the cache validation
    /// errors for unusable geometries.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.cache.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions if the program has not halted.
    /// `None` runs until halt.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Cache hierarchy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CacheHierarchyConfig {
    /// First-level cache.
    #[serde(default)]
    pub l1: Option<CacheConfig>,
    /// Second-level cache; requires `l1`.
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl CacheHierarchyConfig {
    /// Returns `true` if at least one cache level is configured.
    pub const fn is_enabled(&self) -> bool {
        self.l1.is_some()
    }

    /// Checks every configured level.
    ///
    /// # Errors
    ///
    /// [`ConfigError::L2WithoutL1`] for an L2 without an L1, or the first
    /// error reported by [`CacheConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.l1, &self.l2) {
            (None, Some(_)) => Err(ConfigError::L2WithoutL1),
            (l1, l2) => {
                if let Some(c) = l1 {
                    c.validate("L1")?;
                }
                if let Some(c) = l2 {
                    c.validate("L2")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for CacheHierarchyConfig {
    type Err = ConfigError;

    /// Parses `SIZE,ASSOC,BLOCK` (L1 only) or
    /// `SIZE,ASSOC,BLOCK,SIZE,ASSOC,BLOCK` (L1 and L2).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<usize>()
                    .map_err(|_| ConfigError::NotANumber(field.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let config = match parts.as_slice() {
            &[size, associativity, block_size] => Self {
                l1: Some(CacheConfig::new(size, associativity, block_size)),
                l2: None,
            },
            &[s1, a1, b1, s2, a2, b2] => Self {
                l1: Some(CacheConfig::new(s1, a1, b1)),
                l2: Some(CacheConfig::new(s2, a2, b2)),
            },
            other => return Err(ConfigError::FieldCount(other.len())),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Geometry of one cache level, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in words (excluding tags).
    pub size: usize,
    /// Ways per set.
    pub associativity: usize,
    /// Words per block.
    pub block_size: usize,
}

impl CacheConfig {
    /// Creates a cache geometry.
    pub const fn new(size: usize, associativity: usize, block_size: usize) -> Self {
        Self {
            size,
            associativity,
            block_size,
        }
    }

    /// Returns the number of rows, `size / (associativity * block_size)`,
    /// truncating. Returns 0 if either divisor is 0.
    pub const fn rows(&self) -> usize {
        match self.associativity.checked_mul(self.block_size) {
            Some(0) | None => 0,
            Some(set_words) => self.size / set_words,
        }
    }

    /// Checks that the geometry yields a usable cache.
    ///
    /// Geometries that do not divide evenly are accepted; only dimensions that
    /// would leave the cache without a single row are rejected.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroField`] for a zero dimension, [`ConfigError::NoRows`]
    /// when `size` is smaller than one set.
    pub fn validate(&self, level: &'static str) -> Result<(), ConfigError> {
        for (field, value) in [
            ("size", self.size),
            ("associativity", self.associativity),
            ("blocksize", self.block_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroField { level, field });
            }
        }
        if self.rows() == 0 {
            return Err(ConfigError::NoRows { level });
        }
        Ok(())
    }
}
