//! Machine-Code Loader.
//!
//! This module reads E20 machine-code listings into a memory image. It performs:
//! 1. **Parsing:** Each line must look like `ram[ADDR] = 16'bBITS;` (anything may follow the `;`).
//! 2. **Sequencing:** Addresses must start at 0 and increase by exactly one per line.
//! 3. **Bounds:** A program may not extend past the 8192-word memory.
//!
//! Every violation is fatal and reported as a [`LoadError`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, MEM_SIZE};
use crate::core::arch::Memory;

/// Parses one listing line into `(address, word)`.
///
/// # Arguments
///
/// * `line` - One line of the listing, without its terminator.
///
/// # Returns
///
/// `None` if the line does not match `ram[ADDR] = 16'bBITS;...`, where `ADDR`
/// is decimal and `BITS` is binary and fits in 16 bits.
pub fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix("ram[")?;
    let (addr, rest) = rest.split_once(']')?;
    let rest = rest.strip_prefix(" = 16'b")?;
    let (bits, _) = rest.split_once(';')?;

    if addr.is_empty() || !addr.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let addr = addr.parse::<usize>().ok()?;
    let word = u16::from_str_radix(bits, 2).ok()?;
    Some((addr, word))
}

/// Loads a listing from any buffered reader.
///
/// Lines are checked in order: format, then sequence, then the memory bound.
/// An empty listing produces an all-zero memory.
///
/// # Errors
///
/// [`LoadError::Malformed`], [`LoadError::OutOfSequence`], [`LoadError::TooBig`],
/// or [`LoadError::Io`] if reading fails part way.
pub fn load_program<R: BufRead>(reader: R) -> Result<Memory, LoadError> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Io {
            path: "<input>".into(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let (addr, word) =
            parse_line(line).ok_or_else(|| LoadError::Malformed(line.to_string()))?;
        if addr != words.len() {
            return Err(LoadError::OutOfSequence(addr));
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::TooBig);
        }
        words.push(word);
    }

    debug!(words = words.len(), "program loaded");
    Ok(Memory::from_words(&words))
}

/// Loads a listing from a file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be opened or read, otherwise as
/// [`load_program`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Memory, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_program(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io { source, .. } => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
