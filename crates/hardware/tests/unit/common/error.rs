//! Error Message Tests.
//!
//! The CLI prints these messages verbatim before exiting with status 1.

use e20sim_core::common::{ConfigError, LoadError, SimError};
use pretty_assertions::assert_eq;

#[test]
fn load_error_messages() {
    assert_eq!(
        LoadError::Malformed("garbage".into()).to_string(),
        "Can't parse line: garbage"
    );
    assert_eq!(
        LoadError::OutOfSequence(7).to_string(),
        "Memory addresses encountered out of sequence: 7"
    );
    assert_eq!(LoadError::TooBig.to_string(), "Program too big for memory");
}

#[test]
fn field_count_message_is_generic() {
    assert_eq!(ConfigError::FieldCount(4).to_string(), "Invalid cache config");
}

#[test]
fn sim_error_is_transparent_over_load_errors() {
    let err: SimError = LoadError::TooBig.into();
    assert_eq!(err.to_string(), "Program too big for memory");
}
