//! Key parsing errors.

use thiserror::Error;

/// Errors raised when turning a label or value into a [`Key`](super::Key).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Unknown key label '{label}'")]
    UnknownLabel { label: String },

    #[error("Digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(u8),
}
