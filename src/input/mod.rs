//! Key events and their two sources: on-screen buttons and the keyboard.
//!
//! Both sources produce the same [`Key`] value, so the engine has a single
//! dispatch point regardless of where an event came from.

pub mod error;

pub use error::KeyError;

use crate::core::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One discrete calculator input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A digit, always in `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
    Percent,
    ToggleSign,
}

/// Keypad layout, row by row.
pub const KEYPAD: [[Key; 4]; 5] = [
    [
        Key::Clear,
        Key::ToggleSign,
        Key::Percent,
        Key::Operator(Operation::Divide),
    ],
    [
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operation::Multiply),
    ],
    [
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operation::Subtract),
    ],
    [
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operation::Add),
    ],
    [Key::Backspace, Key::Digit(0), Key::DecimalPoint, Key::Equals],
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Build a digit key, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self, KeyError> {
        if value > 9 {
            return Err(KeyError::DigitOutOfRange(value));
        }
        Ok(Self::Digit(value))
    }

    /// Map a physical keyboard key name to a calculator key.
    ///
    /// Names follow the DOM `KeyboardEvent.key` values. Keys with no calculator
    /// meaning return `None` and should be ignored. Sign toggling has no
    /// keyboard binding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::core::Operation;
    /// use deskcalc::input::Key;
    ///
    /// assert_eq!(Key::from_keyboard("7"), Some(Key::Digit(7)));
    /// assert_eq!(Key::from_keyboard("*"), Some(Key::Operator(Operation::Multiply)));
    /// assert_eq!(Key::from_keyboard("Enter"), Some(Key::Equals));
    /// assert_eq!(Key::from_keyboard("Tab"), None);
    /// ```
    pub fn from_keyboard(name: &str) -> Option<Self> {
        match name {
            "." => Some(Self::DecimalPoint),
            "%" => Some(Self::Percent),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            "+" | "-" | "*" | "/" => Operation::from_symbol(name).map(Self::Operator),
            _ => Self::parse_digit(name),
        }
    }

    /// Label printed on the keypad button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::DecimalPoint => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::Backspace => "⌫",
            Self::Percent => "%",
            Self::ToggleSign => "+/-",
        }
    }

    fn parse_digit(text: &str) -> Option<Self> {
        match text.as_bytes() {
            [b @ b'0'..=b'9'] => Some(Self::Digit(b - b'0')),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parse a keypad button label.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "=" => Self::Equals,
            "." => Self::DecimalPoint,
            "⌫" => Self::Backspace,
            _ => match Operation::from_symbol(label) {
                Some(op) => Self::Operator(op),
                None => Self::parse_digit(label).ok_or_else(|| KeyError::UnknownLabel {
                    label: label.to_string(),
                })?,
            },
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
