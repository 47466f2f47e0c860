//! The four arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four calculator operators.
///
/// Symbols follow the keypad: `+`, `-`, `×`, `÷`. Parsing also accepts the
/// ASCII forms `*` and `/` that a physical keyboard produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operators, in keypad order from top to bottom.
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Add,
    ];

    /// Symbol shown on the keypad and in expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol or its ASCII keyboard equivalent.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with plain IEEE-754 semantics.
    ///
    /// Division by zero is not an error: it yields infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn ascii_aliases_parse() {
        assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("x"), None);
    }

    #[test]
    fn apply_uses_ieee_semantics() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn display_writes_symbol() {
        assert_eq!(Operation::Multiply.to_string(), "×");
        assert_eq!(format!("12 {} 5", Operation::Divide), "12 ÷ 5");
    }
}
