//! Deskcalc: a pure functional four-function calculator core
//!
//! Deskcalc follows a "pure core, imperative shell" layout. The calculator's
//! input state machine is a set of pure functions over one immutable
//! [`EngineState`] value; a thin [`Calculator`] session stores the current
//! value, feeds completed calculations into a capped history, and logs.
//!
//! # Core Concepts
//!
//! - **Engine**: pure transitions for digits, decimal point, operators, equals,
//!   clear, backspace, percent and sign toggling
//! - **Keys**: one [`Key`] type for keypad buttons and keyboard keys alike
//! - **History**: immutable, newest-first list of the last calculations
//!
//! # Example
//!
//! ```rust
//! use deskcalc::{Calculator, Key, Operation};
//!
//! let mut calc = Calculator::new();
//! calc.press_all([Key::Digit(1), Key::Digit(2)]);
//! assert_eq!(calc.display(), "12");
//!
//! calc.press(Key::Operator(Operation::Add));
//! assert_eq!(calc.expression(), "12 +");
//!
//! calc.press(Key::Digit(5));
//! calc.press(Key::Equals);
//! assert_eq!(calc.display(), "17");
//!
//! let head = calc.history().latest().unwrap();
//! assert_eq!(head.expression, "12 + 5");
//! assert_eq!(head.result, "17");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    format_for_display, Engine, EngineState, HistoryRecord, HistoryStore, Operation, Phase,
};
pub use builder::{BuildError, CalculatorBuilder};
pub use config::{CalculatorConfig, ConfigError};
pub use input::{Key, KeyError};
pub use session::Calculator;
