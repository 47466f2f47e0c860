//! Pure calculator core.
//!
//! This module contains the side-effect-free part of the calculator:
//! - The engine state value and its transition rules
//! - Operand parsing, rounding and rendering
//! - Display formatting
//! - The immutable, capped calculation history
//!
//! Nothing in this module logs, allocates global state, or performs I/O.

mod engine;
mod evaluate;
mod format;
mod history;
mod operation;
mod state;

pub use engine::{Engine, Step, DEFAULT_MAX_INPUT_LEN};
pub use evaluate::{
    evaluate, evaluate_with_precision, parse_operand, render_number, round_to, DEFAULT_PRECISION,
    MAX_PRECISION,
};
pub use format::format_for_display;
pub use history::{HistoryRecord, HistoryStore, DEFAULT_HISTORY_CAPACITY};
pub use operation::Operation;
pub use state::{EngineState, Phase};
