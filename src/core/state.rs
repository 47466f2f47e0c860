//! Engine state value and its derived phase.
//!
//! The calculator's state is a single immutable value. Engine operations never
//! mutate it in place; they return the next value, which the caller stores and
//! renders.

use super::format::format_for_display;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Complete state of the calculator input machine.
///
/// Which of `current_input`, `previous_operand` and `operation` are populated
/// encodes where the machine is; see [`Phase`] for the named shapes.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{EngineState, Phase};
///
/// let state = EngineState::new();
/// assert_eq!(state.display_value(), "0");
/// assert_eq!(state.expression(), "");
/// assert_eq!(state.phase(), Phase::Ready);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) current_input: String,
    #[serde(with = "operand_text")]
    pub(crate) previous_operand: Option<f64>,
    pub(crate) operation: Option<Operation>,
    pub(crate) is_new_operation: bool,
    pub(crate) display_value: String,
    pub(crate) expression: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// The initial state: display `0`, nothing staged, next digit starts fresh.
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            previous_operand: None,
            operation: None,
            is_new_operation: true,
            display_value: "0".to_string(),
            expression: String::new(),
        }
    }

    /// Operand being typed, or empty.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Operand staged before the pending operator.
    pub fn previous_operand(&self) -> Option<f64> {
        self.previous_operand
    }

    /// Pending operator.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit starts a fresh operand.
    pub fn is_new_operation(&self) -> bool {
        self.is_new_operation
    }

    /// Raw display string, without thousands separators.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Display string with thousands separators for rendering.
    pub fn formatted_display(&self) -> String {
        format_for_display(&self.display_value)
    }

    /// Running equation, e.g. `12 + 5` or `12 + 5 = 17`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the display holds a non-finite value from degenerate arithmetic.
    pub fn is_error(&self) -> bool {
        matches!(
            self.display_value.as_str(),
            "Infinity" | "-Infinity" | "NaN"
        )
    }

    /// Named shape of this state.
    pub fn phase(&self) -> Phase {
        match (self.previous_operand, self.operation) {
            (Some(_), Some(_)) if self.current_input.is_empty() => Phase::OperatorPending,
            (Some(_), Some(_)) => Phase::EnteringSecond,
            _ if self.current_input.is_empty() => Phase::Ready,
            _ if self.is_new_operation => Phase::Result,
            _ => Phase::EnteringFirst,
        }
    }
}

/// Named shape of an [`EngineState`].
///
/// The machine is cyclic: there is no final phase. `clear` returns to
/// [`Phase::Ready`] and a completed equals lands in [`Phase::Result`], from
/// which the result can be chained into the next calculation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed yet.
    Ready,
    /// Typing the first operand.
    EnteringFirst,
    /// Operator chosen, second operand not started.
    OperatorPending,
    /// Typing the second operand.
    EnteringSecond,
    /// Showing a result that the next operator will pick up.
    Result,
}

impl Phase {
    /// Phase name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorPending => "OperatorPending",
            Self::EnteringSecond => "EnteringSecond",
            Self::Result => "Result",
        }
    }
}

/// Staged operands can be `Infinity` or `NaN`, which JSON numbers cannot hold,
/// so they are written in their rendered text form.
mod operand_text {
    use crate::core::evaluate::render_number;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(render_number).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| text.parse::<f64>().map_err(serde::de::Error::custom))
            .transpose()
    }
}
