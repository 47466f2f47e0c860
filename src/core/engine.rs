//! Calculator input state machine.
//!
//! Every operation takes the current [`EngineState`] by reference and returns
//! the next one. Nothing here performs I/O or keeps state of its own; the
//! [`Calculator`](crate::session::Calculator) shell stores the returned values.

use super::evaluate::{
    evaluate_with_precision, parse_operand, render_number, DEFAULT_PRECISION,
};
use super::history::HistoryRecord;
use super::operation::Operation;
use super::state::EngineState;
use crate::config::CalculatorConfig;
use crate::input::Key;

/// Default cap on the length of a typed operand.
pub const DEFAULT_MAX_INPUT_LEN: usize = 12;

/// Outcome of applying one key.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// The state after the key
    pub state: EngineState,
    /// Completed calculation, present only after a successful equals
    pub record: Option<HistoryRecord>,
}

impl Step {
    fn to(state: EngineState) -> Self {
        Self {
            state,
            record: None,
        }
    }
}

/// Pure transition rules, parameterized by the input cap and rounding.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{Engine, EngineState, Operation};
///
/// let engine = Engine::default();
/// let state = EngineState::new();
/// let state = engine.input_digit(&state, 1);
/// let state = engine.input_digit(&state, 2);
/// let state = engine.input_operator(&state, Operation::Add);
/// let state = engine.input_digit(&state, 5);
/// let step = engine.input_equals(&state);
///
/// assert_eq!(step.state.display_value(), "17");
/// assert_eq!(step.record.unwrap().expression, "12 + 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engine {
    max_input_len: usize,
    precision: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN, DEFAULT_PRECISION)
    }
}

impl Engine {
    pub fn new(max_input_len: usize, precision: u32) -> Self {
        Self {
            max_input_len,
            precision,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.max_input_len, config.precision)
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Apply any key. This is the single dispatch point for buttons and
    /// keyboard alike.
    pub fn handle_key(&self, state: &EngineState, key: Key) -> Step {
        match key {
            Key::Digit(d) => Step::to(self.input_digit(state, d)),
            Key::DecimalPoint => Step::to(self.input_decimal_point(state)),
            Key::Operator(op) => Step::to(self.input_operator(state, op)),
            Key::Equals => self.input_equals(state),
            Key::Clear => Step::to(self.clear()),
            Key::Backspace => Step::to(self.backspace(state)),
            Key::Percent => Step::to(self.percent(state)),
            Key::ToggleSign => Step::to(self.toggle_sign(state)),
        }
    }

    /// Type a digit.
    ///
    /// Starts a fresh operand after an operator or result. A lone `0` is
    /// replaced rather than extended, and digits beyond the length cap are
    /// dropped. Values above 9 are ignored.
    pub fn input_digit(&self, state: &EngineState, digit: u8) -> EngineState {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return state.clone();
        };

        let mut next = state.clone();
        if state.is_new_operation {
            next.current_input = digit.to_string();
            next.is_new_operation = false;
        } else if state.current_input == "0" {
            if digit == '0' {
                return next;
            }
            next.current_input = digit.to_string();
        } else if state.current_input.len() < self.max_input_len {
            next.current_input.push(digit);
        } else {
            return next;
        }
        with_typed_input(next)
    }

    /// Type a decimal point; a second point in the same operand is ignored.
    pub fn input_decimal_point(&self, state: &EngineState) -> EngineState {
        let mut next = state.clone();
        if state.is_new_operation {
            next.current_input = "0.".to_string();
            next.is_new_operation = false;
        } else if !state.current_input.contains('.') {
            next.current_input.push('.');
        } else {
            return next;
        }
        with_typed_input(next)
    }

    /// Choose an operator.
    ///
    /// With a typed operand and a pending operation, the pending operation is
    /// evaluated first and its result becomes the staged operand, so `2 + 3 ×`
    /// stages `5`. With a typed operand and nothing pending, the operand is
    /// staged. With nothing typed but an operand staged, the operator is
    /// swapped. The typed operand is cleared so the next digit starts the
    /// second operand.
    pub fn input_operator(&self, state: &EngineState, operation: Operation) -> EngineState {
        let mut next = state.clone();

        if !state.current_input.is_empty() {
            let staged = match (state.previous_operand, state.operation) {
                (Some(previous), Some(pending)) => {
                    let result = self.compute(previous, pending, &state.current_input);
                    next.display_value = result.clone();
                    result
                }
                _ => state.current_input.clone(),
            };
            next.previous_operand = Some(parse_operand(&staged).unwrap_or(f64::NAN));
            next.current_input.clear();
            next.is_new_operation = true;
        } else if state.previous_operand.is_none() {
            return next;
        }

        next.operation = Some(operation);
        next.expression = typing_expression(&next);
        next
    }

    /// Finish the calculation.
    ///
    /// Needs a staged operand, an operator and a typed second operand;
    /// otherwise nothing changes. The result stays in the input so it can be
    /// chained into the next operator.
    pub fn input_equals(&self, state: &EngineState) -> Step {
        let (Some(previous), Some(operation)) = (state.previous_operand, state.operation) else {
            return Step::to(state.clone());
        };
        if state.current_input.is_empty() {
            return Step::to(state.clone());
        }

        let equation = format!(
            "{} {} {}",
            render_number(previous),
            operation,
            state.current_input
        );
        let result = self.compute(previous, operation, &state.current_input);

        Step {
            record: Some(HistoryRecord::new(equation.clone(), result.clone())),
            state: EngineState {
                current_input: result.clone(),
                previous_operand: None,
                operation: None,
                is_new_operation: true,
                display_value: result.clone(),
                expression: format!("{equation} = {result}"),
            },
        }
    }

    /// Evaluate `lhs op rhs` at this engine's precision.
    pub fn evaluate(&self, lhs: &str, operation: Operation, rhs: &str) -> Option<String> {
        evaluate_with_precision(lhs, operation, rhs, self.precision)
    }

    /// Reset to the initial state.
    pub fn clear(&self) -> EngineState {
        EngineState::new()
    }

    /// Remove the last typed character, falling back to `0` when nothing
    /// numeric is left (`"7"` or `"-5"`).
    ///
    /// Has no effect right after an operator or result.
    pub fn backspace(&self, state: &EngineState) -> EngineState {
        if state.is_new_operation || state.current_input.is_empty() {
            return state.clone();
        }
        let mut next = state.clone();
        next.current_input.pop();
        if parse_operand(&next.current_input).is_none() {
            next.current_input = String::from("0");
        }
        with_typed_input(next)
    }

    /// Divide the typed operand by 100.
    pub fn percent(&self, state: &EngineState) -> EngineState {
        self.transform_input(state, |value| value / 100.0)
    }

    /// Negate the typed operand.
    pub fn toggle_sign(&self, state: &EngineState) -> EngineState {
        self.transform_input(state, |value| -value)
    }

    /// Rewrite the typed operand in place. Only the operand being typed is
    /// touched, never a staged one.
    fn transform_input(&self, state: &EngineState, f: impl Fn(f64) -> f64) -> EngineState {
        let Some(value) = parse_operand(&state.current_input) else {
            return state.clone();
        };
        let mut next = state.clone();
        next.current_input = render_number(f(value));
        with_typed_input(next)
    }

    /// Evaluate a staged operand against the typed one. An operand that fails
    /// to parse turns the result into `NaN`.
    fn compute(&self, previous: f64, operation: Operation, current: &str) -> String {
        self.evaluate(&render_number(previous), operation, current)
            .unwrap_or_else(|| render_number(f64::NAN))
    }
}

/// Sync display and expression with a changed `current_input`.
fn with_typed_input(mut state: EngineState) -> EngineState {
    state.display_value = state.current_input.clone();
    state.expression = typing_expression(&state);
    state
}

/// `"<previous> <op>"`, `"<previous> <op> <typed>"`, or just the typed operand.
fn typing_expression(state: &EngineState) -> String {
    match (state.previous_operand, state.operation) {
        (Some(previous), Some(operation)) if state.current_input.is_empty() => {
            format!("{} {}", render_number(previous), operation)
        }
        (Some(previous), Some(operation)) => format!(
            "{} {} {}",
            render_number(previous),
            operation,
            state.current_input
        ),
        _ => state.current_input.clone(),
    }
}
