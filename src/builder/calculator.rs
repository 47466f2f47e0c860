//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::{EngineState, HistoryStore};
use crate::session::Calculator;

/// Builder for constructing calculator sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use deskcalc::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .max_input_len(8)
///     .history_capacity(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.config().max_input_len, 8);
/// assert_eq!(calc.history().capacity(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    initial: Option<EngineState>,
    history: Option<HistoryStore>,
}

impl CalculatorBuilder {
    /// Create a new builder with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all limits at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Start from an existing state instead of the initial one.
    pub fn initial_state(mut self, state: EngineState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Seed the history. Its records are kept under the configured capacity.
    pub fn history(mut self, history: HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    /// Build the session.
    /// Returns an error if the limits are invalid or the seeded history does
    /// not fit.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;

        let capacity = self.config.history_capacity;
        let history = match self.history {
            Some(seeded) if seeded.len() > capacity => {
                return Err(BuildError::HistoryOverCapacity {
                    records: seeded.len(),
                    capacity,
                });
            }
            Some(seeded) => HistoryStore::with_records(seeded.list(), capacity),
            None => HistoryStore::with_capacity(capacity),
        };

        Ok(Calculator::from_parts(
            self.config,
            self.initial.unwrap_or_default(),
            history,
        ))
    }
}
