//! Calculator session: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns one engine state and one history. Each key is run
//! through the [`Engine`], the returned state replaces the stored one, and a
//! completed equation is pushed onto the history. This is also where logging
//! happens; the core stays silent.

use crate::config::CalculatorConfig;
use crate::core::{Engine, EngineState, HistoryStore, Phase, Step};
use crate::input::Key;
use tracing::{debug, warn};

/// One calculator session.
///
/// # Example
///
/// ```rust
/// use deskcalc::session::Calculator;
///
/// let mut calc = Calculator::new();
/// for name in ["1", "2", "+", "5", "Enter"] {
///     calc.press_keyboard(name);
/// }
///
/// assert_eq!(calc.display(), "17");
/// assert_eq!(calc.expression(), "12 + 5 = 17");
/// assert_eq!(calc.history().list()[0].expression, "12 + 5");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    engine: Engine,
    config: CalculatorConfig,
    state: EngineState,
    history: HistoryStore,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a session with default limits.
    pub fn new() -> Self {
        Self::from_parts(
            CalculatorConfig::default(),
            EngineState::new(),
            HistoryStore::new(),
        )
    }

    /// Start a [`CalculatorBuilder`](crate::builder::CalculatorBuilder).
    pub fn builder() -> crate::builder::CalculatorBuilder {
        crate::builder::CalculatorBuilder::new()
    }

    /// Assemble a session from validated parts.
    pub(crate) fn from_parts(
        config: CalculatorConfig,
        state: EngineState,
        history: HistoryStore,
    ) -> Self {
        Self {
            engine: Engine::from_config(&config),
            config,
            state,
            history,
        }
    }

    /// Apply one key and return the new state.
    pub fn press(&mut self, key: Key) -> &EngineState {
        let Step { state, record } = self.engine.handle_key(&self.state, key);

        if degrades(&self.state, &state, record.is_some()) {
            warn!(result = %state.display_value(), "calculation produced a non-finite result");
        }
        if let Some(record) = record {
            if self.history.len() == self.history.capacity() {
                debug!(
                    capacity = self.history.capacity(),
                    "history full, evicting oldest record"
                );
            }
            debug!(
                expression = %record.expression,
                result = %record.result,
                "calculation recorded"
            );
            self.history = self.history.record(record);
        }

        self.state = state;
        debug!(
            key = %key,
            phase = self.state.phase().name(),
            display = %self.state.display_value(),
            "key applied"
        );
        &self.state
    }

    /// Apply a physical keyboard key by its DOM key name.
    ///
    /// Returns `false`, leaving the session untouched, when the key has no
    /// calculator meaning.
    pub fn press_keyboard(&mut self, name: &str) -> bool {
        match Key::from_keyboard(name) {
            Some(key) => {
                self.press(key);
                true
            }
            None => {
                debug!(key = name, "ignoring unmapped keyboard key");
                false
            }
        }
    }

    /// Apply a sequence of keys in order.
    pub fn press_all<I>(&mut self, keys: I) -> &EngineState
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        &self.state
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Raw display value.
    pub fn display(&self) -> &str {
        self.state.display_value()
    }

    /// Display value with thousands separators.
    pub fn formatted_display(&self) -> String {
        self.state.formatted_display()
    }

    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Empty the history panel. The engine state is left alone.
    pub fn clear_history(&mut self) {
        debug!(cleared = self.history.len(), "history cleared");
        self.history = self.history.clear();
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Whether a step left a freshly computed non-finite value on the display,
/// either through equals or through a chained operator.
fn degrades(before: &EngineState, after: &EngineState, recorded: bool) -> bool {
    after.is_error() && (recorded || after.display_value() != before.display_value())
}
