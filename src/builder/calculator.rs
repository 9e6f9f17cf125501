//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::effects::{
    CalculationLogger, Calculator, HistoryStore, InMemoryHistoryStore, NullRenderer, Renderer,
    TracingLogger,
};
use std::time::Duration;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// Collaborators left unset default to [`NullRenderer`],
/// [`InMemoryHistoryStore`] and [`TracingLogger`].
///
/// # Example
///
/// ```rust
/// use reckon::builder::CalculatorBuilder;
/// use reckon::core::{Digit, Operator};
/// use reckon::effects::{Event, RecordingRenderer};
///
/// let renderer = RecordingRenderer::new();
/// let mut calc = CalculatorBuilder::new()
///     .history_capacity(10)
///     .renderer(renderer.clone())
///     .build()
///     .unwrap();
///
/// calc.dispatch(Event::Digit(Digit::try_from('9').unwrap())).unwrap();
/// calc.dispatch(Event::Operator(Operator::Subtract)).unwrap();
///
/// assert_eq!(renderer.last_frame().unwrap().history_label, "9 -");
/// ```
pub struct CalculatorBuilder {
    config: EngineConfig,
    renderer: Option<Box<dyn Renderer>>,
    store: Option<Box<dyn HistoryStore>>,
    logger: Option<Box<dyn CalculationLogger>>,
}

impl CalculatorBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            renderer: None,
            store: None,
            logger: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of history entries.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set how long error messages stay visible.
    pub fn error_display(mut self, duration: Duration) -> Self {
        self.config.error_display_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn history_store(mut self, store: impl HistoryStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn logger(mut self, logger: impl CalculationLogger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Build the calculator.
    ///
    /// Validates the configuration, loads saved history from the store (a
    /// failing store yields an empty history) and draws the initial frame.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;

        let mut calculator = Calculator::new(
            self.config,
            self.renderer.unwrap_or_else(|| Box::new(NullRenderer)),
            self.store
                .unwrap_or_else(|| Box::new(InMemoryHistoryStore::new())),
            self.logger.unwrap_or_else(|| Box::new(TracingLogger)),
        );
        calculator.load_history();
        calculator.redraw();
        Ok(calculator)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
