//! Calculator session: the imperative shell around the pure engine.

use super::event::Event;
use super::ports::{CalculationLogger, Frame, HistoryStore, Renderer};
use crate::checkpoint::{CheckpointError, SessionCheckpoint};
use crate::config::EngineConfig;
use crate::core::{CalcError, CalcHistory, EngineState, Evaluation, HistoryEntry, MemoryRegister};
use chrono::{DateTime, Utc};

/// A calculation error together with when it was raised.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub error: CalcError,
    pub raised_at: DateTime<Utc>,
}

/// Owns the engine state, memory register and history for one session and
/// reports every change to its collaborators.
///
/// Events run to completion one at a time. Collaborator failures are logged
/// and never change the calculation state.
///
/// Build one with [`CalculatorBuilder`](crate::builder::CalculatorBuilder).
pub struct Calculator {
    state: EngineState,
    memory: MemoryRegister,
    history: CalcHistory,
    config: EngineConfig,
    renderer: Box<dyn Renderer>,
    store: Box<dyn HistoryStore>,
    logger: Box<dyn CalculationLogger>,
    last_error: Option<Notice>,
}

impl Calculator {
    pub(crate) fn new(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        store: Box<dyn HistoryStore>,
        logger: Box<dyn CalculationLogger>,
    ) -> Self {
        Self {
            state: EngineState::new(),
            memory: MemoryRegister::new(),
            history: CalcHistory::with_capacity(config.history_capacity),
            config,
            renderer,
            store,
            logger,
            last_error: None,
        }
    }

    /// The operand, pending operation and entry mode.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    pub fn history(&self) -> &CalcHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The most recent calculation error, whether or not it is still shown.
    pub fn last_error(&self) -> Option<&Notice> {
        self.last_error.as_ref()
    }

    /// The calculation error still on screen at `now`, if any.
    pub fn active_error(&self, now: DateTime<Utc>) -> Option<&CalcError> {
        let notice = self.last_error.as_ref()?;
        let elapsed = now.signed_duration_since(notice.raised_at).to_std().ok()?;
        (elapsed < self.config.error_display()).then_some(&notice.error)
    }

    /// What the renderer currently shows.
    pub fn frame(&self) -> Frame {
        Frame {
            display: self.state.current_value().to_string(),
            history_label: self.state.pending_expression().unwrap_or_default(),
            memory_indicator: if self.memory.is_set() {
                self.config.memory_indicator.clone()
            } else {
                String::new()
            },
        }
    }

    /// Apply one event.
    ///
    /// On a calculation error the state, memory and history are left as they
    /// were, the renderer is asked to show the message, and the error is
    /// returned. The renderer receives a fresh frame either way.
    pub fn dispatch(&mut self, event: Event) -> Result<(), CalcError> {
        tracing::debug!(event = event.name(), "dispatching calculator event");

        let outcome = self.apply(event);
        if let Err(error) = &outcome {
            self.report_error(error.clone());
        }
        self.redraw();
        outcome
    }

    /// Dispatch several events in order, stopping at the first error.
    pub fn dispatch_all<I>(&mut self, events: I) -> Result<(), CalcError>
    where
        I: IntoIterator<Item = Event>,
    {
        events.into_iter().try_for_each(|event| self.dispatch(event))
    }

    fn apply(&mut self, event: Event) -> Result<(), CalcError> {
        match event {
            Event::Digit(digit) => self.state = self.state.input_digit(digit),
            Event::DecimalPoint => self.state = self.state.input_decimal_point(),
            Event::Operator(op) => self.state = self.state.input_operator(op)?,
            Event::Equals => {
                if let Some(evaluation) = self.state.calculate_result()? {
                    self.complete(evaluation);
                }
            }
            Event::ClearAll => self.state = self.state.clear_all(),
            Event::ClearEntry => self.state = self.state.clear_entry(),
            Event::Backspace => self.state = self.state.backspace(),
            Event::Percentage => self.state = self.state.percentage()?,
            Event::MemoryClear => self.memory = self.memory.clear(),
            Event::MemoryRecall => self.state = self.state.recall(self.memory.recall()),
            Event::MemoryAdd => self.memory = self.memory.add(self.state.operand())?,
            Event::MemorySubtract => self.memory = self.memory.subtract(self.state.operand())?,
            Event::ClearHistory => {
                self.history = self.history.clear();
                tracing::info!("calculation history cleared");
                self.persist_history();
            }
            Event::RecallHistory(index) => {
                if let Some(result) = self.history.get(index).map(|entry| entry.result) {
                    self.state = self.state.recall(result);
                }
            }
        }
        Ok(())
    }

    fn complete(&mut self, evaluation: Evaluation) {
        let Evaluation {
            state,
            expression,
            result,
        } = evaluation;

        tracing::debug!(%expression, result, "calculation completed");

        self.history = self.history.record(HistoryEntry {
            expression: expression.clone(),
            result,
            timestamp: Utc::now(),
        });
        self.state = state;

        if let Err(error) = self.logger.log(&expression, result) {
            tracing::warn!(%error, "failed to log calculation");
        }
        self.persist_history();
    }

    fn report_error(&mut self, error: CalcError) {
        tracing::debug!(%error, "calculation rejected");
        self.renderer
            .show_error(&error.to_string(), self.config.error_display());
        self.last_error = Some(Notice {
            error,
            raised_at: Utc::now(),
        });
    }

    /// Send the current frame to the renderer.
    pub fn redraw(&mut self) {
        let frame = self.frame();
        self.renderer.render(&frame);
    }

    fn persist_history(&mut self) {
        if let Err(error) = self.store.save(self.history.entries()) {
            tracing::warn!(%error, "failed to save calculation history");
        }
    }

    /// Replace the history with whatever the store holds. A failing store
    /// leaves the current history in place.
    pub(crate) fn load_history(&mut self) {
        match self.store.load() {
            Ok(entries) => {
                self.history = CalcHistory::from_entries(entries, self.config.history_capacity);
                tracing::info!(entries = self.history.len(), "calculation history restored");
            }
            Err(error) => tracing::warn!(%error, "failed to load calculation history"),
        }
    }

    /// Snapshot the session.
    pub fn checkpoint(&self) -> SessionCheckpoint {
        SessionCheckpoint::new(
            self.state.clone(),
            self.memory,
            self.history.clone(),
        )
    }

    /// Restore a snapshot after validating it. An invalid snapshot leaves the
    /// session untouched.
    pub fn restore(&mut self, checkpoint: SessionCheckpoint) -> Result<(), CheckpointError> {
        checkpoint.validate_for(self.config.history_capacity)?;

        tracing::info!(checkpoint = %checkpoint.id, "restoring calculator session");
        self.state = checkpoint.state;
        self.memory = checkpoint.memory;
        self.history = CalcHistory::from_entries(
            checkpoint.history.entries().to_vec(),
            self.config.history_capacity,
        );
        self.last_error = None;
        self.persist_history();
        self.redraw();
        Ok(())
    }
}
