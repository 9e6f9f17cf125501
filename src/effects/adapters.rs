//! Ready-made collaborators.

use super::ports::{CalculationLogger, Frame, HistoryStore, Renderer, StoreError};
use crate::core::HistoryEntry;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame) {}
}

/// Renderer that keeps every frame and error message it receives.
///
/// Clones share the same buffers, so a test can keep one handle and give the
/// other to the calculator.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Rc<RefCell<Vec<Frame>>>,
    errors: Rc<RefCell<Vec<(String, Duration)>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames.borrow().last().cloned()
    }

    pub fn errors(&self) -> Vec<(String, Duration)> {
        self.errors.borrow().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame) {
        self.frames.borrow_mut().push(frame.clone());
    }

    fn show_error(&mut self, message: &str, duration: Duration) {
        self.errors.borrow_mut().push((message.to_string(), duration));
    }
}

/// History store backed by shared memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: Rc<RefCell<Vec<HistoryEntry>>>,
    saves: Rc<RefCell<usize>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with entries already "persisted", most recent first.
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(entries)),
            saves: Rc::default(),
        }
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.borrow().clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn save(&mut self, history: &[HistoryEntry]) -> Result<(), StoreError> {
        *self.entries.borrow_mut() = history.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.entries.borrow().clone())
    }
}

/// History store writing a JSON array of entries to a file.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash never leaves a half-written history behind. A missing
/// file loads as an empty history.
#[derive(Clone, Debug)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn save(&mut self, history: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(history)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<HistoryEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

/// Logger that emits each calculation as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl CalculationLogger for TracingLogger {
    fn log(&mut self, expression: &str, result: f64) -> Result<(), StoreError> {
        tracing::info!(target: "reckon::calculations", expression, result, "calculation");
        Ok(())
    }
}

/// Logger that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl CalculationLogger for NullLogger {
    fn log(&mut self, _expression: &str, _result: f64) -> Result<(), StoreError> {
        Ok(())
    }
}
