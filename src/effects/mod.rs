//! The imperative shell around the pure calculator core.
//!
//! This module owns everything with side effects: the running session,
//! the collaborators it reports to, and timestamps for history entries
//! and error notices.
//!
//! # Key Concepts
//!
//! - **Calculator**: dispatches [`Event`]s to the pure transitions and keeps
//!   state, memory and history in step
//! - **Ports**: [`Renderer`], [`HistoryStore`] and [`CalculationLogger`]
//! - **Adapters**: ready-made collaborators for tests and simple front ends

mod adapters;
mod calculator;
mod event;
mod ports;

pub use adapters::{
    InMemoryHistoryStore, JsonFileHistoryStore, NullLogger, NullRenderer, RecordingRenderer,
    TracingLogger,
};
pub use calculator::{Calculator, Notice};
pub use event::Event;
pub use ports::{CalculationLogger, Frame, HistoryStore, Renderer, StoreError};
