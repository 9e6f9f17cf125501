//! Builder API for ergonomic calculator construction.
//!
//! The builder wires collaborators and configuration together and loads any
//! previously saved history before the first event is dispatched.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
