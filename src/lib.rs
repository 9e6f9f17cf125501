//! Reckon: a pure functional calculator engine
//!
//! Reckon follows the "pure core, imperative shell" philosophy. The core
//! calculator logic is composed of pure functions over an explicit
//! [`EngineState`](core::EngineState), while rendering, persistence and
//! logging live behind collaborator traits in [`effects`].
//!
//! # Core Concepts
//!
//! - **Engine state**: the operand being typed, a pending left operand and
//!   operator, and whether the next digit starts a new operand
//! - **Operator chaining**: choosing an operator while one is pending
//!   evaluates the pending operation first, so `2 + 3 * 4 =` yields `20`
//! - **Rounding**: every result is rounded to 8 decimal places
//! - **Memory and history**: a single memory register and a capped,
//!   most-recent-first history of completed calculations
//!
//! # Example
//!
//! ```rust
//! use reckon::builder::CalculatorBuilder;
//! use reckon::core::{CalcError, Digit, Operator};
//! use reckon::effects::Event;
//!
//! let digit = |c: char| Event::Digit(Digit::try_from(c).unwrap());
//! let mut calc = CalculatorBuilder::new().build().unwrap();
//!
//! calc.dispatch_all([digit('7'), Event::Operator(Operator::Add), digit('3'), Event::Equals])
//!     .unwrap();
//! assert_eq!(calc.state().current_value(), "10");
//! assert_eq!(calc.history().entries()[0].expression, "7 + 3 = 10");
//!
//! let result = calc.dispatch_all([Event::Operator(Operator::Divide), digit('0'), Event::Equals]);
//! assert_eq!(result, Err(CalcError::DivideByZero));
//! assert_eq!(calc.history().len(), 1);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::CalculatorBuilder;
pub use crate::config::EngineConfig;
pub use crate::core::{CalcError, Digit, EngineState, Operator};
pub use crate::effects::{Calculator, Event};
