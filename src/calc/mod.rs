//! Calculator core
//!
//! Everything here is pure and platform-independent:
//! - `state`: the flat state record and typed payloads
//! - `reduce`: (state, action) -> state
//! - `evaluate`: binary arithmetic on operand strings
//! - `format`: display formatting with thousands grouping

pub mod evaluate;
pub mod format;
pub mod reduce;
pub mod state;

pub use evaluate::{evaluate, number_to_string, parse_operand};
pub use format::format_operand;
pub use reduce::{Action, reduce};
pub use state::{CalculatorState, Digit, Operation};
