//! Keypad Calc - a keypad calculator driven by a pure reducer
//!
//! Core modules:
//! - `calc`: State, reducer, evaluator and operand formatter (pure)
//! - `store`: Owned state value and action dispatch
//! - `keymap`: Keyboard key -> action table
//! - `layout`: Button grid description
//! - `view`: Display lines derived from a state
//! - `settings`: Preferences (keyboard, key hints, verbosity)

pub mod calc;
pub mod keymap;
pub mod layout;
pub mod settings;
pub mod store;
pub mod view;

pub use calc::{Action, CalculatorState, Digit, Operation, format_operand, reduce};
pub use settings::{Settings, Verbosity};
pub use store::Store;
pub use view::DisplayText;
