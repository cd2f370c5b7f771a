//! Calculator state and the typed action payloads
//!
//! The state is a flat record; every transition builds a new value.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operator awaiting a second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Symbol shown next to the previous operand
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Button face
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

/// A single keypad entry: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Digit(c))
        } else {
            None
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }
}

/// Complete calculator state
///
/// `Default` is the empty state used at start-up and after `Clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed (or the last result)
    pub current_operand: Option<String>,
    /// Operand committed by choosing an operation
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of extending it
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbol_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol('x'), None);
        assert_eq!(Operation::from_symbol('='), None);
    }

    #[test]
    fn test_divide_label() {
        assert_eq!(Operation::Divide.label(), "÷");
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_digit_rejects_non_digits() {
        assert!(Digit::new('7').is_some());
        assert!(Digit::new('.').is_some_and(|d| d.is_point()));
        assert!(Digit::new('a').is_none());
        assert!(Digit::new('+').is_none());
        assert!(Digit::new(',').is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let state = CalculatorState::default();
        assert!(state.is_empty());
        assert!(state.current_operand.is_none());
        assert!(state.previous_operand.is_none());
        assert!(state.operation.is_none());
        assert!(!state.overwrite);
    }
}
