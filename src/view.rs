//! Display text derived from a state

use crate::calc::{CalculatorState, format_operand};

/// The two display lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    /// Previous operand followed by the pending operator
    pub previous: String,
    pub current: String,
}

impl DisplayText {
    pub fn from_state(state: &CalculatorState) -> Self {
        let mut previous = format_operand(state.previous_operand.as_deref());
        if let Some(op) = state.operation {
            if !previous.is_empty() {
                previous.push(' ');
            }
            previous.push(op.symbol());
        }

        Self {
            previous,
            current: format_operand(state.current_operand.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Operation;

    #[test]
    fn test_empty_state() {
        assert_eq!(DisplayText::from_state(&CalculatorState::default()), DisplayText::default());
    }

    #[test]
    fn test_pending_operation() {
        let state = CalculatorState {
            previous_operand: Some("1234".to_string()),
            current_operand: Some("56.70".to_string()),
            operation: Some(Operation::Divide),
            overwrite: false,
        };
        let text = DisplayText::from_state(&state);
        assert_eq!(text.previous, "1,234 /");
        assert_eq!(text.current, "56.70");
    }

    #[test]
    fn test_result_only() {
        let state = CalculatorState {
            current_operand: Some("1000000".to_string()),
            overwrite: true,
            ..Default::default()
        };
        let text = DisplayText::from_state(&state);
        assert_eq!(text.previous, "");
        assert_eq!(text.current, "1,000,000");
    }
}
