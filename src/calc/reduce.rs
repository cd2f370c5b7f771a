//! State transitions
//!
//! `reduce` is pure: it reads the previous state and returns the next one.
//! Invalid input is a no-op that returns an unchanged copy.

use super::evaluate::evaluate;
use super::state::{CalculatorState, Digit, Operation};

/// Everything the presentation layer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

/// Apply one action
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state).unwrap_or_else(|| state.clone()),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.as_char().to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");
    if digit == Digit::ZERO && current == "0" {
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        return state.clone();
    }

    let mut next = current.to_string();
    next.push(digit.as_char());
    CalculatorState {
        current_operand: Some(next),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.previous_operand, &state.current_operand) {
        (None, None) => state.clone(),
        // Operator change before the second operand is typed
        (Some(_), None) => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        (None, Some(current)) => CalculatorState {
            previous_operand: Some(current.clone()),
            current_operand: None,
            operation: Some(op),
            ..state.clone()
        },
        (Some(previous), Some(current)) => {
            // Without a pending operation there is nothing to combine; commit
            // the typed operand in place of the old one.
            let combined = match state.operation {
                Some(pending) => evaluate(previous, current, pending),
                None => current.clone(),
            };
            CalculatorState {
                previous_operand: Some(combined),
                current_operand: None,
                operation: Some(op),
                ..state.clone()
            }
        }
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = &state.current_operand else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let trimmed = chars.as_str();
    CalculatorState {
        current_operand: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        ..state.clone()
    }
}

/// `None` when any of the three inputs is missing
fn evaluate_pending(state: &CalculatorState) -> Option<CalculatorState> {
    let previous = state.previous_operand.as_deref()?;
    let current = state.current_operand.as_deref()?;
    let operation = state.operation?;

    Some(CalculatorState {
        current_operand: Some(evaluate(previous, current, operation)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    })
}
