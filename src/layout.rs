//! Button grid description
//!
//! The 4x5 keypad as plain data. The DOM layer builds buttons from it; the
//! order matches CSS grid flow (row by row, left to right).

use crate::calc::{Action, Digit, Operation};

/// Number of grid columns
pub const GRID_COLUMNS: usize = 4;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Text on the button face
    pub label: &'static str,
    /// Optional key caption shown under the label
    pub hint: Option<&'static str>,
    pub action: Action,
    /// Occupies two grid columns
    pub span_two: bool,
}

impl ButtonSpec {
    fn digit(c: char) -> Option<Self> {
        let digit = Digit::new(c)?;
        Some(Self {
            label: digit_label(c),
            hint: None,
            action: Action::AddDigit(digit),
            span_two: false,
        })
    }

    fn operation(op: Operation) -> Self {
        Self {
            label: op.label(),
            hint: None,
            action: Action::ChooseOperation(op),
            span_two: false,
        }
    }

    /// Grid columns taken by this button
    pub fn columns(&self) -> usize {
        if self.span_two { 2 } else { 1 }
    }

    pub fn css_class(&self) -> &'static str {
        if self.span_two { "span-two" } else { "" }
    }
}

fn digit_label(c: char) -> &'static str {
    match c {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        _ => ".",
    }
}

/// Buttons in display order
pub fn keypad() -> Vec<ButtonSpec> {
    let mut buttons = vec![
        ButtonSpec {
            label: "AC",
            hint: Some("Esc"),
            action: Action::Clear,
            span_two: true,
        },
        ButtonSpec {
            label: "DEL",
            hint: Some("⌫"),
            action: Action::DeleteDigit,
            span_two: false,
        },
        ButtonSpec::operation(Operation::Divide),
    ];

    let rows = [
        ("123", Operation::Multiply),
        ("456", Operation::Add),
        ("789", Operation::Subtract),
    ];
    for (digits, op) in rows {
        buttons.extend(digits.chars().filter_map(ButtonSpec::digit));
        buttons.push(ButtonSpec::operation(op));
    }

    buttons.extend(".0".chars().filter_map(ButtonSpec::digit));
    buttons.push(ButtonSpec {
        label: "=",
        hint: None,
        action: Action::Evaluate,
        span_two: true,
    });

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_four_by_five() {
        let buttons = keypad();
        let cells: usize = buttons.iter().map(ButtonSpec::columns).sum();
        assert_eq!(cells, GRID_COLUMNS * 5);
    }

    #[test]
    fn test_rows_fill_exactly() {
        // No button may straddle a row boundary
        let mut column = 0;
        for button in keypad() {
            column += button.columns();
            assert!(column <= GRID_COLUMNS, "{} overflows its row", button.label);
            if column == GRID_COLUMNS {
                column = 0;
            }
        }
        assert_eq!(column, 0);
    }

    #[test]
    fn test_every_action_reachable() {
        let buttons = keypad();
        for c in "0123456789.".chars() {
            let action = Action::AddDigit(Digit::new(c).unwrap());
            assert!(buttons.iter().any(|b| b.action == action), "missing {c}");
        }
        for op in Operation::ALL {
            let action = Action::ChooseOperation(op);
            assert!(buttons.iter().any(|b| b.action == action));
        }
        for action in [Action::Clear, Action::DeleteDigit, Action::Evaluate] {
            assert!(buttons.iter().any(|b| b.action == action));
        }
        assert_eq!(buttons.len(), 18);
    }

    #[test]
    fn test_labels() {
        let buttons = keypad();
        assert_eq!(buttons[0].label, "AC");
        assert_eq!(buttons[0].css_class(), "span-two");
        assert_eq!(buttons[2].label, "÷");
        assert_eq!(buttons.last().map(|b| b.label), Some("="));
    }
}
