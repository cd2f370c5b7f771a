//! Keyboard mapping
//!
//! One table for every key the calculator understands. Both the browser
//! `keydown` listener and the native front end dispatch through it, so each
//! key resolves to exactly one action.

use crate::calc::{Action, Digit, Operation};

/// Map a `KeyboardEvent.key` value to an action
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Enter" => Some(Action::Evaluate),
        "Backspace" => Some(Action::DeleteDigit),
        "Escape" => Some(Action::Clear),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Digit::new(c)
                .map(Action::AddDigit)
                .or_else(|| Operation::from_symbol(c).map(Action::ChooseOperation))
        }
    }
}

/// Actions for a line of typed input
///
/// Whitespace-separated tokens are tried as whole key names first
/// (`Enter`, `Backspace`), otherwise read one character at a time, so
/// `12.5*2 Enter` works. Unknown keys are skipped.
pub fn actions_for_line(line: &str) -> Vec<Action> {
    line.split_whitespace()
        .flat_map(|token| match action_for_key(token) {
            Some(action) => vec![action],
            None => token
                .chars()
                .filter_map(|c| action_for_key(c.encode_utf8(&mut [0; 4])))
                .collect(),
        })
        .collect()
}
