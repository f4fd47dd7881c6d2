//! DOM values to page events. Kept free of Dioxus so it can be tested natively.

use chipin_core::models::{parse_amount, ChipInEvent, GreetingEvent, SelectionEvent};

/// Text box contents become the greeting verbatim.
pub fn greeting_changed(value: &str) -> GreetingEvent {
    GreetingEvent::TextChanged(value.to_string())
}

/// `<select>` option values are choice positions; the placeholder is `-1`.
pub fn selection_changed(value: &str) -> SelectionEvent {
    SelectionEvent::Changed(value.trim().parse::<i64>().unwrap_or(-1))
}

/// The "Add" button of the chip-in form. The amount box may hold anything.
pub fn contribution_added(name: &str, amount: &str) -> ChipInEvent {
    ChipInEvent::Add {
        name: name.trim().to_string(),
        amount: parse_amount(amount),
    }
}

/// Option value for the choice at `index`.
pub fn choice_value(index: usize) -> String {
    index.to_string()
}
